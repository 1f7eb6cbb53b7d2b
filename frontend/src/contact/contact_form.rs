use gloo_console::log;
use gloo_net::http::Request;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config;
use crate::contact::confirmation_step::ConfirmationStep;
use crate::contact::contact_info_step::ContactInfoStep;
use crate::contact::form_state::{FormFlow, Step};
use crate::contact::information_request_step::InformationRequestStep;
use crate::contact::project_details_step::ProjectDetailsStep;
use crate::contact::quote_request_step::QuoteRequestStep;
use crate::contact::request_type_step::RequestTypeStep;
use crate::contact::step_indicator::StepIndicator;
use crate::contact::summary_step::SummaryStep;
use crate::contact::types::RequestType;

const SUBMIT_ERROR: &str = "L'envoi a échoué. Veuillez réessayer dans quelques instants.";

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let flow = use_state(FormFlow::default);
    let is_sending = use_state(|| false);
    let toast = use_state(|| None::<String>);

    let on_change: Callback<FormFlow> = {
        let flow = flow.clone();
        Callback::from(move |updated: FormFlow| flow.set(updated))
    };

    let on_select_type = {
        let flow = flow.clone();
        Callback::from(move |request_type: RequestType| {
            let mut updated = (*flow).clone();
            updated.select_request_type(request_type);
            flow.set(updated);
        })
    };

    let on_back = {
        let flow = flow.clone();
        Callback::from(move |_: MouseEvent| {
            let mut updated = (*flow).clone();
            updated.back();
            flow.set(updated);
        })
    };

    let on_next = {
        let flow = flow.clone();
        Callback::from(move |_: MouseEvent| {
            let mut updated = (*flow).clone();
            updated.advance();
            flow.set(updated);
        })
    };

    let on_reset = {
        let flow = flow.clone();
        Callback::from(move |_: ()| {
            let mut updated = (*flow).clone();
            updated.reset();
            flow.set(updated);
        })
    };

    let dismiss_toast = {
        let toast = toast.clone();
        Callback::from(move |_: MouseEvent| toast.set(None))
    };

    // The one asynchronous operation of the flow. The record stays
    // populated on failure so the user can retry without re-entering
    // anything.
    let on_submit = {
        let flow = flow.clone();
        let is_sending = is_sending.clone();
        let toast = toast.clone();
        Callback::from(move |_: MouseEvent| {
            if *is_sending {
                return;
            }
            let mut current = (*flow).clone();
            let errors = current.validate_current_step();
            if !errors.is_empty() {
                current.errors = errors;
                flow.set(current);
                return;
            }

            is_sending.set(true);
            toast.set(None);
            let record = current.record.clone();
            let flow = flow.clone();
            let is_sending = is_sending.clone();
            let toast = toast.clone();
            spawn_local(async move {
                let url = format!("{}/api/send-email", config::get_backend_url());
                let response = Request::post(&url)
                    .json(&record)
                    .unwrap()
                    .send()
                    .await;
                match response {
                    Ok(response) if response.ok() => {
                        let mut updated = (*flow).clone();
                        updated.mark_submitted();
                        flow.set(updated);
                    }
                    Ok(response) => {
                        log!("send-email failed with status", response.status());
                        toast.set(Some(SUBMIT_ERROR.to_string()));
                    }
                    Err(e) => {
                        log!("send-email network error:", e.to_string());
                        toast.set(Some(SUBMIT_ERROR.to_string()));
                    }
                }
                is_sending.set(false);
            });
        })
    };

    let step_view = match flow.current() {
        Step::RequestType => html! {
            <RequestTypeStep
                selected={flow.record.request_type}
                on_select={on_select_type}
            />
        },
        Step::ContactInfo => html! {
            <ContactInfoStep flow={(*flow).clone()} on_change={on_change.clone()} />
        },
        Step::InformationRequest => html! {
            <InformationRequestStep flow={(*flow).clone()} on_change={on_change.clone()} />
        },
        Step::QuoteRequest => html! {
            <QuoteRequestStep flow={(*flow).clone()} on_change={on_change.clone()} />
        },
        Step::ProjectDetails => html! {
            <ProjectDetailsStep flow={(*flow).clone()} on_change={on_change.clone()} />
        },
        Step::Summary => html! {
            <SummaryStep record={flow.record.clone()} />
        },
    };

    let submit_label = if *is_sending {
        "Envoi en cours..."
    } else if flow.record.request_type == Some(RequestType::Quote) {
        "Commander"
    } else {
        "Envoyer"
    };

    html! {
        <div class="contact-page">
            <style>
                {r#"
                    .contact-page {
                        min-height: 100vh;
                        padding: 4rem 1rem;
                        background: linear-gradient(135deg, #fdf6f0, #f3e8e2);
                        color: #3a3a3a;
                    }
                    .contact-card {
                        max-width: 720px;
                        margin: 0 auto;
                        background: rgba(255, 255, 255, 0.7);
                        border: 1px solid rgba(201, 100, 90, 0.15);
                        border-radius: 24px;
                        padding: 2.5rem;
                        box-shadow: 0 8px 32px rgba(0, 0, 0, 0.08);
                    }
                    .step-indicator-labels {
                        display: flex;
                        justify-content: space-between;
                        font-size: 0.9rem;
                        color: #8a7a72;
                        margin-bottom: 0.5rem;
                    }
                    .progress-track {
                        height: 8px;
                        background: #eadfd8;
                        border-radius: 4px;
                        overflow: hidden;
                    }
                    .progress-fill {
                        height: 100%;
                        background: #C9645A;
                        border-radius: 4px;
                        transition: width 0.3s ease;
                    }
                    .step-dots {
                        display: flex;
                        justify-content: center;
                        gap: 1rem;
                        margin-top: 1rem;
                    }
                    .step-dot {
                        width: 2.2rem;
                        height: 2.2rem;
                        border-radius: 50%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: #eadfd8;
                        color: #8a7a72;
                        font-size: 0.9rem;
                    }
                    .step-dot.current { background: #C9645A; color: #fff; }
                    .step-dot.completed { background: #C9645A99; color: #fff; }
                    .step-heading { text-align: center; margin: 2rem 0; }
                    .step-heading h2 { font-size: 1.5rem; margin-bottom: 0.5rem; }
                    .step-heading p { color: #8a7a72; }
                    .form-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 1rem;
                    }
                    @media (max-width: 640px) {
                        .form-grid { grid-template-columns: 1fr; }
                    }
                    .form-field { margin-bottom: 1rem; position: relative; }
                    .form-field label, .group-label {
                        display: block;
                        font-weight: 500;
                        margin-bottom: 0.3rem;
                    }
                    .form-field input, .form-field select, .form-field textarea {
                        width: 100%;
                        padding: 0.6rem 0.8rem;
                        border: 1px solid #d8c8c0;
                        border-radius: 10px;
                        background: rgba(255, 255, 255, 0.8);
                        font-size: 1rem;
                        box-sizing: border-box;
                    }
                    .field-error { color: #C9645A; font-size: 0.85rem; margin: 0.3rem 0 0; }
                    .checkbox-row {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 0.4rem 0;
                        cursor: pointer;
                    }
                    .checkbox-row input { width: auto; }
                    .sections-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 0.2rem 1rem;
                    }
                    .request-type-cards {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 1rem;
                        max-width: 560px;
                        margin: 0 auto;
                    }
                    @media (max-width: 640px) {
                        .request-type-cards { grid-template-columns: 1fr; }
                    }
                    .request-type-card {
                        padding: 1.5rem;
                        border: 1px solid #d8c8c0;
                        border-radius: 16px;
                        background: rgba(255, 255, 255, 0.8);
                        cursor: pointer;
                        text-align: center;
                        transition: border-color 0.2s ease;
                    }
                    .request-type-card:hover { border-color: #C9645A; }
                    .request-type-card.selected { border: 2px solid #C9645A; }
                    .request-type-title { display: block; font-weight: 600; font-size: 1.1rem; }
                    .request-type-description { display: block; color: #8a7a72; margin-top: 0.4rem; }
                    .city-suggestions {
                        position: absolute;
                        z-index: 10;
                        left: 0;
                        right: 0;
                        margin: 0.2rem 0 0;
                        padding: 0;
                        list-style: none;
                        background: #fff;
                        border: 1px solid #d8c8c0;
                        border-radius: 10px;
                        overflow: hidden;
                    }
                    .city-suggestion { padding: 0.5rem 0.8rem; cursor: pointer; }
                    .city-suggestion:hover { background: #fdf6f0; }
                    .file-list { list-style: none; padding: 0; margin: 0.5rem 0 0; }
                    .file-item {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        padding: 0.4rem 0.8rem;
                        background: rgba(255, 255, 255, 0.8);
                        border: 1px solid #eadfd8;
                        border-radius: 10px;
                        margin-bottom: 0.3rem;
                    }
                    .file-remove {
                        border: none;
                        background: none;
                        color: #C9645A;
                        cursor: pointer;
                        font-size: 1rem;
                    }
                    .summary-block {
                        background: rgba(255, 255, 255, 0.6);
                        border: 1px solid #eadfd8;
                        border-radius: 14px;
                        padding: 1rem 1.5rem;
                        margin-bottom: 1rem;
                    }
                    .summary-block h3 { margin: 0 0 0.5rem; font-size: 1.05rem; }
                    .form-nav {
                        display: flex;
                        justify-content: space-between;
                        margin-top: 2rem;
                        padding-top: 1.5rem;
                        border-top: 1px solid #eadfd8;
                    }
                    .btn-primary {
                        padding: 0.7rem 2rem;
                        background: #C9645A;
                        color: #fff;
                        border: none;
                        border-radius: 999px;
                        font-size: 1rem;
                        font-weight: 500;
                        cursor: pointer;
                    }
                    .btn-primary:disabled { opacity: 0.5; cursor: not-allowed; }
                    .btn-secondary {
                        padding: 0.7rem 1.5rem;
                        background: none;
                        color: #8a7a72;
                        border: 1px solid #d8c8c0;
                        border-radius: 999px;
                        font-size: 1rem;
                        cursor: pointer;
                    }
                    .btn-secondary:disabled { opacity: 0.4; cursor: not-allowed; }
                    .confirmation { text-align: center; }
                    .confirmation-icon {
                        width: 4.5rem;
                        height: 4.5rem;
                        margin: 0 auto 1rem;
                        border-radius: 50%;
                        background: #3f9d63;
                        color: #fff;
                        font-size: 2.2rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .confirmation-contact { color: #8a7a72; font-size: 0.9rem; }
                    .toast {
                        position: fixed;
                        bottom: 1.5rem;
                        left: 50%;
                        transform: translateX(-50%);
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                        background: #3a3a3a;
                        color: #fff;
                        padding: 0.8rem 1.2rem;
                        border-radius: 12px;
                        box-shadow: 0 8px 24px rgba(0, 0, 0, 0.25);
                        z-index: 100;
                    }
                    .toast button {
                        border: none;
                        background: none;
                        color: #fff;
                        font-size: 1.1rem;
                        cursor: pointer;
                    }
                "#}
            </style>

            <div class="contact-card">
                if flow.submitted {
                    <ConfirmationStep
                        record={flow.record.clone()}
                        on_new_request={on_reset}
                    />
                } else {
                    if flow.record.request_type.is_some() {
                        <StepIndicator
                            current_step={flow.current_step}
                            total_steps={flow.total_steps()}
                            progress={flow.progress_percent()}
                        />
                    }

                    { step_view }

                    if flow.current() != Step::RequestType {
                        <div class="form-nav">
                            <button
                                type="button"
                                class="btn-secondary"
                                disabled={flow.current_step == 0}
                                onclick={on_back}
                            >
                                { "Retour" }
                            </button>
                            if flow.is_last_step() {
                                <button
                                    type="button"
                                    class="btn-primary"
                                    disabled={*is_sending}
                                    onclick={on_submit}
                                >
                                    { submit_label }
                                </button>
                            } else {
                                <button type="button" class="btn-primary" onclick={on_next}>
                                    { "Suivant" }
                                </button>
                            }
                        </div>
                    }
                }
            </div>

            if let Some(message) = (*toast).as_ref() {
                <div class="toast">
                    <span>{ message }</span>
                    <button type="button" onclick={dismiss_toast}>{ "✕" }</button>
                </div>
            }
        </div>
    }
}
