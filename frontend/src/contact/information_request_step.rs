use yew::prelude::*;

use crate::contact::fields::{field_error, select_callback, textarea_callback};
use crate::contact::form_state::FormFlow;

const SUBJECTS: [(&str, &str); 6] = [
    ("informations-services", "Informations sur nos services"),
    ("tarifs", "Questions sur les tarifs"),
    ("support", "Support technique"),
    ("partenariat", "Opportunités de partenariat"),
    ("conseils", "Demande de conseils"),
    ("autre", "Autre"),
];

#[derive(Properties, PartialEq)]
pub struct InformationRequestStepProps {
    pub flow: FormFlow,
    pub on_change: Callback<FormFlow>,
}

#[function_component(InformationRequestStep)]
pub fn information_request_step(props: &InformationRequestStepProps) -> Html {
    let record = &props.flow.record;
    let on_subject =
        select_callback(&props.flow, &props.on_change, "subject", |r, v| r.subject = v);
    let on_message =
        textarea_callback(&props.flow, &props.on_change, "message", |r, v| r.message = v);

    html! {
        <div class="step-content">
            <div class="step-heading">
                <h2>{ "Votre demande d'information" }</h2>
                <p>{ "Décrivez votre demande et nous vous répondrons rapidement" }</p>
            </div>

            <div class="form-field">
                <label for="subject">{ "Sujet de votre demande *" }</label>
                <select id="subject" onchange={on_subject}>
                    <option value="" disabled=true selected={record.subject.is_empty()}>
                        { "Sélectionnez un sujet" }
                    </option>
                    { for SUBJECTS.iter().map(|(value, label)| html! {
                        <option value={*value} selected={record.subject == *value}>{ *label }</option>
                    }) }
                </select>
                { field_error(&props.flow, "subject") }
            </div>

            <div class="form-field">
                <label for="message">{ "Votre message *" }</label>
                <textarea
                    id="message"
                    rows="6"
                    placeholder="Décrivez votre demande en détail..."
                    value={record.message.clone()}
                    oninput={on_message}
                />
                { field_error(&props.flow, "message") }
            </div>
        </div>
    }
}
