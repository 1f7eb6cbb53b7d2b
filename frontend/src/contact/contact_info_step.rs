use yew::prelude::*;

use crate::contact::fields::{field_error, input_callback};
use crate::contact::form_state::FormFlow;
use crate::contact::types::RequestType;

#[derive(Properties, PartialEq)]
pub struct ContactInfoStepProps {
    pub flow: FormFlow,
    pub on_change: Callback<FormFlow>,
}

#[function_component(ContactInfoStep)]
pub fn contact_info_step(props: &ContactInfoStepProps) -> Html {
    let record = &props.flow.record;
    let is_quote = record.request_type == Some(RequestType::Quote);

    let on_first_name =
        input_callback(&props.flow, &props.on_change, "firstName", |r, v| r.first_name = v);
    let on_last_name =
        input_callback(&props.flow, &props.on_change, "lastName", |r, v| r.last_name = v);
    let on_email = input_callback(&props.flow, &props.on_change, "email", |r, v| r.email = v);
    let on_phone = input_callback(&props.flow, &props.on_change, "phone", |r, v| r.phone = v);
    let on_company =
        input_callback(&props.flow, &props.on_change, "company", |r, v| r.company = v);

    html! {
        <div class="step-content">
            <div class="step-heading">
                <h2>{ "Vos informations de contact" }</h2>
                <p>
                    { if is_quote {
                        "Ces informations nous permettront de vous recontacter pour votre devis"
                    } else {
                        "Ces informations nous permettront de vous répondre"
                    } }
                </p>
            </div>

            <div class="form-grid">
                <div class="form-field">
                    <label for="firstName">{ "Prénom *" }</label>
                    <input
                        id="firstName"
                        type="text"
                        value={record.first_name.clone()}
                        oninput={on_first_name}
                    />
                    { field_error(&props.flow, "firstName") }
                </div>
                <div class="form-field">
                    <label for="lastName">{ "Nom *" }</label>
                    <input
                        id="lastName"
                        type="text"
                        value={record.last_name.clone()}
                        oninput={on_last_name}
                    />
                    { field_error(&props.flow, "lastName") }
                </div>
            </div>

            <div class="form-grid">
                <div class="form-field">
                    <label for="email">{ "Email *" }</label>
                    <input
                        id="email"
                        type="email"
                        value={record.email.clone()}
                        oninput={on_email}
                    />
                    { field_error(&props.flow, "email") }
                </div>
                <div class="form-field">
                    <label for="phone">{ if is_quote { "Téléphone *" } else { "Téléphone" } }</label>
                    <input
                        id="phone"
                        type="tel"
                        placeholder="Votre numéro de téléphone"
                        value={record.phone.clone()}
                        oninput={on_phone}
                    />
                    { field_error(&props.flow, "phone") }
                </div>
            </div>

            if is_quote {
                <div class="form-field">
                    <label for="company">{ "Entreprise *" }</label>
                    <input
                        id="company"
                        type="text"
                        placeholder="Nom de votre entreprise"
                        value={record.company.clone()}
                        oninput={on_company}
                    />
                    { field_error(&props.flow, "company") }
                </div>
            }
        </div>
    }
}
