use yew::prelude::*;

use crate::contact::types::{FormRecord, RequestType};

#[derive(Properties, PartialEq)]
pub struct ConfirmationStepProps {
    pub record: FormRecord,
    pub on_new_request: Callback<()>,
}

#[function_component(ConfirmationStep)]
pub fn confirmation_step(props: &ConfirmationStepProps) -> Html {
    let record = &props.record;
    let is_order = record.request_type == Some(RequestType::Quote);
    let on_new_request = {
        let on_new_request = props.on_new_request.clone();
        Callback::from(move |_: MouseEvent| on_new_request.emit(()))
    };

    html! {
        <div class="step-content confirmation">
            <div class="confirmation-icon">{ "✓" }</div>
            <h2>{ if is_order { "Commande confirmée !" } else { "Message envoyé !" } }</h2>

            <div class="summary-block">
                <p>{ "Merci " }<strong>{ format!("{} {}", record.first_name, record.last_name) }</strong>{ " !" }</p>
                <p>
                    { if is_order {
                        "Votre commande de site web a été envoyée avec succès."
                    } else {
                        "Votre demande d'information a été envoyée avec succès."
                    } }
                </p>
                <p>{ "Nous avons envoyé une confirmation à " }<strong>{ &record.email }</strong></p>
            </div>

            <div class="summary-block">
                <h3>{ "Prochaines étapes" }</h3>
                { if is_order {
                    html! {
                        <ol>
                            <li>{ "Notre équipe analyse votre projet (24-48h)" }</li>
                            <li>{ "Nous vous contactons pour finaliser les détails" }</li>
                            <li>{ "Création de votre site en 5 jours ouvrés" }</li>
                        </ol>
                    }
                } else {
                    html! {
                        <>
                            <p>{ "Nous traitons votre demande et vous répondrons sous 24h" }</p>
                            <p>{ "Vérifiez votre boîte email (et vos spams) pour notre réponse" }</p>
                        </>
                    }
                } }
            </div>

            <p class="confirmation-contact">
                { "Une question ? Contactez-nous : contact@lapetitevitrine.com" }
            </p>

            <button type="button" class="btn-primary" onclick={on_new_request}>
                { if is_order { "Nouvelle commande" } else { "Nouvelle demande" } }
            </button>
        </div>
    }
}
