use yew::prelude::*;

use crate::contact::types::RequestType;

#[derive(Properties, PartialEq)]
pub struct RequestTypeStepProps {
    pub selected: Option<RequestType>,
    pub on_select: Callback<RequestType>,
}

#[function_component(RequestTypeStep)]
pub fn request_type_step(props: &RequestTypeStepProps) -> Html {
    let card = |request_type: RequestType, description: &'static str| {
        let on_select = props.on_select.clone();
        let onclick = Callback::from(move |_: MouseEvent| on_select.emit(request_type));
        let class = if props.selected == Some(request_type) {
            "request-type-card selected"
        } else {
            "request-type-card"
        };
        html! {
            <button type="button" {class} {onclick}>
                <span class="request-type-title">{ request_type.label() }</span>
                <span class="request-type-description">{ description }</span>
            </button>
        }
    };

    html! {
        <div class="step-content">
            <div class="step-heading">
                <h2>{ "Quel est l'objet de votre demande ?" }</h2>
                <p>{ "Sélectionnez le type de demande pour personnaliser le formulaire" }</p>
            </div>
            <div class="request-type-cards">
                { card(RequestType::Information, "Questions générales, support, etc.") }
                { card(RequestType::Quote, "Projet et commande de site web") }
            </div>
        </div>
    }
}
