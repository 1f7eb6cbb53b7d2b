use yew::prelude::*;

use crate::contact::fields::{
    checkbox_callback, field_error, select_callback, textarea_callback,
};
use crate::contact::form_state::FormFlow;

const PROJECT_TYPES: [(&str, &str); 6] = [
    ("site-vitrine", "Site vitrine"),
    ("boutique-en-ligne", "Boutique en ligne"),
    ("application-web", "Application web"),
    ("redesign", "Refonte de site"),
    ("maintenance", "Maintenance"),
    ("autre", "Autre"),
];

const BUDGETS: [(&str, &str); 6] = [
    ("moins-1000", "Moins de 1 000€"),
    ("1000-3000", "1 000€ - 3 000€"),
    ("3000-5000", "3 000€ - 5 000€"),
    ("5000-10000", "5 000€ - 10 000€"),
    ("plus-10000", "Plus de 10 000€"),
    ("a-discuter", "À discuter"),
];

const TIMELINES: [(&str, &str); 6] = [
    ("urgent", "Urgent (moins d'1 mois)"),
    ("1-2-mois", "1-2 mois"),
    ("2-3-mois", "2-3 mois"),
    ("3-6-mois", "3-6 mois"),
    ("plus-6-mois", "Plus de 6 mois"),
    ("flexible", "Flexible"),
];

#[derive(Properties, PartialEq)]
pub struct QuoteRequestStepProps {
    pub flow: FormFlow,
    pub on_change: Callback<FormFlow>,
}

fn select_field(
    props: &QuoteRequestStepProps,
    id: &'static str,
    label: &'static str,
    placeholder: &'static str,
    options: &[(&'static str, &'static str)],
    current: &str,
    set: fn(&mut crate::contact::types::FormRecord, String),
) -> Html {
    let onchange = select_callback(&props.flow, &props.on_change, id, set);
    html! {
        <div class="form-field">
            <label for={id}>{ label }</label>
            <select {id} {onchange}>
                <option value="" disabled=true selected={current.is_empty()}>{ placeholder }</option>
                { for options.iter().map(|(value, label)| html! {
                    <option value={*value} selected={current == *value}>{ *label }</option>
                }) }
            </select>
            { field_error(&props.flow, id) }
        </div>
    }
}

#[function_component(QuoteRequestStep)]
pub fn quote_request_step(props: &QuoteRequestStepProps) -> Html {
    let record = &props.flow.record;
    let on_description = textarea_callback(&props.flow, &props.on_change, "description", |r, v| {
        r.description = v
    });
    let on_urgent = checkbox_callback(&props.flow, &props.on_change, |r, v| r.urgent_project = v);

    html! {
        <div class="step-content">
            <div class="step-heading">
                <h2>{ "Demande de devis" }</h2>
                <p>{ "Décrivez-nous votre projet pour que nous puissions vous proposer un devis personnalisé" }</p>
            </div>

            { select_field(props, "projectType", "Type de projet *",
                "Sélectionnez le type de projet", &PROJECT_TYPES,
                &record.project_type, |r, v| r.project_type = v) }
            { select_field(props, "budget", "Budget estimé *",
                "Sélectionnez votre budget", &BUDGETS,
                &record.budget, |r, v| r.budget = v) }
            { select_field(props, "timeline", "Délai souhaité *",
                "Sélectionnez le délai", &TIMELINES,
                &record.timeline, |r, v| r.timeline = v) }

            <div class="form-field">
                <label for="description">{ "Description du projet" }</label>
                <textarea
                    id="description"
                    rows="5"
                    placeholder="Décrivez votre projet en détail..."
                    value={record.description.clone()}
                    oninput={on_description}
                />
            </div>

            <label class="checkbox-row">
                <input
                    type="checkbox"
                    checked={record.urgent_project}
                    onchange={on_urgent}
                />
                { "Projet urgent" }
            </label>
        </div>
    }
}
