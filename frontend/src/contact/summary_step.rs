use yew::prelude::*;

use crate::contact::types::FormRecord;

#[derive(Properties, PartialEq)]
pub struct SummaryStepProps {
    pub record: FormRecord,
}

fn recap_line(label: &'static str, value: &str) -> Html {
    if value.is_empty() {
        return html! {};
    }
    html! {
        <p><strong>{ label }{ " : " }</strong>{ value }</p>
    }
}

#[function_component(SummaryStep)]
pub fn summary_step(props: &SummaryStepProps) -> Html {
    let record = &props.record;

    let chosen_sections: Vec<&'static str> = [
        (record.sections.about, "À propos"),
        (record.sections.services, "Services"),
        (record.sections.portfolio, "Portfolio"),
        (record.sections.practical_info, "Informations pratiques"),
        (record.sections.contact_form, "Formulaire de contact"),
    ]
    .into_iter()
    .filter_map(|(checked, label)| checked.then_some(label))
    .collect();

    html! {
        <div class="step-content">
            <div class="step-heading">
                <h2>{ "Récapitulatif de votre commande" }</h2>
                <p>{ "Vérifiez vos informations avant de finaliser votre commande" }</p>
            </div>

            <div class="summary-block">
                <h3>{ "Informations de contact" }</h3>
                <p>{ format!("{} {}", record.first_name, record.last_name) }</p>
                <p>{ &record.email }</p>
                <p>{ &record.phone }</p>
                { recap_line("Entreprise", &record.company) }
            </div>

            <div class="summary-block">
                <h3>{ "Votre projet" }</h3>
                { recap_line("Nom de l'entreprise", &record.business_name) }
                { recap_line("Activité", &record.activity) }
                { recap_line("Ville", &record.city) }
                { recap_line("Code postal", &record.postal_code) }
                { recap_line("Type de projet", &record.project_type) }
                { recap_line("Budget", &record.budget) }
                { recap_line("Délai souhaité", &record.timeline) }
                { recap_line("Projet urgent", if record.urgent_project { "Oui" } else { "" }) }
                { recap_line("Description", &record.description) }
            </div>

            if !chosen_sections.is_empty() {
                <div class="summary-block">
                    <h3>{ "Sections souhaitées" }</h3>
                    <ul>
                        { for chosen_sections.iter().map(|label| html! { <li>{ *label }</li> }) }
                    </ul>
                </div>
            }

            if !record.uploaded_files.is_empty() {
                <div class="summary-block">
                    <h3>{ "Documents joints" }</h3>
                    <ul>
                        { for record.uploaded_files.iter().map(|file| html! {
                            <li>{ &file.name }</li>
                        }) }
                    </ul>
                </div>
            }

            { recap_line("Informations supplémentaires", &record.additional_info) }
        </div>
    }
}
