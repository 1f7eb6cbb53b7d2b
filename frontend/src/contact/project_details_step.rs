use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::contact::fields::{checkbox_callback, field_error, input_callback, select_callback, textarea_callback};
use crate::contact::form_state::{search_cities, FormFlow, FRENCH_CITIES, MAX_FILES};
use crate::contact::types::{FileMeta, FormRecord};

const ARTISAN_ACTIVITIES: [&str; 14] = [
    "Plombier",
    "Électricien",
    "Maçon",
    "Menuisier",
    "Peintre",
    "Carreleur",
    "Couvreur",
    "Chauffagiste",
    "Serrurier",
    "Vitrier",
    "Jardinier-Paysagiste",
    "Architecte",
    "Décorateur d'intérieur",
    "Autre",
];

const SECTION_LABELS: [(&str, fn(&mut FormRecord, bool), fn(&FormRecord) -> bool); 5] = [
    ("À propos", |r, v| r.sections.about = v, |r| r.sections.about),
    ("Services", |r, v| r.sections.services = v, |r| r.sections.services),
    ("Portfolio", |r, v| r.sections.portfolio = v, |r| r.sections.portfolio),
    ("Informations pratiques", |r, v| r.sections.practical_info = v, |r| {
        r.sections.practical_info
    }),
    ("Formulaire de contact", |r, v| r.sections.contact_form = v, |r| {
        r.sections.contact_form
    }),
];

fn format_size(size: u64) -> String {
    if size >= 1024 * 1024 {
        format!("{:.1} Mo", size as f64 / (1024.0 * 1024.0))
    } else {
        format!("{:.0} Ko", size as f64 / 1024.0)
    }
}

#[derive(Properties, PartialEq)]
pub struct ProjectDetailsStepProps {
    pub flow: FormFlow,
    pub on_change: Callback<FormFlow>,
}

#[function_component(ProjectDetailsStep)]
pub fn project_details_step(props: &ProjectDetailsStepProps) -> Html {
    let record = &props.flow.record;
    let suggestions = use_state(Vec::<(String, String)>::new);
    let file_errors = use_state(Vec::<String>::new);

    let on_business_name = input_callback(&props.flow, &props.on_change, "businessName", |r, v| {
        r.business_name = v
    });
    let on_activity =
        select_callback(&props.flow, &props.on_change, "activity", |r, v| r.activity = v);
    let on_postal_code = input_callback(&props.flow, &props.on_change, "postalCode", |r, v| {
        r.postal_code = v
    });
    let on_target_audience =
        input_callback(&props.flow, &props.on_change, "targetAudience", |r, v| {
            r.target_audience = v
        });
    let on_current_website =
        input_callback(&props.flow, &props.on_change, "currentWebsite", |r, v| {
            r.current_website = v
        });
    let on_additional_info =
        textarea_callback(&props.flow, &props.on_change, "additionalInfo", |r, v| {
            r.additional_info = v
        });

    // City field drives the autocomplete from the reference table.
    let on_city = {
        let flow = props.flow.clone();
        let on_change = props.on_change.clone();
        let suggestions = suggestions.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            let matches: Vec<(String, String)> = search_cities(&value)
                .into_iter()
                .map(|entry| (entry.city.to_string(), entry.postal_code.to_string()))
                .collect();
            suggestions.set(matches);
            let mut flow = flow.clone();
            flow.record.city = value;
            flow.clear_error("city");
            on_change.emit(flow);
        })
    };

    let on_files = {
        let flow = props.flow.clone();
        let on_change = props.on_change.clone();
        let file_errors = file_errors.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut offered = Vec::new();
            if let Some(list) = input.files() {
                for index in 0..list.length() {
                    if let Some(file) = list.item(index) {
                        offered.push(FileMeta {
                            name: file.name(),
                            size: file.size() as u64,
                            mime: file.type_(),
                        });
                    }
                }
            }
            input.set_value("");
            let mut flow = flow.clone();
            let rejected = flow.add_files(offered);
            file_errors.set(rejected.into_iter().map(|r| r.message).collect());
            on_change.emit(flow);
        })
    };

    html! {
        <div class="step-content">
            <div class="step-heading">
                <h2>{ "Informations détaillées sur votre projet" }</h2>
                <p>{ "Aidez-nous à mieux comprendre vos besoins spécifiques" }</p>
            </div>

            <div class="form-grid">
                <div class="form-field">
                    <label for="businessName">{ "Nom de l'entreprise *" }</label>
                    <input
                        id="businessName"
                        type="text"
                        value={record.business_name.clone()}
                        oninput={on_business_name}
                    />
                    { field_error(&props.flow, "businessName") }
                </div>
                <div class="form-field">
                    <label for="activity">{ "Activité *" }</label>
                    <select id="activity" onchange={on_activity}>
                        <option value="" disabled=true selected={record.activity.is_empty()}>
                            { "Sélectionnez votre métier" }
                        </option>
                        { for ARTISAN_ACTIVITIES.iter().map(|activity| html! {
                            <option value={*activity} selected={record.activity == *activity}>
                                { *activity }
                            </option>
                        }) }
                    </select>
                    { field_error(&props.flow, "activity") }
                </div>
            </div>

            <div class="form-grid">
                <div class="form-field city-field">
                    <label for="city">{ "Ville *" }</label>
                    <input
                        id="city"
                        type="text"
                        autocomplete="off"
                        placeholder="Commencez à taper votre ville..."
                        value={record.city.clone()}
                        oninput={on_city}
                    />
                    if !suggestions.is_empty() {
                        <ul class="city-suggestions">
                            { for suggestions.iter().map(|(city, postal_code)| {
                                let flow = props.flow.clone();
                                let on_change = props.on_change.clone();
                                let suggestions = suggestions.clone();
                                let postal_code = postal_code.clone();
                                let label = format!("{} ({})", city, postal_code);
                                let onclick = Callback::from(move |_: MouseEvent| {
                                    let mut flow = flow.clone();
                                    if let Some(entry) = FRENCH_CITIES
                                        .iter()
                                        .find(|e| e.postal_code == postal_code)
                                    {
                                        flow.select_city(entry);
                                    }
                                    suggestions.set(Vec::new());
                                    on_change.emit(flow);
                                });
                                html! { <li class="city-suggestion" {onclick}>{ label }</li> }
                            }) }
                        </ul>
                    }
                    { field_error(&props.flow, "city") }
                </div>
                <div class="form-field">
                    <label for="postalCode">{ "Code postal" }</label>
                    <input
                        id="postalCode"
                        type="text"
                        value={record.postal_code.clone()}
                        oninput={on_postal_code}
                    />
                </div>
            </div>

            <div class="form-grid">
                <div class="form-field">
                    <label for="targetAudience">{ "Votre clientèle cible" }</label>
                    <input
                        id="targetAudience"
                        type="text"
                        placeholder="Particuliers, professionnels..."
                        value={record.target_audience.clone()}
                        oninput={on_target_audience}
                    />
                </div>
                <div class="form-field">
                    <label for="currentWebsite">{ "Site web actuel" }</label>
                    <input
                        id="currentWebsite"
                        type="url"
                        placeholder="https://..."
                        value={record.current_website.clone()}
                        oninput={on_current_website}
                    />
                </div>
            </div>

            <div class="form-field">
                <span class="group-label">{ "Sections souhaitées sur votre site" }</span>
                <div class="sections-grid">
                    { for SECTION_LABELS.iter().map(|(label, set, get)| {
                        let onchange = checkbox_callback(&props.flow, &props.on_change, *set);
                        html! {
                            <label class="checkbox-row">
                                <input
                                    type="checkbox"
                                    checked={get(record)}
                                    {onchange}
                                />
                                { *label }
                            </label>
                        }
                    }) }
                </div>
            </div>

            <div class="form-field">
                <label for="additionalInfo">{ "Informations supplémentaires" }</label>
                <textarea
                    id="additionalInfo"
                    rows="3"
                    placeholder="Ajoutez des détails supplémentaires si nécessaire..."
                    value={record.additional_info.clone()}
                    oninput={on_additional_info}
                />
            </div>

            <div class="form-field">
                <span class="group-label">
                    { format!("Documents (logo, photos, contenus) — {} fichiers max, 10 Mo chacun", MAX_FILES) }
                </span>
                <input
                    type="file"
                    multiple=true
                    accept=".pdf,.jpg,.jpeg,.png,.gif,.doc,.docx"
                    onchange={on_files}
                />
                { for file_errors.iter().map(|message| html! {
                    <p class="field-error">{ message }</p>
                }) }
                if !record.uploaded_files.is_empty() {
                    <ul class="file-list">
                        { for record.uploaded_files.iter().enumerate().map(|(index, file)| {
                            let flow = props.flow.clone();
                            let on_change = props.on_change.clone();
                            let onclick = Callback::from(move |_: MouseEvent| {
                                let mut flow = flow.clone();
                                flow.remove_file(index);
                                on_change.emit(flow);
                            });
                            html! {
                                <li class="file-item">
                                    <span>{ format!("{} ({})", file.name, format_size(file.size)) }</span>
                                    <button type="button" class="file-remove" {onclick}>{ "✕" }</button>
                                </li>
                            }
                        }) }
                    </ul>
                }
            </div>
        </div>
    }
}
