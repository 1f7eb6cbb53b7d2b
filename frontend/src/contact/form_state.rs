use std::collections::BTreeMap;

use crate::contact::types::{FileMeta, FormRecord, RequestType};

pub const MAX_FILES: usize = 3;
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;
pub const ALLOWED_FILE_TYPES: [&str; 6] = [
    "application/pdf",
    "image/jpeg",
    "image/png",
    "image/gif",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];
pub const MAX_CITY_SUGGESTIONS: usize = 5;

/// One view+validation pair of the flow. Which steps exist is decided
/// by the chosen request type alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    RequestType,
    ContactInfo,
    InformationRequest,
    QuoteRequest,
    ProjectDetails,
    Summary,
}

pub fn step_sequence(request_type: Option<RequestType>) -> &'static [Step] {
    match request_type {
        None => &[Step::RequestType],
        Some(RequestType::Information) => {
            &[Step::RequestType, Step::ContactInfo, Step::InformationRequest]
        }
        Some(RequestType::Quote) => &[
            Step::RequestType,
            Step::ContactInfo,
            Step::QuoteRequest,
            Step::ProjectDetails,
            Step::Summary,
        ],
    }
}

pub struct CityEntry {
    pub city: &'static str,
    pub postal_code: &'static str,
}

// Liste des villes françaises avec codes postaux (échantillon)
pub const FRENCH_CITIES: [CityEntry; 20] = [
    CityEntry { city: "Paris", postal_code: "75001" },
    CityEntry { city: "Lyon", postal_code: "69001" },
    CityEntry { city: "Marseille", postal_code: "13001" },
    CityEntry { city: "Toulouse", postal_code: "31000" },
    CityEntry { city: "Nice", postal_code: "06000" },
    CityEntry { city: "Nantes", postal_code: "44000" },
    CityEntry { city: "Strasbourg", postal_code: "67000" },
    CityEntry { city: "Montpellier", postal_code: "34000" },
    CityEntry { city: "Bordeaux", postal_code: "33000" },
    CityEntry { city: "Lille", postal_code: "59000" },
    CityEntry { city: "Rennes", postal_code: "35000" },
    CityEntry { city: "Reims", postal_code: "51100" },
    CityEntry { city: "Le Havre", postal_code: "76600" },
    CityEntry { city: "Saint-Étienne", postal_code: "42000" },
    CityEntry { city: "Toulon", postal_code: "83000" },
    CityEntry { city: "Grenoble", postal_code: "38000" },
    CityEntry { city: "Dijon", postal_code: "21000" },
    CityEntry { city: "Angers", postal_code: "49000" },
    CityEntry { city: "Nîmes", postal_code: "30000" },
    CityEntry { city: "Villeurbanne", postal_code: "69100" },
];

/// Case-insensitive lookup over the reference table, on the city name
/// or the postal code. At most [`MAX_CITY_SUGGESTIONS`] results;
/// queries under two characters yield nothing.
pub fn search_cities(query: &str) -> Vec<&'static CityEntry> {
    let q = query.trim().to_lowercase();
    if q.len() < 2 {
        return Vec::new();
    }
    FRENCH_CITIES
        .iter()
        .filter(|entry| {
            entry.city.to_lowercase().contains(&q) || entry.postal_code.contains(&q)
        })
        .take(MAX_CITY_SUGGESTIONS)
        .collect()
}

/// Standard email-shape check: one '@', non-empty local part, a dot
/// somewhere inside the domain, no whitespace.
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    if email.is_empty() || email.contains(char::is_whitespace) {
        return false;
    }
    let mut parts = email.splitn(2, '@');
    let (local, domain) = match (parts.next(), parts.next()) {
        (Some(local), Some(domain)) => (local, domain),
        _ => return false,
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

#[derive(Clone, Debug, PartialEq)]
pub struct FileRejection {
    pub name: String,
    pub message: String,
}

/// The step-flow state machine driving the contact/order form: one
/// mutable record, a step index into the category's sequence, and the
/// per-field validation errors of the current step.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormFlow {
    pub record: FormRecord,
    pub current_step: usize,
    pub errors: BTreeMap<&'static str, String>,
    pub submitted: bool,
}

impl FormFlow {
    pub fn steps(&self) -> &'static [Step] {
        step_sequence(self.record.request_type)
    }

    pub fn total_steps(&self) -> usize {
        self.steps().len()
    }

    pub fn current(&self) -> Step {
        self.steps()[self.current_step]
    }

    pub fn is_last_step(&self) -> bool {
        self.current_step + 1 == self.total_steps()
    }

    pub fn progress_percent(&self) -> u32 {
        let total = self.total_steps();
        if total <= 1 {
            return 0;
        }
        (self.current_step * 100 / (total - 1)) as u32
    }

    /// Captures the category. Choosing one at step 0 is itself the
    /// transition to the contact step; choosing a different category
    /// later resets the whole record first (the category is immutable
    /// within one flow instance).
    pub fn select_request_type(&mut self, request_type: RequestType) {
        if self.submitted {
            return;
        }
        match self.record.request_type {
            Some(current) if current != request_type => {
                *self = FormFlow::default();
            }
            _ => {}
        }
        self.record.request_type = Some(request_type);
        self.errors.remove("requestType");
        if self.current_step == 0 {
            self.current_step = 1;
        }
    }

    /// Required-field rules of the current step only; no cross-step
    /// re-validation.
    pub fn validate_current_step(&self) -> BTreeMap<&'static str, String> {
        let mut errors = BTreeMap::new();
        let record = &self.record;
        let is_quote = record.request_type == Some(RequestType::Quote);

        match self.current() {
            Step::RequestType => {
                if record.request_type.is_none() {
                    errors.insert(
                        "requestType",
                        "Veuillez sélectionner le type de demande".to_string(),
                    );
                }
            }
            Step::ContactInfo => {
                if record.first_name.trim().is_empty() {
                    errors.insert("firstName", "Le prénom est obligatoire".to_string());
                }
                if record.last_name.trim().is_empty() {
                    errors.insert("lastName", "Le nom est obligatoire".to_string());
                }
                if record.email.trim().is_empty() {
                    errors.insert("email", "L'email est obligatoire".to_string());
                } else if !is_valid_email(&record.email) {
                    errors.insert(
                        "email",
                        "Veuillez saisir une adresse email valide".to_string(),
                    );
                }
                if is_quote {
                    if record.phone.trim().is_empty() {
                        errors.insert("phone", "Le téléphone est obligatoire".to_string());
                    }
                    if record.company.trim().is_empty() {
                        errors.insert(
                            "company",
                            "Le nom de l'entreprise est obligatoire".to_string(),
                        );
                    }
                }
            }
            Step::InformationRequest => {
                if record.subject.trim().is_empty() {
                    errors.insert("subject", "Le sujet est obligatoire".to_string());
                }
                if record.message.trim().is_empty() {
                    errors.insert("message", "Le message est obligatoire".to_string());
                }
            }
            Step::QuoteRequest => {
                if record.project_type.trim().is_empty() {
                    errors.insert(
                        "projectType",
                        "Le type de projet est obligatoire".to_string(),
                    );
                }
                if record.budget.trim().is_empty() {
                    errors.insert("budget", "Le budget est obligatoire".to_string());
                }
                if record.timeline.trim().is_empty() {
                    errors.insert("timeline", "Le délai souhaité est obligatoire".to_string());
                }
            }
            Step::ProjectDetails => {
                if record.business_name.trim().is_empty() {
                    errors.insert(
                        "businessName",
                        "Le nom de l'entreprise est obligatoire".to_string(),
                    );
                }
                if record.activity.trim().is_empty() {
                    errors.insert("activity", "L'activité est obligatoire".to_string());
                }
                if record.city.trim().is_empty() {
                    errors.insert("city", "La ville est obligatoire".to_string());
                }
            }
            Step::Summary => {}
        }
        errors
    }

    /// Forward transition, gated on the current step's validation.
    pub fn advance(&mut self) -> bool {
        if self.submitted {
            return false;
        }
        let errors = self.validate_current_step();
        if !errors.is_empty() {
            self.errors = errors;
            return false;
        }
        if self.current_step + 1 < self.total_steps() {
            self.current_step += 1;
            self.errors.clear();
            true
        } else {
            false
        }
    }

    /// Backward transition; already-entered data is kept.
    pub fn back(&mut self) {
        if self.current_step > 0 {
            self.current_step -= 1;
            self.errors.clear();
        }
    }

    /// Drops one field's error as the user corrects that field. Errors
    /// are never cleared as a batch.
    pub fn clear_error(&mut self, field: &str) {
        self.errors.remove(field);
    }

    /// "Nouvelle demande": back to the all-empty defaults and step 0.
    pub fn reset(&mut self) {
        *self = FormFlow::default();
    }

    /// Terminal flag; after this only [`FormFlow::reset`] mutates.
    pub fn mark_submitted(&mut self) {
        self.submitted = true;
    }

    /// Filters an offered batch file by file: a bad entry is rejected
    /// with a reason while the valid ones around it are still added,
    /// truncating at [`MAX_FILES`].
    pub fn add_files(&mut self, files: Vec<FileMeta>) -> Vec<FileRejection> {
        let mut rejected = Vec::new();
        if self.submitted {
            return rejected;
        }
        for file in files {
            if !ALLOWED_FILE_TYPES.contains(&file.mime.as_str()) {
                rejected.push(FileRejection {
                    message: format!(
                        "Le fichier {} n'est pas d'un type autorisé.",
                        file.name
                    ),
                    name: file.name,
                });
                continue;
            }
            if file.size > MAX_FILE_SIZE {
                rejected.push(FileRejection {
                    message: format!(
                        "Le fichier {} est trop volumineux (max 10MB).",
                        file.name
                    ),
                    name: file.name,
                });
                continue;
            }
            if self.record.uploaded_files.len() >= MAX_FILES {
                rejected.push(FileRejection {
                    message: "Vous ne pouvez télécharger que 3 fichiers maximum."
                        .to_string(),
                    name: file.name,
                });
                continue;
            }
            self.record.uploaded_files.push(file);
        }
        rejected
    }

    pub fn remove_file(&mut self, index: usize) {
        if index < self.record.uploaded_files.len() {
            self.record.uploaded_files.remove(index);
        }
    }

    /// Fills city and postal code atomically from a suggestion.
    pub fn select_city(&mut self, entry: &CityEntry) {
        self.record.city = entry.city.to_string();
        self.record.postal_code = entry.postal_code.to_string();
        self.errors.remove("city");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pdf(name: &str, size: u64) -> FileMeta {
        FileMeta {
            name: name.to_string(),
            size,
            mime: "application/pdf".to_string(),
        }
    }

    fn quote_flow_at_contact() -> FormFlow {
        let mut flow = FormFlow::default();
        flow.select_request_type(RequestType::Quote);
        flow
    }

    #[test]
    fn information_sequence_has_three_steps() {
        let steps = step_sequence(Some(RequestType::Information));
        assert_eq!(steps.len(), 3);
        assert_eq!(steps[2], Step::InformationRequest);
    }

    #[test]
    fn quote_sequence_has_five_steps() {
        let steps = step_sequence(Some(RequestType::Quote));
        assert_eq!(steps.len(), 5);
        assert_eq!(steps[3], Step::ProjectDetails);
        assert_eq!(steps[4], Step::Summary);
    }

    #[test]
    fn no_category_means_only_the_choice_step() {
        assert_eq!(step_sequence(None), &[Step::RequestType]);
    }

    #[test]
    fn selecting_a_category_advances_to_contact() {
        let mut flow = FormFlow::default();
        flow.select_request_type(RequestType::Information);
        assert_eq!(flow.current_step, 1);
        assert_eq!(flow.current(), Step::ContactInfo);
        assert_eq!(flow.total_steps(), 3);
    }

    #[test]
    fn switching_category_after_step_zero_resets_the_record() {
        let mut flow = quote_flow_at_contact();
        flow.record.first_name = "Marie".to_string();
        flow.advance(); // fails validation, but data stays

        flow.select_request_type(RequestType::Information);
        assert_eq!(flow.record.first_name, "");
        assert_eq!(flow.record.request_type, Some(RequestType::Information));
        assert_eq!(flow.current_step, 1);
    }

    #[test]
    fn reselecting_the_same_category_keeps_the_data() {
        let mut flow = quote_flow_at_contact();
        flow.record.first_name = "Marie".to_string();
        flow.back();
        flow.select_request_type(RequestType::Quote);
        assert_eq!(flow.record.first_name, "Marie");
        assert_eq!(flow.current_step, 1);
    }

    #[test]
    fn contact_step_blocks_on_malformed_email() {
        let mut flow = FormFlow::default();
        flow.select_request_type(RequestType::Information);
        flow.record.first_name = "Paul".to_string();
        flow.record.last_name = "Martin".to_string();
        flow.record.email = "not-an-email".to_string();

        assert!(!flow.advance());
        assert_eq!(flow.current_step, 1);
        assert!(flow.errors.contains_key("email"));

        flow.record.email = "a@b.co".to_string();
        assert!(flow.advance());
        assert_eq!(flow.current(), Step::InformationRequest);
    }

    #[test]
    fn contact_step_for_quote_also_requires_phone_and_company() {
        let mut flow = quote_flow_at_contact();
        flow.record.first_name = "Marie".to_string();
        flow.record.last_name = "Durand".to_string();
        flow.record.email = "marie@exemple.fr".to_string();

        let errors = flow.validate_current_step();
        assert_eq!(
            errors.keys().copied().collect::<Vec<_>>(),
            vec!["company", "phone"]
        );
    }

    #[test]
    fn information_detail_step_requires_exactly_subject_and_message() {
        let mut flow = FormFlow::default();
        flow.select_request_type(RequestType::Information);
        flow.current_step = 2;

        let errors = flow.validate_current_step();
        assert_eq!(
            errors.keys().copied().collect::<Vec<_>>(),
            vec!["message", "subject"]
        );
    }

    #[test]
    fn quote_detail_step_requires_project_type_budget_timeline() {
        let mut flow = quote_flow_at_contact();
        flow.current_step = 2;

        let errors = flow.validate_current_step();
        assert_eq!(
            errors.keys().copied().collect::<Vec<_>>(),
            vec!["budget", "projectType", "timeline"]
        );
    }

    #[test]
    fn project_details_step_requires_exactly_business_activity_city() {
        let mut flow = quote_flow_at_contact();
        flow.current_step = 3;

        let errors = flow.validate_current_step();
        assert_eq!(
            errors.keys().copied().collect::<Vec<_>>(),
            vec!["activity", "businessName", "city"]
        );
    }

    #[test]
    fn summary_step_requires_nothing_new() {
        let mut flow = quote_flow_at_contact();
        flow.current_step = 4;
        assert!(flow.validate_current_step().is_empty());
    }

    #[test]
    fn errors_are_cleared_per_field_not_as_a_batch() {
        let mut flow = FormFlow::default();
        flow.select_request_type(RequestType::Information);
        assert!(!flow.advance());
        assert!(flow.errors.len() >= 3);

        flow.clear_error("firstName");
        assert!(!flow.errors.contains_key("firstName"));
        assert!(flow.errors.contains_key("lastName"));
        assert!(flow.errors.contains_key("email"));
    }

    #[test]
    fn back_keeps_entered_data() {
        let mut flow = FormFlow::default();
        flow.select_request_type(RequestType::Information);
        flow.record.first_name = "Paul".to_string();
        flow.back();
        assert_eq!(flow.current_step, 0);
        assert_eq!(flow.record.first_name, "Paul");
    }

    #[test]
    fn reset_restores_the_default_flow() {
        let mut flow = quote_flow_at_contact();
        flow.record.first_name = "Marie".to_string();
        flow.record.sections.portfolio = true;
        flow.add_files(vec![pdf("plan.pdf", 1024)]);
        flow.mark_submitted();

        flow.reset();
        assert_eq!(flow, FormFlow::default());
        assert_eq!(flow.current_step, 0);
    }

    #[test]
    fn submitted_flow_ignores_further_mutation() {
        let mut flow = quote_flow_at_contact();
        flow.mark_submitted();

        assert!(!flow.advance());
        flow.select_request_type(RequestType::Information);
        assert_eq!(flow.record.request_type, Some(RequestType::Quote));
        assert!(flow.add_files(vec![pdf("plan.pdf", 10)]).is_empty());
        assert!(flow.record.uploaded_files.is_empty());
    }

    #[test]
    fn email_shape_check() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("marie.durand@exemple.fr"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a @b.co"));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email("a@.co."));
    }

    #[test]
    fn file_cap_is_three_even_for_a_bigger_batch() {
        let mut flow = quote_flow_at_contact();
        let batch: Vec<_> = (0..5).map(|i| pdf(&format!("f{i}.pdf"), 100)).collect();
        let rejected = flow.add_files(batch);

        assert_eq!(flow.record.uploaded_files.len(), 3);
        assert_eq!(rejected.len(), 2);
        assert!(rejected[0].message.contains("3 fichiers maximum"));
    }

    #[test]
    fn invalid_files_are_rejected_while_valid_siblings_are_added() {
        let mut flow = quote_flow_at_contact();
        let rejected = flow.add_files(vec![
            FileMeta {
                name: "virus.exe".to_string(),
                size: 100,
                mime: "application/octet-stream".to_string(),
            },
            pdf("trop-gros.pdf", MAX_FILE_SIZE + 1),
            pdf("ok.pdf", MAX_FILE_SIZE),
        ]);

        assert_eq!(flow.record.uploaded_files.len(), 1);
        assert_eq!(flow.record.uploaded_files[0].name, "ok.pdf");
        assert_eq!(rejected.len(), 2);
        assert!(rejected[0].message.contains("type autorisé"));
        assert!(rejected[1].message.contains("trop volumineux"));
    }

    #[test]
    fn remove_file_drops_the_right_entry() {
        let mut flow = quote_flow_at_contact();
        flow.add_files(vec![pdf("a.pdf", 1), pdf("b.pdf", 2)]);
        flow.remove_file(0);
        assert_eq!(flow.record.uploaded_files.len(), 1);
        assert_eq!(flow.record.uploaded_files[0].name, "b.pdf");
        flow.remove_file(5); // out of range is a no-op
        assert_eq!(flow.record.uploaded_files.len(), 1);
    }

    #[test]
    fn city_lookup_matches_name_and_postal_fragments() {
        let by_name = search_cities("lyo");
        assert!(by_name.iter().any(|e| e.city == "Lyon"));
        let by_code = search_cities("6900");
        assert!(by_code.iter().any(|e| e.city == "Lyon"));
        assert!(search_cities("zzz").is_empty());
        assert!(search_cities("l").is_empty());
    }

    #[test]
    fn city_lookup_caps_suggestions_at_five() {
        // "00" appears in most postal codes of the table.
        assert_eq!(search_cities("00").len(), MAX_CITY_SUGGESTIONS);
    }

    #[test]
    fn selecting_a_city_fills_both_fields() {
        let mut flow = quote_flow_at_contact();
        let entry = search_cities("lyo")[0];
        flow.select_city(entry);
        assert_eq!(flow.record.city, "Lyon");
        assert_eq!(flow.record.postal_code, "69001");
    }

    #[test]
    fn progress_runs_from_zero_to_full() {
        let mut flow = quote_flow_at_contact();
        assert_eq!(flow.progress_percent(), 25);
        flow.current_step = 4;
        assert_eq!(flow.progress_percent(), 100);
        flow.reset();
        assert_eq!(flow.progress_percent(), 0);
    }
}
