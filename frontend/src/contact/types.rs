use serde::{Deserialize, Serialize};

/// The information/quote discriminator. It decides which steps exist
/// and which fields are required.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestType {
    Information,
    Quote,
}

impl RequestType {
    pub fn label(&self) -> &'static str {
        match self {
            RequestType::Information => "Demande d'information",
            RequestType::Quote => "Commande",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Sections {
    pub about: bool,
    pub services: bool,
    pub portfolio: bool,
    pub practical_info: bool,
    pub contact_form: bool,
}

/// Metadata view of an attached file. The browser file handle stays in
/// the picker; only this metadata travels with the record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileMeta {
    pub name: String,
    pub size: u64,
    pub mime: String,
}

/// The single mutable record the whole flow operates on, flattened the
/// way the backend expects it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_type: Option<RequestType>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub subject: String,
    pub message: String,
    pub project_type: String,
    pub budget: String,
    pub timeline: String,
    pub description: String,
    pub urgent_project: bool,
    pub business_name: String,
    pub activity: String,
    pub city: String,
    pub postal_code: String,
    pub target_audience: String,
    pub current_website: String,
    pub sections: Sections,
    pub additional_info: String,
    pub uploaded_files: Vec<FileMeta>,
}
