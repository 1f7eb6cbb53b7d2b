use serde::Deserialize;

/// The finished form record as posted by the frontend. Every field is
/// defaulted so a partial body still deserializes; the handler decides
/// which fields are actually required.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EmailRequest {
    pub request_type: String,
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
    pub uploaded_files: Vec<AttachmentMeta>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Sections {
    pub about: bool,
    pub services: bool,
    pub portfolio: bool,
    pub practical_info: bool,
    pub contact_form: bool,
}

/// Attachment metadata only; file contents are never sent to this endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AttachmentMeta {
    pub name: String,
    pub size: u64,
    pub mime: String,
}
