use serde::{Deserialize, Serialize};

pub mod catalog;
pub mod draft;

pub use catalog::{NotFoundError, ProjectCatalog};
pub use draft::{DraftField, MessageDraft, ParseDraftFieldError, ValidationError};

pub type ProjectId = String;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sending,
    Success,
}

impl SubmissionStatus {
    /// A new submit is only accepted from `Idle`.
    pub fn accepts_submit(self) -> bool {
        matches!(self, SubmissionStatus::Idle)
    }
}

/// Company coordinates shown next to the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyDirectory {
    pub email: String,
    pub phone: String,
    pub address_office: String,
    pub address_reg: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub id: ProjectId,
    pub title: String,
    pub location: String,
    pub description: String,
    pub image_url: String,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restricted: Option<RestrictedDetail>,
}

/// Content only disclosed to authenticated sessions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestrictedDetail {
    pub budget_code: String,
    pub clearance_level: String,
    #[serde(default)]
    pub specs: Vec<SpecLine>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecLine {
    pub label: String,
    pub value: String,
}
