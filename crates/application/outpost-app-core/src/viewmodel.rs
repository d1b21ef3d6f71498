use outpost_core::{
    CompanyDirectory, DraftField, ProjectCatalog, ProjectRecord, SpecLine, SubmissionStatus,
};

use crate::contact::ContactState;
use crate::disclosure::DisclosureGate;
use crate::ports::{AuthSessionProvider, Navigator};

pub fn submit_label(status: SubmissionStatus) -> &'static str {
    match status {
        SubmissionStatus::Idle => outpost_config::LABEL_IDLE,
        SubmissionStatus::Sending => outpost_config::LABEL_SENDING,
        SubmissionStatus::Success => outpost_config::LABEL_SUCCESS,
    }
}

#[derive(Debug, Clone)]
pub struct FieldVm {
    pub field: DraftField,
    pub value: String,
    pub error: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ContactFormVm {
    pub fields: Vec<FieldVm>,
    pub submit_label: &'static str,
    pub submit_enabled: bool,
    pub failure: Option<String>,
}

pub fn contact_form_vm(state: &ContactState) -> ContactFormVm {
    let fields = DraftField::ALL
        .into_iter()
        .map(|field| FieldVm {
            field,
            value: state.draft.get(field).to_string(),
            error: state
                .field_errors
                .iter()
                .find(|e| e.field() == field)
                .map(|e| e.to_string()),
        })
        .collect();

    ContactFormVm {
        fields,
        submit_label: submit_label(state.status),
        submit_enabled: state.status.accepts_submit(),
        failure: state.failure.clone(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactLineVm {
    pub label: &'static str,
    pub value: String,
}

pub fn company_contact_vm(company: &CompanyDirectory) -> Vec<ContactLineVm> {
    vec![
        ContactLineVm {
            label: "Corporate Office",
            value: company.address_office.clone(),
        },
        ContactLineVm {
            label: "Registered Address",
            value: company.address_reg.clone(),
        },
        ContactLineVm {
            label: "Secure Line",
            value: company.phone.clone(),
        },
        ContactLineVm {
            label: "Digital Protocol",
            value: format!("mailto:{}", company.email),
        },
    ]
}

#[derive(Debug, Clone)]
pub struct ProjectCardVm {
    pub id: String,
    pub title: String,
    pub location: String,
    pub description: String,
    pub status_tag: String,
    pub image_url: String,
}

impl From<&ProjectRecord> for ProjectCardVm {
    fn from(p: &ProjectRecord) -> Self {
        Self {
            id: p.id.clone(),
            title: p.title.clone(),
            location: p.location.clone(),
            description: p.description.clone(),
            status_tag: p.status.to_uppercase(),
            image_url: p.image_url.clone(),
        }
    }
}

pub fn project_cards(catalog: &ProjectCatalog) -> Vec<ProjectCardVm> {
    catalog.iter().map(ProjectCardVm::from).collect()
}

#[derive(Debug, Clone)]
pub struct ProjectDetailVm {
    pub header: String,
    pub title: String,
    pub budget_code: Option<String>,
    pub clearance_level: Option<String>,
    pub specs: Vec<SpecLine>,
    pub notice: &'static str,
    pub print_label: &'static str,
}

/// Restricted panel for the gate's current selection, if it resolves.
pub fn project_detail_vm<A, N>(
    gate: &DisclosureGate<A, N>,
    catalog: &ProjectCatalog,
) -> Option<ProjectDetailVm>
where
    A: AuthSessionProvider,
    N: Navigator,
{
    let project = gate.resolve_selection(catalog)?;
    let restricted = project.restricted.as_ref();

    Some(ProjectDetailVm {
        header: format!("CONFIDENTIAL // {}", project.id.to_uppercase()),
        title: project.title.clone(),
        budget_code: restricted.map(|r| r.budget_code.clone()),
        clearance_level: restricted.map(|r| r.clearance_level.clone()),
        specs: restricted.map(|r| r.specs.clone()).unwrap_or_default(),
        notice: outpost_config::WATERMARK_NOTICE,
        print_label: outpost_config::LABEL_PRINT,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::{reduce, ContactEvent};
    use outpost_core::ValidationError;

    #[test]
    fn labels_follow_status() {
        assert_eq!(submit_label(SubmissionStatus::Idle), "Transmit Message");
        assert_eq!(submit_label(SubmissionStatus::Sending), "Encrypting & Sending...");
        assert_eq!(submit_label(SubmissionStatus::Success), "Transmission Confirmed");
    }

    #[test]
    fn form_vm_disables_submit_while_sending() {
        let state = reduce(
            ContactState::default(),
            ContactEvent::SendStarted {
                run_id: uuid::Uuid::new_v4(),
            },
        );
        let vm = contact_form_vm(&state);
        assert!(!vm.submit_enabled);
        assert_eq!(vm.submit_label, outpost_config::LABEL_SENDING);
    }

    #[test]
    fn form_vm_attaches_errors_to_fields() {
        let state = reduce(
            ContactState::default(),
            ContactEvent::ValidationFailed(vec![ValidationError::MalformedEmail]),
        );
        let vm = contact_form_vm(&state);
        let email = vm.fields.iter().find(|f| f.field == DraftField::Email).unwrap();
        assert_eq!(email.error.as_deref(), Some("email must contain '@'"));
        assert!(vm
            .fields
            .iter()
            .filter(|f| f.field != DraftField::Email)
            .all(|f| f.error.is_none()));
    }

    #[test]
    fn company_lines_link_the_mailbox() {
        let company = CompanyDirectory {
            email: "hq@example.com".into(),
            phone: "+1 555 0100".into(),
            address_office: "1 Main St".into(),
            address_reg: "2 Side St".into(),
        };
        let lines = company_contact_vm(&company);
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[3].value, "mailto:hq@example.com");
    }
}
