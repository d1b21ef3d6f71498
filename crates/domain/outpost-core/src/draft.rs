use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DraftField {
    Name,
    Email,
    Subject,
    Message,
}

impl DraftField {
    pub const ALL: [DraftField; 4] = [
        DraftField::Name,
        DraftField::Email,
        DraftField::Subject,
        DraftField::Message,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DraftField::Name => "name",
            DraftField::Email => "email",
            DraftField::Subject => "subject",
            DraftField::Message => "message",
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown draft field '{0}' (expected name, email, subject or message)")]
pub struct ParseDraftFieldError(pub String);

impl FromStr for DraftField {
    type Err = ParseDraftFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DraftField::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseDraftFieldError(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    Missing { field: DraftField },
    #[error("email must contain '@'")]
    MalformedEmail,
}

impl ValidationError {
    pub fn field(&self) -> DraftField {
        match self {
            ValidationError::Missing { field } => *field,
            ValidationError::MalformedEmail => DraftField::Email,
        }
    }
}

/// The in-progress contact message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageDraft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl MessageDraft {
    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::Email => &self.email,
            DraftField::Subject => &self.subject,
            DraftField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        let slot = match field {
            DraftField::Name => &mut self.name,
            DraftField::Email => &mut self.email,
            DraftField::Subject => &mut self.subject,
            DraftField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    pub fn is_empty(&self) -> bool {
        DraftField::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    /// Collects every problem instead of stopping at the first one so the form
    /// can mark all offending fields at once.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors: Vec<ValidationError> = DraftField::ALL
            .into_iter()
            .filter(|f| self.get(*f).trim().is_empty())
            .map(|field| ValidationError::Missing { field })
            .collect();

        if !self.email.trim().is_empty() && !self.email.contains('@') {
            errors.push(ValidationError::MalformedEmail);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_names_parse_case_insensitively() {
        assert_eq!("Email".parse::<DraftField>(), Ok(DraftField::Email));
        assert_eq!(" message ".parse::<DraftField>(), Ok(DraftField::Message));
        assert!("body".parse::<DraftField>().is_err());
    }

    #[test]
    fn set_overwrites_only_the_named_field() {
        let mut draft = MessageDraft::default();
        draft.set(DraftField::Subject, "first");
        draft.set(DraftField::Subject, "second");

        assert_eq!(draft.subject, "second");
        assert!(draft.name.is_empty());
        assert!(draft.email.is_empty());
        assert!(draft.message.is_empty());
    }

    #[test]
    fn default_draft_is_empty() {
        assert!(MessageDraft::default().is_empty());
    }
}
