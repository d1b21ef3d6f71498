use outpost_core::{DraftField, MessageDraft, ValidationError};

fn filled() -> MessageDraft {
    MessageDraft {
        name: "A".into(),
        email: "a@x.com".into(),
        subject: "S".into(),
        message: "M".into(),
    }
}

#[test]
fn complete_draft_is_valid() {
    assert_eq!(filled().validate(), Ok(()));
}

#[test]
fn empty_draft_reports_every_field() {
    let errors = MessageDraft::default().validate().unwrap_err();
    let fields: Vec<DraftField> = errors.iter().map(|e| e.field()).collect();
    assert_eq!(fields, DraftField::ALL.to_vec());
}

#[test]
fn whitespace_only_counts_as_missing() {
    let mut draft = filled();
    draft.set(DraftField::Subject, "   ");

    assert_eq!(
        draft.validate(),
        Err(vec![ValidationError::Missing {
            field: DraftField::Subject
        }])
    );
}

#[test]
fn email_without_at_sign_is_malformed() {
    let mut draft = filled();
    draft.set(DraftField::Email, "nobody.example.com");

    assert_eq!(draft.validate(), Err(vec![ValidationError::MalformedEmail]));
}

#[test]
fn validation_messages_name_the_field() {
    let err = ValidationError::Missing {
        field: DraftField::Name,
    };
    assert_eq!(err.to_string(), "name is required");
}
