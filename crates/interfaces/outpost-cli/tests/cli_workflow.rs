use camino::Utf8PathBuf;
use outpost_app_core::{FilePersistence, JsonContentRepo, SiteSettings};
use outpost_cli::commands::{self, ViewOutcome};
use outpost_cli::{session, PromptMode};
use outpost_core::{MessageDraft, SubmissionStatus};
use tempfile::TempDir;

fn demo_repo() -> JsonContentRepo {
    let root = Utf8PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../../demos/content");
    JsonContentRepo::new(root)
}

fn fast_settings() -> SiteSettings {
    SiteSettings {
        send_latency_ms: 20,
        success_hold_ms: 40,
        ..SiteSettings::default()
    }
}

fn config() -> (TempDir, FilePersistence) {
    let dir = tempfile::tempdir().unwrap();
    let persistence = FilePersistence::with_root(dir.path());
    (dir, persistence)
}

#[test]
fn signed_out_view_redirects_or_declines() {
    let (_dir, persistence) = config();
    let repo = demo_repo();
    let settings = SiteSettings::default();

    let outcome =
        commands::cmd_projects_view(&repo, &persistence, &settings, "p1", PromptMode::Yes)
            .unwrap();
    assert!(matches!(outcome, ViewOutcome::RedirectedTo(ref r) if r == "/estimate/login"));

    let outcome =
        commands::cmd_projects_view(&repo, &persistence, &settings, "p1", PromptMode::No)
            .unwrap();
    assert!(matches!(outcome, ViewOutcome::Declined));
}

#[test]
fn signed_in_view_discloses_restricted_detail() {
    let (_dir, persistence) = config();
    session::handle_login(&persistence, "contractor".into()).unwrap();

    let outcome = commands::cmd_projects_view(
        &demo_repo(),
        &persistence,
        &SiteSettings::default(),
        "p1",
        PromptMode::No,
    )
    .unwrap();

    let ViewOutcome::Disclosed(detail) = outcome else {
        panic!("expected the detail panel");
    };
    assert_eq!(detail.header, "CONFIDENTIAL // P1");
    assert_eq!(detail.clearance_level.as_deref(), Some("LEVEL 4 (DEFENSE)"));
    assert_eq!(detail.specs.len(), 3);
    assert_eq!(detail.notice, outpost_config::WATERMARK_NOTICE);
}

#[test]
fn unknown_project_is_reported() {
    let (_dir, persistence) = config();
    let err = commands::cmd_projects_view(
        &demo_repo(),
        &persistence,
        &SiteSettings::default(),
        "p404",
        PromptMode::Yes,
    )
    .unwrap_err();

    assert!(err.to_string().contains("project 'p404' not found"));
}

#[test]
fn logout_revokes_access() {
    let (_dir, persistence) = config();
    session::handle_login(&persistence, "contractor".into()).unwrap();
    session::handle_logout(&persistence).unwrap();

    let outcome = commands::cmd_projects_view(
        &demo_repo(),
        &persistence,
        &SiteSettings::default(),
        "p2",
        PromptMode::No,
    )
    .unwrap();
    assert!(matches!(outcome, ViewOutcome::Declined));
}

#[test]
fn blank_role_is_rejected() {
    let (_dir, persistence) = config();
    assert!(session::handle_login(&persistence, "   ".into()).is_err());
    assert!(persistence.load_session().unwrap().user_role.is_none());
}

#[test]
fn listing_and_info_read_demo_content() {
    let repo = demo_repo();
    commands::cmd_projects_list(&repo).unwrap();
    commands::cmd_contact_info(&repo).unwrap();
}

#[tokio::test]
async fn send_runs_full_cycle_back_to_idle() {
    let draft = MessageDraft {
        name: "A".into(),
        email: "a@x.com".into(),
        subject: "S".into(),
        message: "M".into(),
    };

    let state = commands::cmd_contact_send(&demo_repo(), &fast_settings(), draft, true)
        .await
        .unwrap();

    assert_eq!(state.status, SubmissionStatus::Idle);
    assert!(state.draft.is_empty());
    assert!(state.failure.is_none());
}

#[tokio::test]
async fn send_without_wait_stops_at_confirmation() {
    let draft = MessageDraft {
        name: "A".into(),
        email: "a@x.com".into(),
        subject: "S".into(),
        message: "M".into(),
    };

    let state = commands::cmd_contact_send(&demo_repo(), &fast_settings(), draft, false)
        .await
        .unwrap();

    assert_eq!(state.status, SubmissionStatus::Success);
}

#[tokio::test]
async fn send_rejects_incomplete_draft() {
    let draft = MessageDraft {
        name: "A".into(),
        email: "nowhere".into(),
        ..MessageDraft::default()
    };

    let err = commands::cmd_contact_send(&demo_repo(), &fast_settings(), draft, true)
        .await
        .unwrap_err();

    let msg = err.to_string();
    assert!(msg.starts_with("Cannot transmit"));
    assert!(msg.contains("subject is required"));
    assert!(msg.contains("email must contain '@'"));
}
