use crate::PromptMode;
use anyhow::{anyhow, Result};
use indicatif::{ProgressBar, ProgressStyle};
use outpost_app_core::{
    company_contact_vm, project_cards, project_detail_vm, submit_label, AccessDecision,
    ContactState, ContentRepo, DisclosureGate, FilePersistence, ProjectDetailVm, PromptResponse,
    RecordingNavigator, SessionStoreAuth, SimulatedTransport, SiteSettings, SubmissionController,
};
use outpost_core::{DraftField, MessageDraft, SubmissionStatus};
use std::time::Duration;

pub fn cmd_contact_info(repo: &impl ContentRepo) -> Result<()> {
    let company = repo.company()?;

    println!(":: Headquarters Coordinates");
    for line in company_contact_vm(&company) {
        println!("   {:<20} {}", line.label, line.value);
    }
    Ok(())
}

/// Runs one compose-submit cycle through the simulated transport. With `wait`
/// the call returns after the form is back to idle, otherwise once the
/// transmission is confirmed.
pub async fn cmd_contact_send(
    repo: &impl ContentRepo,
    settings: &SiteSettings,
    draft: MessageDraft,
    wait: bool,
) -> Result<ContactState> {
    let company = repo.company()?;
    let transport = SimulatedTransport::new(company.email.clone(), settings.send_latency());
    let mut controller = SubmissionController::new(transport, settings.success_hold());

    for field in DraftField::ALL {
        controller.update_field(field, draft.get(field));
    }

    if let Err(errors) = controller.validate() {
        let details: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
        return Err(anyhow!("Cannot transmit: {}", details.join(", ")));
    }
    controller.submit();

    println!(":: Transmitting to {}", company.email);
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.yellow} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(submit_label(controller.status()));

    while let Some(status) = controller.next_transition().await {
        pb.set_message(submit_label(status));
        match status {
            SubmissionStatus::Success => {
                pb.println(format!("   {}", submit_label(status)));
                if !wait {
                    break;
                }
            }
            SubmissionStatus::Idle => break,
            SubmissionStatus::Sending => {}
        }
    }
    pb.finish_and_clear();

    let state = controller.state().clone();
    if let Some(failure) = &state.failure {
        return Err(anyhow!("Transmission failed: {failure}"));
    }
    Ok(state)
}

pub fn cmd_projects_list(repo: &impl ContentRepo) -> Result<()> {
    let catalog = repo.projects()?;

    if catalog.is_empty() {
        println!("No projects found.");
        return Ok(());
    }

    println!("{:<12} {:<32} {:<24} {:<16}", "ID", "TITLE", "LOCATION", "STATUS");
    println!("{:-<12} {:-<32} {:-<24} {:-<16}", "", "", "", "");
    for card in project_cards(&catalog) {
        println!(
            "{:<12} {:<32} {:<24} {:<16}",
            card.id, card.title, card.location, card.status_tag
        );
    }
    Ok(())
}

#[derive(Debug, Clone)]
pub enum ViewOutcome {
    Disclosed(ProjectDetailVm),
    RedirectedTo(String),
    Declined,
}

pub fn cmd_projects_view(
    repo: &impl ContentRepo,
    persistence: &FilePersistence,
    settings: &SiteSettings,
    project_id: &str,
    prompt: PromptMode,
) -> Result<ViewOutcome> {
    let catalog = repo.projects()?;
    catalog.get(project_id)?;

    let auth = SessionStoreAuth::new(persistence.clone());
    let mut gate = DisclosureGate::new(auth, RecordingNavigator::new())
        .with_login_route(settings.login_route.clone());

    let outcome = match gate.request_access(project_id) {
        AccessDecision::Granted => match project_detail_vm(&gate, &catalog) {
            Some(detail) => ViewOutcome::Disclosed(detail),
            None => return Err(anyhow!("Project '{project_id}' has no detail to show")),
        },
        AccessDecision::ConfirmationRequired(pending) => {
            let accepted = match prompt {
                PromptMode::Yes => true,
                PromptMode::No => false,
                PromptMode::Ask => dialoguer::Confirm::new()
                    .with_prompt(pending.message.as_str())
                    .default(false)
                    .interact()?,
            };
            let response = if accepted {
                PromptResponse::Accept
            } else {
                PromptResponse::Decline
            };
            match gate.respond(response) {
                Some(route) => ViewOutcome::RedirectedTo(route),
                None => ViewOutcome::Declined,
            }
        }
    };

    match &outcome {
        ViewOutcome::Disclosed(detail) => print_detail(detail),
        ViewOutcome::RedirectedTo(route) => {
            println!(":: Authentication required. Continue at {route}")
        }
        ViewOutcome::Declined => println!(":: Access declined."),
    }
    gate.dismiss();

    Ok(outcome)
}

fn print_detail(detail: &ProjectDetailVm) {
    println!(":: {}", detail.header);
    println!("   {}", detail.title);
    if let Some(code) = &detail.budget_code {
        println!("   {:<24} {}", "Budget Code", code);
    }
    if let Some(level) = &detail.clearance_level {
        println!("   {:<24} {}", "Clearance Level", level);
    }
    for spec in &detail.specs {
        println!("   {:<24} {}", spec.label, spec.value);
    }
    println!();
    println!("   {}", detail.notice);
}
