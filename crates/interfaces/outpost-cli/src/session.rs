use anyhow::{anyhow, Result};
use outpost_app_core::{FilePersistence, Session};

pub fn handle_login(persistence: &FilePersistence, role: String) -> Result<Session> {
    let role = role.trim().to_string();
    if role.is_empty() {
        return Err(anyhow!("Role cannot be empty"));
    }

    let session = Session::signed_in(role);
    persistence.save_session(&session)?;
    println!(
        "Signed in as '{}'.",
        session.user_role.as_deref().unwrap_or_default()
    );
    Ok(session)
}

pub fn handle_logout(persistence: &FilePersistence) -> Result<()> {
    persistence.clear_session()?;
    println!("Signed out.");
    Ok(())
}

pub fn handle_status(persistence: &FilePersistence) -> Result<()> {
    let session = persistence.load_session()?;
    match (&session.user_role, session.signed_in_at) {
        (Some(role), Some(at)) => println!("Signed in as '{role}' since {}", at.to_rfc3339()),
        (Some(role), None) => println!("Signed in as '{role}'"),
        (None, _) => println!("Not signed in."),
    }
    Ok(())
}
