use outpost_core::{ProjectCatalog, ProjectId, ProjectRecord};
use tracing::{debug, info};

use crate::ports::{AuthSessionProvider, Navigator};

/// Prompt the presentation layer must show after an unauthenticated request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingConfirmation {
    pub project_id: ProjectId,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    Granted,
    ConfirmationRequired(PendingConfirmation),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptResponse {
    Accept,
    Decline,
}

/// Decides whether a project's restricted detail may be shown.
pub struct DisclosureGate<A, N> {
    auth: A,
    navigator: N,
    login_route: String,
    prompt: String,

    selection: Option<ProjectId>,
    pending: Option<PendingConfirmation>,
}

impl<A, N> DisclosureGate<A, N>
where
    A: AuthSessionProvider,
    N: Navigator,
{
    pub fn new(auth: A, navigator: N) -> Self {
        Self {
            auth,
            navigator,
            login_route: outpost_config::LOGIN_ROUTE.to_string(),
            prompt: outpost_config::RESTRICTED_ACCESS_PROMPT.to_string(),
            selection: None,
            pending: None,
        }
    }

    pub fn with_login_route(mut self, route: impl Into<String>) -> Self {
        self.login_route = route.into();
        self
    }

    pub fn selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    pub fn pending_confirmation(&self) -> Option<&PendingConfirmation> {
        self.pending.as_ref()
    }

    pub fn login_route(&self) -> &str {
        &self.login_route
    }

    /// Unknown ids are not rejected here: the selection is set and
    /// [`resolve_selection`](Self::resolve_selection) simply finds nothing.
    pub fn request_access(&mut self, project_id: &str) -> AccessDecision {
        if self.auth.is_authenticated() {
            debug!(project = project_id, "restricted access granted");
            self.selection = Some(project_id.to_string());
            self.pending = None;
            return AccessDecision::Granted;
        }

        debug!(project = project_id, "restricted access requires login");
        let pending = PendingConfirmation {
            project_id: project_id.to_string(),
            message: self.prompt.clone(),
        };
        self.pending = Some(pending.clone());
        AccessDecision::ConfirmationRequired(pending)
    }

    /// Settles the pending prompt. Returns the route navigated to, if any.
    pub fn respond(&mut self, response: PromptResponse) -> Option<String> {
        let pending = self.pending.take()?;
        match response {
            PromptResponse::Accept => {
                info!(
                    project = %pending.project_id,
                    route = %self.login_route,
                    "redirecting to login"
                );
                self.navigator.go_to(&self.login_route);
                Some(self.login_route.clone())
            }
            PromptResponse::Decline => {
                debug!(project = %pending.project_id, "login prompt declined");
                None
            }
        }
    }

    pub fn dismiss(&mut self) {
        self.selection = None;
    }

    pub fn resolve_selection<'a>(&self, catalog: &'a ProjectCatalog) -> Option<&'a ProjectRecord> {
        self.selection.as_deref().and_then(|id| catalog.find(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RecordingNavigator, StaticAuth};

    #[test]
    fn granted_request_clears_stale_prompt() {
        let auth = StaticAuth::new(false);
        let mut gate = DisclosureGate::new(auth.clone(), RecordingNavigator::new());

        gate.request_access("p1");
        assert!(gate.pending_confirmation().is_some());

        auth.set(true);
        assert_eq!(gate.request_access("p1"), AccessDecision::Granted);
        assert!(gate.pending_confirmation().is_none());
    }

    #[test]
    fn respond_without_prompt_does_nothing() {
        let nav = RecordingNavigator::new();
        let mut gate = DisclosureGate::new(StaticAuth::new(false), nav.clone());

        assert_eq!(gate.respond(PromptResponse::Accept), None);
        assert!(nav.routes().is_empty());
    }

    #[test]
    fn custom_login_route_is_used() {
        let nav = RecordingNavigator::new();
        let mut gate =
            DisclosureGate::new(StaticAuth::new(false), nav.clone()).with_login_route("/signin");

        gate.request_access("p9");
        assert_eq!(gate.respond(PromptResponse::Accept).as_deref(), Some("/signin"));
        assert_eq!(nav.last().as_deref(), Some("/signin"));
    }
}
