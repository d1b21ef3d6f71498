use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

fn default_login_route() -> String {
    outpost_config::LOGIN_ROUTE.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteSettings {
    pub send_latency_ms: u64,
    pub success_hold_ms: u64,
    #[serde(default = "default_login_route")]
    pub login_route: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            send_latency_ms: outpost_config::DEFAULT_SEND_LATENCY_MS,
            success_hold_ms: outpost_config::DEFAULT_SUCCESS_HOLD_MS,
            login_route: default_login_route(),
        }
    }
}

impl SiteSettings {
    pub fn send_latency(&self) -> Duration {
        Duration::from_millis(outpost_config::clamp_delay_ms(self.send_latency_ms))
    }

    pub fn success_hold(&self) -> Duration {
        Duration::from_millis(outpost_config::clamp_delay_ms(self.success_hold_ms))
    }
}

/// Persisted sign-in marker. A session counts as authenticated as soon as a
/// role is present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_role: Option<String>,
    pub signed_in_at: Option<DateTime<Utc>>,
}

impl Session {
    pub fn signed_in(role: impl Into<String>) -> Self {
        Self {
            user_role: Some(role.into()),
            signed_in_at: Some(Utc::now()),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user_role.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_default_to_config_constants() {
        let s = SiteSettings::default();
        assert_eq!(s.send_latency(), Duration::from_millis(1_500));
        assert_eq!(s.success_hold(), Duration::from_millis(3_000));
        assert_eq!(s.login_route, "/estimate/login");
    }

    #[test]
    fn missing_login_route_falls_back_to_default() {
        let s: SiteSettings =
            serde_json::from_str(r#"{ "send_latency_ms": 10, "success_hold_ms": 20 }"#).unwrap();
        assert_eq!(s.login_route, outpost_config::LOGIN_ROUTE);
        assert_eq!(s.send_latency(), Duration::from_millis(10));
    }

    #[test]
    fn session_is_authenticated_only_with_role() {
        assert!(!Session::default().is_authenticated());
        assert!(Session::signed_in("contractor").is_authenticated());
    }
}
