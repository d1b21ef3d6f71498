use std::sync::{Arc, Mutex, MutexGuard};

use tracing::info;

use crate::ports::Navigator;

/// Keeps every requested route in order. Clones share the history.
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    routes: Arc<Mutex<Vec<String>>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn routes(&self) -> Vec<String> {
        self.history().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.history().last().cloned()
    }

    // A push cannot leave the list half-written, so a poisoned lock is still usable.
    fn history(&self) -> MutexGuard<'_, Vec<String>> {
        self.routes.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Navigator for RecordingNavigator {
    fn go_to(&self, route: &str) {
        info!(route, "navigating");
        self.history().push(route.to_string());
    }
}
