use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::warn;

use crate::persistence::FilePersistence;
use crate::ports::AuthSessionProvider;

/// Fixed answer that can be flipped at runtime. Clones share the flag.
#[derive(Debug, Clone, Default)]
pub struct StaticAuth(Arc<AtomicBool>);

impl StaticAuth {
    pub fn new(authenticated: bool) -> Self {
        Self(Arc::new(AtomicBool::new(authenticated)))
    }

    pub fn set(&self, authenticated: bool) {
        self.0.store(authenticated, Ordering::SeqCst);
    }
}

impl AuthSessionProvider for StaticAuth {
    fn is_authenticated(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Reads the persisted session on every query.
pub struct SessionStoreAuth {
    persistence: FilePersistence,
}

impl SessionStoreAuth {
    pub fn new(persistence: FilePersistence) -> Self {
        Self { persistence }
    }
}

impl AuthSessionProvider for SessionStoreAuth {
    fn is_authenticated(&self) -> bool {
        match self.persistence.load_session() {
            Ok(session) => session.is_authenticated(),
            Err(e) => {
                warn!("Failed to read session, treating as signed out: {e}");
                false
            }
        }
    }
}
