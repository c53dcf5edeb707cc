use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::wizard::state::WizardState;

/// One user's questionnaire run.
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub wizard: WizardState,
}

/// In-memory session registry. Sessions live until destroyed or the process exits.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create(&self) -> Session {
        let session = Session {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            wizard: WizardState::new(),
        };
        let mut sessions = self.inner.write().await;
        sessions.insert(session.id, session.clone());
        debug!(session_id = %session.id, active = sessions.len(), "Session created");
        session
    }

    /// Snapshot of the session, if it exists.
    pub async fn get(&self, id: Uuid) -> Option<Session> {
        self.inner.read().await.get(&id).cloned()
    }

    /// Runs `f` against the session's wizard under the write lock.
    ///
    /// Returns `None` for an unknown session, otherwise `f`'s result and the
    /// session as it stands afterwards.
    pub async fn update<R>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut WizardState) -> R,
    ) -> Option<(R, Session)> {
        let mut sessions = self.inner.write().await;
        let session = sessions.get_mut(&id)?;
        let result = f(&mut session.wizard);
        Some((result, session.clone()))
    }

    /// Removes the session. Returns whether it existed.
    pub async fn destroy(&self, id: Uuid) -> bool {
        let removed = self.inner.write().await.remove(&id).is_some();
        if removed {
            debug!(session_id = %id, "Session destroyed");
        }
        removed
    }
}
