//! In-memory session store. Each session is isolated under its own id; there
//! is no durable storage and no cross-session identity.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use anyhow::anyhow;
use uuid::Uuid;

use crate::errors::AppError;
use crate::session::Session;

#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, Session>>>,
}

impl SessionStore {
    /// Creates a fresh session and returns a snapshot of it.
    pub fn create(&self) -> Result<Session, AppError> {
        let session = Session::new();
        let mut sessions = self
            .inner
            .write()
            .map_err(|_| AppError::Internal(anyhow!("session store lock poisoned")))?;
        sessions.insert(session.id, session.clone());
        Ok(session)
    }

    /// Runs `f` against the stored session, returning its result. The
    /// closure sees (and may mutate) the live session under the lock.
    pub fn with<R>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut Session) -> Result<R, AppError>,
    ) -> Result<R, AppError> {
        let mut sessions = self
            .inner
            .write()
            .map_err(|_| AppError::Internal(anyhow!("session store lock poisoned")))?;
        let session = sessions
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))?;
        f(session)
    }

    /// Snapshot of a session by id.
    pub fn get(&self, id: Uuid) -> Result<Session, AppError> {
        let sessions = self
            .inner
            .read()
            .map_err(|_| AppError::Internal(anyhow!("session store lock poisoned")))?;
        sessions
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))
    }

    /// Destroys a session. Ends the lifecycle; a new session starts empty.
    pub fn remove(&self, id: Uuid) -> Result<(), AppError> {
        let mut sessions = self
            .inner
            .write()
            .map_err(|_| AppError::Internal(anyhow!("session store lock poisoned")))?;
        sessions
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_get_remove_lifecycle() {
        let store = SessionStore::default();
        let session = store.create().unwrap();

        let fetched = store.get(session.id).unwrap();
        assert_eq!(fetched.id, session.id);

        store.remove(session.id).unwrap();
        assert!(matches!(store.get(session.id), Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_with_mutates_stored_session() {
        let store = SessionStore::default();
        let session = store.create().unwrap();

        store
            .with(session.id, |s| s.record_rating("Keeping upbeat", 4))
            .unwrap();

        let fetched = store.get(session.id).unwrap();
        assert_eq!(fetched.ratings["Keeping upbeat"], 4);
    }

    #[test]
    fn test_sessions_are_isolated() {
        let store = SessionStore::default();
        let first = store.create().unwrap();
        let second = store.create().unwrap();

        store
            .with(first.id, |s| s.record_rating("Solving problems", 5))
            .unwrap();

        let untouched = store.get(second.id).unwrap();
        assert!(untouched.ratings.is_empty());
    }

    #[test]
    fn test_unknown_session_is_not_found() {
        let store = SessionStore::default();
        let missing = Uuid::new_v4();
        assert!(matches!(store.get(missing), Err(AppError::NotFound(_))));
        assert!(matches!(
            store.remove(missing),
            Err(AppError::NotFound(_))
        ));
    }
}
