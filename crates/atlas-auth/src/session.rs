//! In-memory session store.
//!
//! Holds the access token and user id from login to logout. Both fields
//! are set and cleared together; readers never observe one without the
//! other. Components re-read the store on every authorized action rather
//! than caching the result.

use std::sync::Arc;

use parking_lot::RwLock;

/// The authenticated identity attached to authorized requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user_id: i64,
}

/// Shared handle to the current session.
///
/// Cloning the store clones the handle, not the session; all clones
/// observe the same login/logout transitions.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<Option<Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set token and user id atomically.
    pub fn login(&self, token: impl Into<String>, user_id: i64) {
        let session = Session {
            token: token.into(),
            user_id,
        };
        *self.inner.write() = Some(session);
        tracing::info!(user_id, "Session established");
    }

    /// Clear token and user id atomically.
    pub fn logout(&self) {
        *self.inner.write() = None;
        tracing::info!("Session cleared");
    }

    /// The present session, or `None` when unauthenticated.
    pub fn current(&self) -> Option<Session> {
        self.inner.read().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.read().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_sets_both_fields() {
        let store = SessionStore::new();
        store.login("token-abc", 7);

        let session = store.current().unwrap();
        assert_eq!(session.token, "token-abc");
        assert_eq!(session.user_id, 7);
        assert!(store.is_authenticated());
    }

    #[test]
    fn test_logout_clears_both_fields() {
        let store = SessionStore::new();
        store.login("token-abc", 7);
        store.logout();

        assert!(store.current().is_none());
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_clones_share_the_same_session() {
        let store = SessionStore::new();
        let reader = store.clone();

        store.login("token-abc", 7);
        assert_eq!(reader.current().unwrap().user_id, 7);

        store.logout();
        assert!(reader.current().is_none());
    }

    #[test]
    fn test_relogin_replaces_session() {
        let store = SessionStore::new();
        store.login("first", 1);
        store.login("second", 2);

        let session = store.current().unwrap();
        assert_eq!(session.token, "second");
        assert_eq!(session.user_id, 2);
    }
}
