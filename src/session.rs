use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::models::User;
use crate::storage::{restore_or_default, Storage, AUTH_KEY};
use crate::Result;

/// The client-side record of who is logged in, mirrored 1:1 into the `auth`
/// storage entry as `{"token", "refreshToken", "user"}`.
///
/// `user` is present if and only if `access_token` is - maintained by
/// construction through the operations on [`AuthSession`], not enforced
/// cryptographically or validated against the token contents.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Session {
    #[serde(rename = "token")]
    pub access_token: Option<String>,
    #[serde(rename = "refreshToken")]
    pub refresh_token: Option<String>,
    pub user: Option<User>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }
}

/// Single source of truth for the current user and their credentials.
///
/// Owned by the application container and handed to whatever needs it;
/// consumers read snapshots and can `subscribe` to be told about every write
/// (the navigation bar swapping between guest/user/admin views hangs off
/// this). All mutation goes through `login`/`logout`/`replace_tokens` - the
/// returned snapshots are copies, so nothing outside can corrupt the store.
pub struct AuthSession {
    storage: Arc<dyn Storage>,
    state: RwLock<Session>,
    notifier: watch::Sender<Session>,
}

impl AuthSession {
    /// Reads the persisted session at startup. A missing or malformed blob
    /// restores as the logged-out session - that path never errors.
    #[tracing::instrument(skip(storage))]
    pub fn restore(storage: Arc<dyn Storage>) -> Self {
        let session: Session = restore_or_default(AUTH_KEY, storage.get(AUTH_KEY));
        let (notifier, _) = watch::channel(session.clone());
        Self {
            storage,
            state: RwLock::new(session),
            notifier,
        }
    }

    /// Replaces the whole session: all three fields change together, in
    /// memory and in storage. No validation of the token shape is performed.
    #[tracing::instrument(skip(self, access_token, refresh_token, user), fields(user_id = %user.id))]
    pub fn login(
        &self,
        access_token: impl Into<String>,
        refresh_token: impl Into<String>,
        user: User,
    ) -> Result<()> {
        let next = Session {
            access_token: Some(access_token.into()),
            refresh_token: Some(refresh_token.into()),
            user: Some(user),
        };
        self.commit(next)
    }

    /// Clears the session and erases the persisted entry. Deliberately makes
    /// no server-side revocation call - the tokens are stateless.
    #[tracing::instrument(skip(self))]
    pub fn logout(&self) -> Result<()> {
        *self.write() = Session::default();
        self.storage.remove(AUTH_KEY)?;
        self.notifier.send_replace(Session::default());
        Ok(())
    }

    /// Swaps the token pair only, keeping the user untouched. This is the
    /// refresh path - the caller just minted new tokens for the same user.
    #[tracing::instrument(skip(self, access_token, refresh_token))]
    pub fn replace_tokens(
        &self,
        access_token: impl Into<String>,
        refresh_token: impl Into<String>,
    ) -> Result<()> {
        let mut next = self.read().clone();
        next.access_token = Some(access_token.into());
        next.refresh_token = Some(refresh_token.into());
        self.commit(next)
    }

    pub fn snapshot(&self) -> Session {
        self.read().clone()
    }

    pub fn user(&self) -> Option<User> {
        self.read().user.clone()
    }

    pub fn access_token(&self) -> Option<String> {
        self.read().access_token.clone()
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.read().refresh_token.clone()
    }

    /// Every committed write is broadcast to subscribers as a fresh snapshot
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.notifier.subscribe()
    }

    fn commit(&self, next: Session) -> Result<()> {
        *self.write() = next.clone();
        self.storage.set(AUTH_KEY, serde_json::to_string(&next)?)?;
        self.notifier.send_replace(next);
        Ok(())
    }

    fn read(&self) -> RwLockReadGuard<'_, Session> {
        self.state
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Session> {
        self.state
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use assert_json_diff::assert_json_eq;
    use claims::{assert_none, assert_ok, assert_some};
    use serde_json::json;

    fn test_user(id: &str) -> User {
        serde_json::from_value(json!({ "_id": id, "email": "guest@example.com" }))
            .expect("test user should parse")
    }

    fn session_over(storage: Arc<MemoryStorage>) -> AuthSession {
        AuthSession::restore(storage as Arc<dyn Storage>)
    }

    #[test]
    fn starts_logged_out_on_first_run() {
        let session = session_over(Arc::new(MemoryStorage::new()));
        assert_none!(session.user());
        assert_none!(session.access_token());
        assert!(!session.snapshot().is_authenticated());
    }

    #[test]
    fn login_replaces_all_three_fields_and_persists_them() {
        let storage = Arc::new(MemoryStorage::new());
        let session = session_over(storage.clone());

        assert_ok!(session.login("tok1", "ref1", test_user("u1")));

        assert_eq!(session.user().expect("user should be set").id, "u1");
        assert_eq!(session.access_token().as_deref(), Some("tok1"));

        let persisted: serde_json::Value =
            serde_json::from_str(&storage.get(AUTH_KEY).expect("auth entry should exist"))
                .expect("persisted auth should be json");
        assert_json_eq!(
            persisted,
            json!({
                "token": "tok1",
                "refreshToken": "ref1",
                "user": { "_id": "u1", "email": "guest@example.com" }
            })
        );
    }

    #[test]
    fn persisted_sessions_survive_a_restart() {
        let storage = Arc::new(MemoryStorage::new());
        {
            let session = session_over(storage.clone());
            assert_ok!(session.login("tok1", "ref1", test_user("u1")));
        }

        let restored = session_over(storage);
        assert_eq!(restored.access_token().as_deref(), Some("tok1"));
        assert_eq!(restored.refresh_token().as_deref(), Some("ref1"));
        assert_eq!(restored.user().expect("user should restore").id, "u1");
    }

    #[test]
    fn malformed_persisted_blob_restores_logged_out() {
        let storage = Arc::new(MemoryStorage::new());
        storage.seed(AUTH_KEY, "{corrupted");

        let session = session_over(storage);
        assert_none!(session.user());
        assert_none!(session.refresh_token());
    }

    #[test]
    fn logout_clears_memory_and_erases_storage() {
        let storage = Arc::new(MemoryStorage::new());
        let session = session_over(storage.clone());
        assert_ok!(session.login("tok1", "ref1", test_user("u1")));

        assert_ok!(session.logout());

        assert_none!(session.user());
        assert_eq!(storage.get(AUTH_KEY), None);
    }

    #[test]
    fn replace_tokens_keeps_the_user() {
        let storage = Arc::new(MemoryStorage::new());
        let session = session_over(storage);
        assert_ok!(session.login("tok1", "ref1", test_user("u1")));

        assert_ok!(session.replace_tokens("tok2", "ref2"));

        assert_eq!(session.access_token().as_deref(), Some("tok2"));
        assert_eq!(session.refresh_token().as_deref(), Some("ref2"));
        assert_some!(session.user());
    }

    #[test]
    fn writes_notify_subscribers() {
        let session = session_over(Arc::new(MemoryStorage::new()));
        let mut updates = session.subscribe();

        assert_ok!(session.login("tok1", "ref1", test_user("u1")));
        assert!(updates.has_changed().expect("sender should be alive"));
        assert!(updates.borrow_and_update().is_authenticated());

        assert_ok!(session.logout());
        assert!(!updates.borrow_and_update().is_authenticated());
    }
}
