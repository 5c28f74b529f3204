//! The session store itself.

use super::migrate::decode_user;
use super::storage::SessionStorage;
use super::SessionResult;
use crate::models::{Session, User};

/// Storage key for the bearer token
pub const TOKEN_KEY: &str = "token";
/// Storage key for the JSON-encoded user record
pub const USER_KEY: &str = "user";

/// Current session, mirrored to a [`SessionStorage`] backend.
///
/// Token and user are only ever set or cleared together. No expiry check is
/// done: a stored token counts as valid until a request using it fails.
pub struct SessionStore<S: SessionStorage> {
    storage: S,
    session: Option<Session>,
}

impl<S: SessionStorage> SessionStore<S> {
    /// Empty store over `storage`, ignoring anything already persisted
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            session: None,
        }
    }

    /// Store initialised from whatever `storage` holds.
    ///
    /// A missing or unreadable pair leaves the store empty.
    pub fn restore(storage: S) -> Self {
        let mut store = Self::new(storage);
        match store.load() {
            Ok(Some(session)) => {
                tracing::debug!(user_id = %session.user.id, "Restored session");
                store.session = Some(session);
            }
            Ok(None) => tracing::debug!("No stored session"),
            Err(e) => tracing::warn!("Ignoring stored session: {}", e),
        }
        store
    }

    fn load(&self) -> SessionResult<Option<Session>> {
        // Empty strings count as missing.
        let token = self.storage.get(TOKEN_KEY)?.filter(|t| !t.is_empty());
        let raw_user = self.storage.get(USER_KEY)?.filter(|u| !u.is_empty());

        let (Some(token), Some(raw_user)) = (token, raw_user) else {
            return Ok(None);
        };

        let decoded = decode_user(&raw_user)?;
        if decoded.needs_rewrite() {
            tracing::info!(user_id = %decoded.user.id, "Upgrading legacy stored user record");
            self.storage
                .set(USER_KEY, &serde_json::to_string(&decoded.user)?)?;
        }

        Ok(Some(Session {
            token,
            user: decoded.user,
        }))
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn user(&self) -> Option<&User> {
        self.session.as_ref().map(|s| &s.user)
    }

    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// Name used by the home greeting: the local part of the email
    pub fn greeting_name(&self) -> Option<&str> {
        self.user().map(User::email_local_part)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Start a session. Memory is always updated; a persistence failure is
    /// returned after rolling storage back to empty.
    pub fn login(&mut self, token: String, user: User) -> SessionResult<()> {
        tracing::info!(user_id = %user.id, "Session started");
        let session = Session { token, user };
        let persisted = self.persist(&session);
        self.session = Some(session);

        if persisted.is_err() {
            let _ = self.clear_storage();
        }
        persisted
    }

    /// End the session, clearing memory and storage
    pub fn logout(&mut self) -> SessionResult<()> {
        if let Some(session) = self.session.take() {
            tracing::info!(user_id = %session.user.id, "Session ended");
        }
        self.clear_storage()
    }

    /// Swap the cached user record, keeping the token.
    ///
    /// Does nothing without a session, so a user is never stored alone.
    pub fn replace_user(&mut self, user: User) -> SessionResult<()> {
        let Some(session) = self.session.as_mut() else {
            return Ok(());
        };
        session.user = user;
        self.storage
            .set(USER_KEY, &serde_json::to_string(&session.user)?)
    }

    fn persist(&self, session: &Session) -> SessionResult<()> {
        let user = serde_json::to_string(&session.user)?;
        self.storage.set(TOKEN_KEY, &session.token)?;
        self.storage.set(USER_KEY, &user)
    }

    fn clear_storage(&self) -> SessionResult<()> {
        let token = self.storage.remove(TOKEN_KEY);
        let user = self.storage.remove(USER_KEY);
        token.and(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{MemoryStorage, SessionError};
    use chrono::{TimeZone, Utc};

    fn user(id: &str) -> User {
        User {
            id: id.to_string(),
            email: "a@b.com".to_string(),
            name: "A".to_string(),
            bio: String::new(),
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_starts_empty() {
        let store = SessionStore::restore(MemoryStorage::new());
        assert!(!store.is_authenticated());
        assert!(store.user().is_none());
        assert!(store.token().is_none());
    }

    #[test]
    fn test_login_round_trip() {
        let storage = MemoryStorage::new();
        {
            let mut store = SessionStore::new(&storage);
            store.login("abc".to_string(), user("u1")).unwrap();
            assert_eq!(store.token(), Some("abc"));
            assert_eq!(store.greeting_name(), Some("a"));
        }

        let restored = SessionStore::restore(&storage);
        assert_eq!(restored.token(), Some("abc"));
        assert_eq!(restored.user(), Some(&user("u1")));
    }

    #[test]
    fn test_logout_clears_both_entries() {
        let storage = MemoryStorage::new();
        let mut store = SessionStore::new(&storage);
        store.login("abc".to_string(), user("u1")).unwrap();
        store.logout().unwrap();

        assert!(!store.is_authenticated());
        assert_eq!(storage.get(TOKEN_KEY).unwrap(), None);
        assert_eq!(storage.get(USER_KEY).unwrap(), None);
        assert!(!SessionStore::restore(&storage).is_authenticated());
    }

    #[test]
    fn test_half_stored_pair_is_ignored() {
        let storage = MemoryStorage::new();
        storage.set(TOKEN_KEY, "abc").unwrap();
        assert!(!SessionStore::restore(&storage).is_authenticated());
    }

    #[test]
    fn test_empty_token_is_no_session() {
        let storage = MemoryStorage::new();
        storage.set(TOKEN_KEY, "").unwrap();
        storage
            .set(USER_KEY, &serde_json::to_string(&user("u1")).unwrap())
            .unwrap();

        let store = SessionStore::restore(&storage);
        assert!(!store.is_authenticated());
        assert!(store.user().is_none());
    }

    #[test]
    fn test_legacy_record_is_rewritten() {
        let storage = MemoryStorage::new();
        storage.set(TOKEN_KEY, "abc").unwrap();
        storage
            .set(
                USER_KEY,
                r#"{"_id":"u1","email":"a@b.com","name":"A","bio":"","createdAt":"2024-01-01T00:00:00Z"}"#,
            )
            .unwrap();

        let store = SessionStore::restore(&storage);
        assert_eq!(store.user(), Some(&user("u1")));

        let stored: serde_json::Value =
            serde_json::from_str(&storage.get(USER_KEY).unwrap().unwrap()).unwrap();
        assert_eq!(stored["id"], "u1");
        assert!(stored.get("_id").is_none());
    }

    #[test]
    fn test_corrupt_record_starts_empty() {
        let storage = MemoryStorage::new();
        storage.set(TOKEN_KEY, "abc").unwrap();
        storage.set(USER_KEY, "{}").unwrap();
        assert!(!SessionStore::restore(&storage).is_authenticated());
    }

    #[test]
    fn test_replace_user_keeps_token() {
        let storage = MemoryStorage::new();
        let mut store = SessionStore::new(&storage);
        store.login("abc".to_string(), user("u1")).unwrap();

        let mut renamed = user("u1");
        renamed.name = "Ada".to_string();
        store.replace_user(renamed.clone()).unwrap();

        assert_eq!(store.token(), Some("abc"));
        assert_eq!(SessionStore::restore(&storage).user(), Some(&renamed));
    }

    #[test]
    fn test_replace_user_without_session() {
        let storage = MemoryStorage::new();
        let mut store = SessionStore::new(&storage);
        store.replace_user(user("u1")).unwrap();
        assert_eq!(storage.get(USER_KEY).unwrap(), None);
    }

    struct ReadOnly;

    impl SessionStorage for ReadOnly {
        fn get(&self, _key: &str) -> SessionResult<Option<String>> {
            Ok(None)
        }

        fn set(&self, _key: &str, _value: &str) -> SessionResult<()> {
            Err(SessionError::Storage("quota exceeded".to_string()))
        }

        fn remove(&self, _key: &str) -> SessionResult<()> {
            Ok(())
        }
    }

    #[test]
    fn test_login_persistence_failure_keeps_memory() {
        let mut store = SessionStore::new(ReadOnly);
        assert!(store.login("abc".to_string(), user("u1")).is_err());
        assert!(store.is_authenticated());
    }
}
