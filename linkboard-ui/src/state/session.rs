//! Browser Session
//!
//! The shared [`SessionStore`] over `localStorage`, plus a signal mirroring
//! the signed-in user so views re-render when the session changes.

use leptos::*;
use wasm_bindgen::JsValue;

use linkboard::models::User;
use linkboard::session::{SessionError, SessionResult, SessionStorage, SessionStore};

/// `window.localStorage` as a session backend
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> SessionResult<web_sys::Storage> {
        web_sys::window()
            .ok_or_else(|| SessionError::Storage("no window".to_string()))?
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| SessionError::Storage("localStorage unavailable".to_string()))
    }
}

fn js_error(e: JsValue) -> SessionError {
    SessionError::Storage(format!("{:?}", e))
}

impl SessionStorage for LocalStorage {
    fn get(&self, key: &str) -> SessionResult<Option<String>> {
        Self::storage()?.get_item(key).map_err(js_error)
    }

    fn set(&self, key: &str, value: &str) -> SessionResult<()> {
        Self::storage()?.set_item(key, value).map_err(js_error)
    }

    fn remove(&self, key: &str) -> SessionResult<()> {
        Self::storage()?.remove_item(key).map_err(js_error)
    }
}

/// Session handle provided to all components
#[derive(Clone, Copy)]
pub struct SessionContext {
    store: StoredValue<SessionStore<LocalStorage>>,
    /// Signed-in user, `None` when logged out
    pub user: RwSignal<Option<User>>,
}

/// Restore the session from `localStorage` and provide it to the tree
pub fn provide_session() {
    let store = SessionStore::restore(LocalStorage);
    let user = create_rw_signal(store.user().cloned());

    provide_context(SessionContext {
        store: store_value(store),
        user,
    });
}

impl SessionContext {
    pub fn token(&self) -> Option<String> {
        self.store
            .try_with_value(|s| s.token().map(str::to_string))
            .flatten()
    }

    pub fn user_id(&self) -> Option<String> {
        self.user.with(|u| u.as_ref().map(|u| u.id.clone()))
    }

    /// Run `f` against the store, then refresh the user signal
    pub fn with_store<R>(&self, f: impl FnOnce(&mut SessionStore<LocalStorage>) -> R) -> Option<R> {
        let result = self.store.try_update_value(f);
        let user = self
            .store
            .try_with_value(|s| s.user().cloned())
            .flatten();
        self.user.set(user);
        result
    }

    pub fn logout(&self) {
        if let Some(Err(e)) = self.with_store(|s| s.logout()) {
            web_sys::console::error_1(&format!("Failed to clear session: {}", e).into());
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use linkboard::session::{TOKEN_KEY, USER_KEY};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_local_storage_round_trip() {
        let storage = LocalStorage;
        storage.set("linkboard_test_key", "abc").unwrap();
        assert_eq!(storage.get("linkboard_test_key").unwrap().as_deref(), Some("abc"));

        storage.remove("linkboard_test_key").unwrap();
        storage.remove("linkboard_test_key").unwrap();
        assert_eq!(storage.get("linkboard_test_key").unwrap(), None);
    }

    #[wasm_bindgen_test]
    fn test_legacy_record_restores_from_local_storage() {
        let storage = LocalStorage;
        storage.set(TOKEN_KEY, "abc").unwrap();
        storage
            .set(
                USER_KEY,
                r#"{"_id":"u1","email":"a@b.com","name":"A","createdAt":"2024-01-01T00:00:00Z"}"#,
            )
            .unwrap();

        let store = SessionStore::restore(LocalStorage);
        assert_eq!(store.user().map(|u| u.id.as_str()), Some("u1"));
        assert!(!storage.get(USER_KEY).unwrap().unwrap_or_default().contains("_id"));

        let mut store = store;
        store.logout().unwrap();
        assert_eq!(storage.get(TOKEN_KEY).unwrap(), None);
    }
}
