//! Key/value backends for the persisted session.

use std::collections::HashMap;
use std::sync::Mutex;

use super::{SessionError, SessionResult};

/// Minimal string key/value store, the shape of browser `localStorage`
pub trait SessionStorage {
    fn get(&self, key: &str) -> SessionResult<Option<String>>;

    fn set(&self, key: &str, value: &str) -> SessionResult<()>;

    /// Removing a missing key is not an error
    fn remove(&self, key: &str) -> SessionResult<()>;
}

/// In-memory storage; contents vanish with the process
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> SessionResult<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|e| SessionError::Storage(format!("memory storage poisoned: {}", e)))
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> SessionResult<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> SessionResult<()> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> SessionResult<()> {
        self.lock()?.remove(key);
        Ok(())
    }
}

impl<S: SessionStorage + ?Sized> SessionStorage for &S {
    fn get(&self, key: &str) -> SessionResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> SessionResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> SessionResult<()> {
        (**self).remove(key)
    }
}

#[cfg(feature = "native")]
pub use file::FileStorage;

#[cfg(feature = "native")]
mod file {
    use std::collections::BTreeMap;
    use std::fs::OpenOptions;
    use std::io::Write;
    use std::path::{Path, PathBuf};

    use super::SessionStorage;
    use crate::session::SessionResult;

    /// File-backed storage for the terminal front end.
    ///
    /// All entries live in one JSON object. Every write replaces the file via
    /// a temp file and rename so a crash never leaves half a document. On unix
    /// the file is readable by its owner only, as it holds a bearer token.
    #[derive(Clone, Debug)]
    pub struct FileStorage {
        path: PathBuf,
    }

    impl FileStorage {
        pub fn new(path: impl Into<PathBuf>) -> Self {
            Self { path: path.into() }
        }

        pub fn path(&self) -> &Path {
            &self.path
        }

        fn read_all(&self) -> SessionResult<BTreeMap<String, String>> {
            match std::fs::read_to_string(&self.path) {
                Ok(content) if content.trim().is_empty() => Ok(BTreeMap::new()),
                Ok(content) => Ok(serde_json::from_str(&content)?),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
                Err(e) => Err(e.into()),
            }
        }

        fn write_all(&self, entries: &BTreeMap<String, String>) -> SessionResult<()> {
            if let Some(parent) = self.path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }

            let tmp = self.path.with_extension("json.tmp");
            // A leftover temp file would keep its old permissions.
            let _ = std::fs::remove_file(&tmp);

            let mut options = OpenOptions::new();
            options.write(true).create_new(true);
            #[cfg(unix)]
            {
                use std::os::unix::fs::OpenOptionsExt;
                options.mode(0o600);
            }

            let mut file = options.open(&tmp)?;
            file.write_all(&serde_json::to_vec_pretty(entries)?)?;
            file.sync_all()?;
            drop(file);
            std::fs::rename(&tmp, &self.path)?;
            Ok(())
        }
    }

    impl SessionStorage for FileStorage {
        fn get(&self, key: &str) -> SessionResult<Option<String>> {
            Ok(self.read_all()?.remove(key))
        }

        fn set(&self, key: &str, value: &str) -> SessionResult<()> {
            let mut entries = self.read_all()?;
            entries.insert(key.to_string(), value.to_string());
            self.write_all(&entries)
        }

        fn remove(&self, key: &str) -> SessionResult<()> {
            let mut entries = self.read_all()?;
            if entries.remove(key).is_some() {
                self.write_all(&entries)?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("token").unwrap(), None);

        storage.set("token", "abc").unwrap();
        assert_eq!(storage.get("token").unwrap().as_deref(), Some("abc"));

        storage.remove("token").unwrap();
        storage.remove("token").unwrap();
        assert_eq!(storage.get("token").unwrap(), None);
    }

    #[cfg(feature = "native")]
    #[test]
    fn test_file_storage_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("session.json");

        let storage = FileStorage::new(&path);
        assert_eq!(storage.get("user").unwrap(), None);
        storage.set("user", r#"{"id":"u1"}"#).unwrap();
        storage.set("token", "abc").unwrap();

        let reopened = FileStorage::new(&path);
        assert_eq!(reopened.get("token").unwrap().as_deref(), Some("abc"));
        assert_eq!(reopened.get("user").unwrap().as_deref(), Some(r#"{"id":"u1"}"#));

        reopened.remove("token").unwrap();
        assert_eq!(storage.get("token").unwrap(), None);
        assert!(storage.get("user").unwrap().is_some());
    }

    #[cfg(feature = "native")]
    #[test]
    fn test_file_storage_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "not json").unwrap();

        let storage = FileStorage::new(&path);
        assert!(matches!(
            storage.get("token"),
            Err(SessionError::Serialization(_))
        ));
    }

    #[cfg(all(feature = "native", unix))]
    #[test]
    fn test_file_storage_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(path.with_extension("json.tmp"), "stale").unwrap();

        let storage = FileStorage::new(&path);
        storage.set("token", "abc").unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
        assert_eq!(storage.get("token").unwrap().as_deref(), Some("abc"));
    }
}
