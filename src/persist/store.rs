//! Key-value backends for saved sessions

use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Minimal persistent key-value surface the session layer writes through
///
/// Absent keys are not errors: `get` returns `None` and `delete` succeeds.
pub trait KvStore {
    /// Read the value stored under `key`, if any
    ///
    /// # Errors
    /// Returns an error when the backend cannot be read.
    fn get(&self, key: &str) -> io::Result<Option<String>>;

    /// Write `value` under `key`, replacing any previous value
    ///
    /// # Errors
    /// Returns an error when the backend cannot be written.
    fn set(&self, key: &str, value: &str) -> io::Result<()>;

    /// Remove `key` and its value
    ///
    /// # Errors
    /// Returns an error when the backend cannot be written.
    fn delete(&self, key: &str) -> io::Result<()>;
}

/// One file per key under a root directory
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Store rooted at the given directory, created lazily on first write
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Store under the platform's local data directory
    ///
    /// Returns `None` when the platform exposes no such directory.
    #[must_use]
    pub fn in_user_data_dir(app: &str) -> Option<Self> {
        dirs::data_local_dir().map(|dir| Self::new(dir.join(app)))
    }

    /// Directory the store writes into
    #[must_use]
    pub fn root(&self) -> &std::path::Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> io::Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        }
    }

    fn set(&self, key: &str, value: &str) -> io::Result<()> {
        fs::create_dir_all(&self.root)?;
        fs::write(self.path_for(key), value)
    }

    fn delete(&self, key: &str) -> io::Result<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err),
        }
    }
}

/// Volatile store for tests and no-save sessions
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<FxHashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> io::Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> io::Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> io::Result<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trip() {
        let store = MemoryStore::new();

        assert_eq!(store.get("session").unwrap(), None);
        store.set("session", "{}").unwrap();
        assert_eq!(store.get("session").unwrap(), Some("{}".to_string()));
        store.set("session", "{\"v\":1}").unwrap();
        assert_eq!(
            store.get("session").unwrap(),
            Some("{\"v\":1}".to_string())
        );
        store.delete("session").unwrap();
        assert_eq!(store.get("session").unwrap(), None);
    }

    #[test]
    fn memory_store_delete_missing_is_ok() {
        let store = MemoryStore::new();
        store.delete("nothing").unwrap();
    }

    #[test]
    fn file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("sessions"));

        assert_eq!(store.get("session").unwrap(), None);
        store.set("session", "hello").unwrap();
        assert_eq!(store.get("session").unwrap(), Some("hello".to_string()));
        store.delete("session").unwrap();
        assert_eq!(store.get("session").unwrap(), None);
    }

    #[test]
    fn file_store_creates_root_on_write() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("deeply").join("nested");
        let store = FileStore::new(&root);

        store.set("session", "x").unwrap();

        assert!(root.join("session.json").is_file());
    }

    #[test]
    fn file_store_delete_missing_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        store.delete("nothing").unwrap();
    }

    #[test]
    fn file_store_overwrites_existing_value() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());

        store.set("session", "first").unwrap();
        store.set("session", "second").unwrap();

        assert_eq!(store.get("session").unwrap(), Some("second".to_string()));
    }
}
