use super::{SessionStore, SessionStoreError};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Session Store that keeps each key in `<dir>/<key>.json`.
///
/// Writes go to a temporary file first and are renamed into place, so a reader never
/// sees a half-written value. Keys are limited to ASCII letters, digits, `_` and `-`.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    dir: PathBuf,
}

impl FileSessionStore {
    /// Opens (and creates if needed) a session directory.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, SessionStoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        debug!(dir = %dir.display(), "Opened file session store");
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, SessionStoreError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(SessionStoreError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, SessionStoreError> {
        match fs::read_to_string(self.path_for(key)?) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionStoreError> {
        let path = self.path_for(key)?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), SessionStoreError> {
        match fs::remove_file(self.path_for(key)?) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::open(dir.path().join("session")).unwrap();
        store.set("cart", r#"[{"id":1}]"#).unwrap();

        let reopened = FileSessionStore::open(dir.path().join("session")).unwrap();
        assert_eq!(
            reopened.get("cart").unwrap().as_deref(),
            Some(r#"[{"id":1}]"#)
        );
        assert!(!reopened.dir().join("cart.json.tmp").exists());
    }

    #[test]
    fn test_delete_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::open(dir.path()).unwrap();

        store.delete("cart").unwrap();
        store.set("cart", "[]").unwrap();
        store.delete("cart").unwrap();
        assert_eq!(store.get("cart").unwrap(), None);
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::open(dir.path()).unwrap();

        for key in ["", "../cart", "a/b", "cart.json"] {
            assert!(matches!(
                store.set(key, "[]"),
                Err(SessionStoreError::InvalidKey(_))
            ));
        }
    }
}
