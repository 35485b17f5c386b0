//! File-backed [`Store`]: one `<key>.json` file per document.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;
use uuid::Uuid;

use beauty_store_core::{Store, StoreError};

const EXTENSION: &str = "json";

/// Durable store rooted at a data directory.
///
/// Writes land in a temporary sibling file that is then renamed over the
/// target, so a reader sees either the old document or the new one. Two
/// processes writing the same key race; the last rename wins.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open (creating if needed) a store rooted at `root`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the directory cannot be created.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|source| StoreError::Io {
            key: root.display().to_string(),
            source,
        })?;
        debug!(root = %root.display(), "Opened file store");
        Ok(Self { root })
    }

    /// The data directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(StoreError::Io {
                key: key.to_owned(),
                source: std::io::Error::new(ErrorKind::InvalidInput, "invalid store key"),
            });
        }
        Ok(self.root.join(format!("{key}.{EXTENSION}")))
    }
}

fn io_error(key: &str) -> impl FnOnce(std::io::Error) -> StoreError + '_ {
    move |source| StoreError::Io {
        key: key.to_owned(),
        source,
    }
}

impl Store for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(io_error(key)(e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        let tmp = self.root.join(format!(".{key}.{}.tmp", Uuid::new_v4()));
        fs::write(&tmp, value).map_err(io_error(key))?;
        if let Err(e) = fs::rename(&tmp, &path) {
            let _ = fs::remove_file(&tmp);
            return Err(io_error(key)(e));
        }
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(io_error(key)(e)),
        }
    }

    fn keys(&self) -> Result<Vec<String>, StoreError> {
        let root = self.root.display().to_string();
        let entries = fs::read_dir(&self.root).map_err(io_error(&root))?;
        let mut keys = Vec::new();
        for entry in entries {
            let path = entry.map_err(io_error(&root))?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str())
                && !stem.starts_with('.')
            {
                keys.push(stem.to_owned());
            }
        }
        keys.sort();
        Ok(keys)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use beauty_store_core::{StoreExt, StoreKey};

    use super::*;

    fn temp_store() -> FileStore {
        let dir = std::env::temp_dir().join(format!("beauty-store-fs-{}", Uuid::new_v4()));
        FileStore::open(dir).unwrap()
    }

    #[test]
    fn test_roundtrip_and_remove() {
        let store = temp_store();
        assert_eq!(store.get("orders").unwrap(), None);

        store.set("orders", "[1]").unwrap();
        store.set("orders", "[1,2]").unwrap();
        assert_eq!(store.get("orders").unwrap().as_deref(), Some("[1,2]"));
        assert!(store.root().join("orders.json").exists());

        store.remove("orders").unwrap();
        store.remove("orders").unwrap();
        assert_eq!(store.get("orders").unwrap(), None);

        fs::remove_dir_all(store.root()).unwrap();
    }

    #[test]
    fn test_keys_ignore_temp_and_foreign_files() {
        let store = temp_store();
        store.save_json(StoreKey::GalleryItems, &Vec::<u8>::new()).unwrap();
        store.save_json(StoreKey::CartItems, &Vec::<u8>::new()).unwrap();
        fs::write(store.root().join("notes.txt"), "x").unwrap();
        fs::write(store.root().join(".cartItems.abc.tmp"), "x").unwrap();

        assert_eq!(
            store.keys().unwrap(),
            vec!["cartItems".to_owned(), "gallery_items".to_owned()]
        );

        fs::remove_dir_all(store.root()).unwrap();
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let store = temp_store();
        assert!(store.set("../escape", "x").is_err());
        assert!(store.get(".hidden").is_err());
        assert!(store.get("").is_err());
        fs::remove_dir_all(store.root()).unwrap();
    }

    #[test]
    fn test_survives_reopen() {
        let store = temp_store();
        store.set("users", "[]").unwrap();
        let reopened = FileStore::open(store.root()).unwrap();
        assert_eq!(reopened.get("users").unwrap().as_deref(), Some("[]"));
        fs::remove_dir_all(store.root()).unwrap();
    }
}
