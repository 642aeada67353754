//! Storage backend writing one JSON file per key

use crate::core::error::Error;
use crate::storage::KeyValueStorage;
use crate::Result;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Storage persisted as `<dir>/<key>.json` files
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Creates a FileStorage rooted at `dir`. The directory is created on
    /// first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory holding the key files
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));

        if !valid {
            return Err(Error::InvalidData(format!("Invalid storage key: {:?}", key)));
        }

        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;

        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir)?;

        // Write to a sibling file first so a crash never leaves half a value behind
        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, value)?;
        fs::rename(&tmp_path, &path)?;

        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;

        match fs::remove_file(&path) {
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
    fn test_set_get_remove() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("nested"));

        assert_eq!(storage.get("cart").unwrap(), None);

        storage.set("cart", "{\"entries\":[]}").unwrap();
        assert!(dir.path().join("nested").join("cart.json").exists());
        assert_eq!(
            storage.get("cart").unwrap(),
            Some("{\"entries\":[]}".to_string())
        );

        storage.remove("cart").unwrap();
        assert_eq!(storage.get("cart").unwrap(), None);
        storage.remove("cart").unwrap();
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());

        for key in ["", "../escape", ".hidden", "a/b", "with space"] {
            let result = storage.set(key, "x");
            assert!(matches!(result, Err(Error::InvalidData(_))), "key {:?}", key);
        }
    }

    #[test]
    fn test_clones_see_same_files() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());
        let other = storage.clone();

        storage.set("user", "{}").unwrap();
        assert_eq!(other.get("user").unwrap(), Some("{}".to_string()));
        assert_eq!(other.dir(), dir.path());
    }
}
