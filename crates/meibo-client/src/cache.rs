//! Local JSON cache
//!
//! One pretty-printed JSON file per collection under the cache directory.
//! Stands in for the browser localStorage the original front end fell
//! back to.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ClientError;

/// File-backed cache keyed by collection name.
#[derive(Debug, Clone)]
pub struct LocalCache {
    dir: PathBuf,
}

impl LocalCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// Read the cached copy of a collection, `None` when never written.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, ClientError> {
        let path = self.path_for(key);
        let bytes = match std::fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(ClientError::cache(&path, e)),
        };
        let value = serde_json::from_slice(&bytes).map_err(|e| ClientError::cache(&path, e))?;
        Ok(Some(value))
    }

    /// Write a collection to the cache, creating the directory on first use.
    pub fn store<T: Serialize>(&self, key: &str, value: &T) -> Result<(), ClientError> {
        let path = self.path_for(key);
        std::fs::create_dir_all(&self.dir).map_err(|e| ClientError::cache(&self.dir, e))?;
        let bytes = serde_json::to_vec_pretty(value).map_err(|e| ClientError::cache(&path, e))?;
        std::fs::write(&path, bytes).map_err(|e| ClientError::cache(&path, e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let cache = LocalCache::new(dir.path());

        let loaded: Option<Vec<String>> = cache.load("events").unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_store_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let cache = LocalCache::new(dir.path().join("nested"));

        cache
            .store("profiles", &vec!["a".to_string(), "b".to_string()])
            .unwrap();
        let loaded: Option<Vec<String>> = cache.load("profiles").unwrap();
        assert_eq!(loaded, Some(vec!["a".to_string(), "b".to_string()]));
    }

    #[test]
    fn test_corrupt_cache_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let cache = LocalCache::new(dir.path());
        std::fs::write(dir.path().join("users.json"), b"not json").unwrap();

        let result: Result<Option<Vec<String>>, _> = cache.load("users");
        assert!(result.is_err());
    }
}
