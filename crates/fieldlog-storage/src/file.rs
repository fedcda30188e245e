use std::path::{Path, PathBuf};

use crate::error::StorageError;
use crate::store::{BoxFuture, KeyValueStore};

/// One JSON file per key under a root directory.
///
/// Writes go to `<key>.json.tmp` and are renamed over `<key>.json`, so a
/// reader never sees a half-written record.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let well_formed = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !well_formed {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn get<'a>(&'a self, key: &'a str) -> BoxFuture<'a, Result<Option<String>, StorageError>> {
        Box::pin(async move {
            let path = self.path_for(key)?;
            match tokio::fs::read_to_string(&path).await {
                Ok(contents) => {
                    tracing::debug!(path = %path.display(), "record read");
                    Ok(Some(contents))
                }
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
                Err(e) => Err(StorageError::Read {
                    key: key.to_string(),
                    message: e.to_string(),
                }),
            }
        })
    }

    fn set<'a>(&'a self, key: &'a str, value: String) -> BoxFuture<'a, Result<(), StorageError>> {
        Box::pin(async move {
            let path = self.path_for(key)?;
            let write_err = |e: std::io::Error| StorageError::Write {
                key: key.to_string(),
                message: e.to_string(),
            };

            tokio::fs::create_dir_all(&self.root).await.map_err(write_err)?;
            let tmp_path = path.with_extension("json.tmp");
            tokio::fs::write(&tmp_path, value.as_bytes())
                .await
                .map_err(write_err)?;
            tokio::fs::rename(&tmp_path, &path).await.map_err(write_err)?;

            tracing::debug!(path = %path.display(), bytes = value.len(), "record written");
            Ok(())
        })
    }
}
