//! `MediaStore` adapter that writes uploads to a local directory.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::ports::{MediaStore, MediaStoreError};

/// Stores media files under a single root directory.
///
/// Stored names are prefixed with a UTC timestamp so repeated uploads of the
/// same file never collide and never overwrite each other.
#[derive(Debug, Clone)]
pub struct FsMediaStore {
    root: PathBuf,
}

impl FsMediaStore {
    /// Create a store rooted at `root`. The directory is created on first
    /// write if it does not exist.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn generated_name(original_name: &str) -> String {
        // Drop any client-supplied path components before using the name.
        let base = Path::new(original_name)
            .file_name()
            .and_then(|name| name.to_str())
            .filter(|name| !name.is_empty())
            .unwrap_or("upload");
        format!("{}_{base}", Utc::now().format("%Y%m%d%H%M%S%6f"))
    }
}

#[async_trait]
impl MediaStore for FsMediaStore {
    async fn save(&self, original_name: &str, bytes: &[u8]) -> Result<String, MediaStoreError> {
        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|err| MediaStoreError::io(err.to_string()))?;
        let stored_name = Self::generated_name(original_name);
        tokio::fs::write(self.root.join(&stored_name), bytes)
            .await
            .map_err(|err| MediaStoreError::io(err.to_string()))?;
        Ok(stored_name)
    }

    async fn remove(&self, stored_name: &str) -> Result<(), MediaStoreError> {
        tokio::fs::remove_file(self.root.join(stored_name))
            .await
            .map_err(|err| MediaStoreError::io(err.to_string()))
    }
}
