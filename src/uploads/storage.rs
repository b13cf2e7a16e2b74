//! Upload directory management.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::uploads::filename::{is_servable_name, sanitize_filename};

/// URL prefix under which stored files are served.
pub const PUBLIC_PREFIX: &str = "/uploads";

/// Errors that can occur while storing an upload.
#[derive(Debug, Error)]
pub enum UploadError {
    /// The client filename sanitized to nothing.
    #[error("invalid image filename '{0}'")]
    InvalidFilename(String),

    /// Writing to the upload directory failed.
    #[error("failed to write upload: {0}")]
    Io(#[from] io::Error),
}

/// The directory uploaded images are written to and served from.
#[derive(Debug, Clone)]
pub struct UploadDir {
    root: PathBuf,
}

impl UploadDir {
    /// Use `root` as the upload directory, creating it if absent.
    pub fn create(root: impl Into<PathBuf>) -> io::Result<Self> {
        let root = root.into();
        std::fs::create_dir_all(&root)?;
        tracing::info!(path = %root.display(), "Upload directory ready");
        Ok(Self { root })
    }

    /// The directory on disk.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Write `bytes` under the sanitized form of `filename` and return the
    /// public path. An existing file with the same sanitized name is overwritten.
    pub async fn save(&self, filename: &str, bytes: &[u8]) -> Result<String, UploadError> {
        let name = sanitize_filename(filename)
            .ok_or_else(|| UploadError::InvalidFilename(filename.to_string()))?;

        tokio::fs::write(self.root.join(&name), bytes).await?;
        tracing::debug!(file = %name, size = bytes.len(), "Stored upload");

        Ok(format!("{PUBLIC_PREFIX}/{name}"))
    }

    /// Resolve a request name to an existing file inside the directory.
    pub fn resolve(&self, name: &str) -> Option<PathBuf> {
        if !is_servable_name(name) {
            return None;
        }
        let path = self.root.join(name);
        path.is_file().then_some(path)
    }
}
