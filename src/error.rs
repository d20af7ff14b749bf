use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type AtlasResult<T> = std::result::Result<T, AtlasError>;

#[derive(Debug, Error)]
pub enum AtlasError {
    /// The destination could not be created or written.
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to serialize atlas manifest: {0}")]
    Manifest(#[from] serde_json::Error),
}

impl AtlasError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}
