//! Serves the local feed file that stands in for the remote source.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum GetFeedFileError {
    #[error("Feed file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Failed to read feed file: {0}")]
    Io(#[from] std::io::Error),
}

#[tracing::instrument]
pub async fn handle(path: &Path) -> Result<Vec<u8>, GetFeedFileError> {
    match tokio::fs::read(path).await {
        Ok(bytes) => Ok(bytes),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            Err(GetFeedFileError::NotFound(path.to_path_buf()))
        },
        Err(e) => Err(e.into()),
    }
}
