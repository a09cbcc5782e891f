use crate::config::FeedConfig;
use crate::ingest::{fetch_feed, import_feed, FeedSource, IngestError};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// Fetch the configured feed and import it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportDocumentsCommand {
    pub source: FeedSource,
}

impl ImportDocumentsCommand {
    pub fn from_config(config: &FeedConfig) -> Self {
        Self {
            source: FeedSource::Remote {
                url: config.remote_url.clone(),
                timeout: config.timeout(),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportDocumentsResponse {
    pub imported: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum ImportDocumentsError {
    #[error(transparent)]
    Ingest(#[from] IngestError),
}

#[tracing::instrument(skip(pool))]
pub async fn handle(
    pool: SqlitePool,
    command: ImportDocumentsCommand,
) -> Result<ImportDocumentsResponse, ImportDocumentsError> {
    let feed = fetch_feed(&command.source).await.inspect_err(|e| {
        tracing::warn!(error = %e, "Feed fetch failed");
    })?;

    let stats = import_feed(&pool, &feed).await.inspect_err(|e| match e {
        IngestError::Storage(_) => tracing::error!(error = %e, "Import rolled back"),
        _ => tracing::warn!(error = %e, "Feed rejected"),
    })?;

    Ok(ImportDocumentsResponse {
        imported: stats.processed(),
    })
}
