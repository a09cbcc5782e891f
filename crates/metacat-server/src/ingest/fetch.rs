//! Feed retrieval

use super::IngestError;
use reqwest::Client;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

/// Where a feed is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedSource {
    Remote { url: String, timeout: Duration },
    File(PathBuf),
}

/// Read the raw feed text. Every failure, including a non-success HTTP
/// status, is reported as [`IngestError::Transport`].
pub async fn fetch_feed(source: &FeedSource) -> Result<String, IngestError> {
    match source {
        FeedSource::Remote { url, timeout } => fetch_remote(url, *timeout).await,
        FeedSource::File(path) => {
            info!("Loading feed from local file: {}", path.display());
            tokio::fs::read_to_string(path).await.map_err(|e| {
                IngestError::Transport(format!("failed to read '{}': {}", path.display(), e))
            })
        },
    }
}

async fn fetch_remote(url: &str, timeout: Duration) -> Result<String, IngestError> {
    info!("Fetching feed from: {}", url);

    let client = Client::builder()
        .timeout(timeout)
        .user_agent(concat!("metacat/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| IngestError::Transport(e.to_string()))?;

    let text = client
        .get(url)
        .send()
        .await
        .and_then(|response| response.error_for_status())
        .map_err(|e| IngestError::Transport(e.to_string()))?
        .text()
        .await
        .map_err(|e| IngestError::Transport(e.to_string()))?;

    info!("Fetched feed: {} bytes", text.len());

    Ok(text)
}
