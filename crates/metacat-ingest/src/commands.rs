//! Offline feed commands

use anyhow::{Context, Result};
use metacat_server::config::{
    DatabaseConfig, DEFAULT_DATABASE_CONNECT_TIMEOUT_SECS, DEFAULT_DATABASE_MAX_CONNECTIONS,
};
use metacat_server::db;
use metacat_server::ingest::{fetch_feed, import_documents, parse_feed, FeedSource, ImportStats};
use std::path::Path;
use tracing::info;

async fn read_feed(path: &Path) -> Result<String> {
    let feed = fetch_feed(&FeedSource::File(path.to_path_buf())).await?;
    Ok(feed)
}

/// Parse a local feed; returns the number of valid records
pub async fn check(path: &Path) -> Result<usize> {
    let feed = read_feed(path).await?;
    let records = parse_feed(&feed).with_context(|| format!("{} is invalid", path.display()))?;
    info!(records = records.len(), "Feed is valid");
    Ok(records.len())
}

/// Parse a local feed and import it into the database at `database_url`
pub async fn import(path: &Path, database_url: &str) -> Result<ImportStats> {
    let feed = read_feed(path).await?;
    let records = parse_feed(&feed).with_context(|| format!("{} is invalid", path.display()))?;

    let pool = db::create_pool(&DatabaseConfig {
        url: database_url.to_string(),
        max_connections: DEFAULT_DATABASE_MAX_CONNECTIONS,
        connect_timeout_secs: DEFAULT_DATABASE_CONNECT_TIMEOUT_SECS,
    })
    .await?;
    db::migrate(&pool).await?;

    let stats = import_documents(&pool, &records).await?;
    pool.close().await;

    Ok(stats)
}
