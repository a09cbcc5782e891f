//! Atomic import of parsed documents

use super::{parse_feed, IngestError};
use crate::db::documents::{find_document_id_by_url, insert_document, update_document};
use metacat_common::DocumentRecord;
use serde::Serialize;
use sqlx::SqlitePool;
use tracing::{debug, info};

/// Outcome of a successful import
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportStats {
    pub inserted: usize,
    pub updated: usize,
}

impl ImportStats {
    /// Records written, new and existing alike
    pub fn processed(&self) -> usize {
        self.inserted + self.updated
    }
}

/// Upsert `records` keyed on `url`, all in one transaction.
///
/// A record whose url is already stored overwrites that row; any other
/// record becomes a new row. On error the transaction is dropped and the
/// table is left exactly as it was.
pub async fn import_documents(
    pool: &SqlitePool,
    records: &[DocumentRecord],
) -> Result<ImportStats, IngestError> {
    info!("Importing {} documents", records.len());

    let mut tx = pool.begin().await?;
    let mut stats = ImportStats::default();

    for record in records {
        match find_document_id_by_url(&mut *tx, &record.url).await? {
            Some(id) => {
                update_document(&mut *tx, id, record).await?;
                debug!(id, url = %record.url, "Updated document");
                stats.updated += 1;
            },
            None => {
                let id = insert_document(&mut *tx, record).await?;
                debug!(id, url = %record.url, "Inserted document");
                stats.inserted += 1;
            },
        }
    }

    tx.commit().await?;

    info!(
        inserted = stats.inserted,
        updated = stats.updated,
        "Import committed"
    );

    Ok(stats)
}

/// Parse `feed` and import it. Nothing is written if parsing fails.
pub async fn import_feed(pool: &SqlitePool, feed: &str) -> Result<ImportStats, IngestError> {
    let records = parse_feed(feed)?;
    import_documents(pool, &records).await
}
