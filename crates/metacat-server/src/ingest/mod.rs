//! Document feed ingestion
//!
//! # Architecture
//!
//! - **parser**: feed markup into validated [`DocumentRecord`]s
//! - **fetch**: retrieval of raw feed text from a URL or a local file
//! - **import**: atomic upsert of a parsed batch into the `documents` table
//!
//! The pipeline is fetch, then parse, then import. Nothing is written
//! unless every record of the feed is valid.
//!
//! [`DocumentRecord`]: metacat_common::DocumentRecord

pub mod fetch;
pub mod import;
pub mod parser;

use metacat_common::ValidationError;
use thiserror::Error;

pub use fetch::{fetch_feed, FeedSource};
pub use import::{import_documents, import_feed, ImportStats};
pub use parser::{parse_document, parse_feed, RawDocument};

/// Errors raised while ingesting a feed
#[derive(Error, Debug)]
pub enum IngestError {
    /// Feed is not well-formed markup
    #[error("malformed feed: {0}")]
    MalformedInput(String),

    /// A record failed field validation; `ordinal` is 1-based
    #[error("error in record #{ordinal}: {source}")]
    Validation {
        ordinal: usize,
        #[source]
        source: ValidationError,
    },

    /// Feed could not be retrieved
    #[error("failed to fetch feed: {0}")]
    Transport(String),

    /// Database failure during import; the batch was rolled back
    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),
}

impl IngestError {
    /// Ordinal of the offending record, for validation failures
    pub fn ordinal(&self) -> Option<usize> {
        match self {
            IngestError::Validation { ordinal, .. } => Some(*ordinal),
            _ => None,
        }
    }

    /// Name of the offending field, for validation failures
    pub fn field(&self) -> Option<&'static str> {
        match self {
            IngestError::Validation { source, .. } => Some(source.field()),
            _ => None,
        }
    }
}
