//! Feature modules implementing the metacat API
//!
//! Each feature is organized as a vertical slice:
//! - `commands/` - Write operations (import)
//! - `queries/` - Read operations (list, feed file)
//! - `routes.rs` - HTTP route definitions and error mapping
//!
//! # Features
//!
//! - **documents**: Feed import and the document catalog

pub mod documents;

use crate::config::FeedConfig;
use axum::Router;
use sqlx::SqlitePool;

/// Shared state for all feature routes
#[derive(Clone)]
pub struct FeatureState {
    /// SQLite connection pool for database operations
    pub db: SqlitePool,
    /// Where imports fetch from and which file the simulated remote serves
    pub feed: FeedConfig,
}

/// Creates the API router with all feature routes mounted.
/// Mounted by the caller under `/api`.
pub fn router(state: FeatureState) -> Router<()> {
    Router::new().merge(documents::documents_routes().with_state(state))
}
