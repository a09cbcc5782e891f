//! metacat server library
//!
//! HTTP service that imports document metadata feeds into a SQLite catalog
//! and serves the catalog back with filtering, sorting and paging.
//!
//! # Overview
//!
//! - **ingest**: feed fetch, parsing and atomic import
//! - **db**: connection pool, migrations and the `documents` table
//! - **features**: HTTP handlers organized as command/query slices
//! - **api**: router assembly, health check and the serve loop
//! - **config**: environment-based configuration
//! - **middleware**: CORS and request tracing
//!
//! # Example
//!
//! ```no_run
//! use metacat_server::{api, config::Config, db};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load()?;
//!     let pool = db::create_pool(&config.database).await?;
//!     db::migrate(&pool).await?;
//!     api::serve(config, pool).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod db;
pub mod features;
pub mod ingest;
pub mod middleware;

pub use ingest::{IngestError, ImportStats};
