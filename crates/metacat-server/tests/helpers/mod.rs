//! Test helpers for metacat server integration tests
//!
//! - In-memory SQLite pools with migrations applied
//! - Router setup over such a pool
//! - Feed fixtures

#![allow(dead_code)]

pub mod fixtures;

use axum::Router;
use metacat_server::{
    api::{create_router, AppState},
    config::Config,
    db::MIGRATOR,
};
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

pub use fixtures::*;

/// Fresh in-memory database with the schema applied.
///
/// One connection that never expires, since each in-memory connection is
/// its own database.
pub async fn setup_test_db() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");

    MIGRATOR
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Router over `pool` with default configuration
pub async fn setup_test_app(pool: SqlitePool) -> Router {
    setup_test_app_with_config(pool, Config::default()).await
}

pub async fn setup_test_app_with_config(pool: SqlitePool, config: Config) -> Router {
    create_router(AppState { db: pool }, &config)
}

/// Number of rows in `documents`
pub async fn document_count(pool: &SqlitePool) -> i64 {
    metacat_server::db::count_documents(pool)
        .await
        .expect("Failed to count documents")
}
