//! metacat server - main entry point

use anyhow::Result;
use metacat_common::logging::{init_logging, LogConfig};
use metacat_server::{api, config::Config, db};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let log_config = LogConfig::builder()
        .log_file_prefix("metacat-server")
        .filter_directives("metacat_server=debug,tower_http=debug,sqlx=warn")
        .build()
        .with_env()?;

    init_logging(&log_config)?;

    info!("Starting metacat server");

    let config = Config::load()?;
    info!(
        "Configuration loaded - server will bind to {}:{}",
        config.server.host, config.server.port
    );

    let pool = db::create_pool(&config.database).await?;
    db::migrate(&pool).await?;

    api::serve(config, pool).await
}
