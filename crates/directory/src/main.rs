use anyhow::Result;
use tracing::info;

use client_directory::config::Config;
use client_directory::logging::init_logging;
use client_directory::ClientDirectory;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Load configuration
    let config = Config::load()?;

    // Initialize logging
    init_logging(&config.logging);

    info!("Starting Client Directory v{}", env!("CARGO_PKG_VERSION"));

    // Create database pool
    let pool = persistence::db::create_pool(&config.database).await?;

    // Provision the schema
    let directory = ClientDirectory::new(pool);
    directory.init_schema().await?;

    info!(url = %config.database.url, "Database schema provisioned");

    Ok(())
}
