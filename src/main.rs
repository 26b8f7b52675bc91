use admindash::config::Config;
use admindash::constants::ERROR_NO_API_TOKEN;
use admindash::logger::Logger;
use admindash::storage::{LocalStorage, SqliteTokenStore, TokenStore};
use admindash::ui;
use anyhow::{Context, Result};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    if Config::find_config_file()?.is_none() {
        let path = Config::get_default_config_path()?;
        Config::generate_default_config(&path)?;
    }
    let config = Config::load()?;

    let logger = Logger::from_config(config.logging.enabled)?;
    logger.install()?;
    log::info!("Starting admindash against {}", config.api.base_url);

    let database_path = config.database_path()?;
    let storage = Arc::new(
        LocalStorage::open(&database_path)
            .await
            .with_context(|| format!("Failed to open session database {}", database_path.display()))?,
    );
    let tokens = SqliteTokenStore::new(storage, config.auth.token_key.clone());

    // Seed the stored token from the environment when provided
    if let Ok(token) = std::env::var(&config.auth.token_env) {
        if !token.trim().is_empty() {
            tokens.store(token.trim()).await?;
            log::info!("Stored bearer token from {}", config.auth.token_env);
        }
    }

    if tokens.token().await?.is_none() {
        eprintln!("{}", ERROR_NO_API_TOKEN);
        eprintln!("\n💡 To use this app:");
        eprintln!("1. Sign in to the admin backend and copy your access token");
        eprintln!("2. Set it as environment variable: export {}=your_token_here", config.auth.token_env);
        eprintln!("3. Run the app again; the token is kept in {}", database_path.display());
        return Ok(());
    }

    ui::run_app(config, logger, Arc::new(tokens)).await?;

    Ok(())
}
