use dotenvy::dotenv;
use school_buddy::{
    bot, config,
    errors::{Error, Result},
};
use std::{env, sync::Arc};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; env vars can also be set externally
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Load the application configuration
    let app_config = config::load_app_configuration()
        .inspect_err(|e| error!("Critical error loading application configuration: {}", e))?;

    // 4. Build the school snapshot from fixtures or the generator
    let school = config::seed::load_school(&app_config.seed)
        .inspect_err(|e| error!("Failed to load school data: {}", e))?;

    // Generated schools come with known demo logins
    let demo_accounts = app_config.seed.fixtures.is_none();

    // 5. Run the bot
    // DISCORD_BOT_TOKEN is read here, directly before use, not stored in AppConfig
    let token = env::var("DISCORD_BOT_TOKEN")
        .inspect_err(|e| error!("DISCORD_BOT_TOKEN not found: {}", e))
        .map_err(Error::EnvVar)?;

    bot::run_bot(token, Arc::new(school), app_config.display, demo_accounts).await
}
