use dotenvy::dotenv;
use lordefx_bot::{bot, config, errors::Result};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file, env vars can also be set externally
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Load settings; bad ids are logged and left unset
    let settings = Arc::new(config::Settings::from_env());
    info!("Successfully processed application configuration.");

    // 4. Run the bot. The token is loaded here, directly before use, not stored in Settings
    let token = config::load_token()?;
    bot::run_bot(token, settings).await?;

    Ok(())
}
