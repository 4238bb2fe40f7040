//! Unified error type for the bot.
//!
//! Only startup errors ever reach `main`. Handler code converts these into
//! logged outcome values at the call site.

use thiserror::Error;

/// Every error the bot can produce.
#[derive(Debug, Error)]
pub enum Error {
    /// A configuration value is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// An environment variable could not be read.
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    /// A command could not be carried out.
    #[error("Command execution error: {0}")]
    Command(String),

    /// Error bubbled up from serenity or poise.
    #[error("Serenity/Poise framework error: {0}")]
    #[allow(clippy::enum_variant_names)]
    FrameworkError(Box<poise::serenity_prelude::Error>),
}

impl From<poise::serenity_prelude::Error> for Error {
    fn from(value: poise::serenity_prelude::Error) -> Self {
        Self::FrameworkError(Box::new(value))
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
