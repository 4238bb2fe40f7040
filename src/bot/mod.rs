//! Bot layer - Discord-specific interface and command handlers
//!
//! This module wires the core handlers into poise: the `/claim` slash command,
//! the gateway event handler, and the client startup.

/// Discord command implementations
pub mod commands;
/// Gateway event handlers (ready, member joins)
pub mod handlers;
/// Serenity implementations of the core platform traits
pub mod platform;

use crate::config::Settings;
use crate::core::dispatcher::Dispatcher;
use crate::core::verification::AlwaysVerified;
use crate::errors::Error;
use poise::serenity_prelude as serenity;
use std::sync::Arc;
use tracing::{error, info, instrument};

/// Shared data available to all bot commands and event handlers.
pub struct BotData {
    /// Routes events and commands to the core handlers
    pub dispatcher: Dispatcher,
}

impl BotData {
    /// Creates the bot data with the placeholder verifier.
    #[must_use]
    pub fn new(settings: Arc<Settings>) -> Self {
        Self {
            dispatcher: Dispatcher::new(settings, Box::new(AlwaysVerified)),
        }
    }
}

/// Poise context used by every command.
pub type Context<'a> = poise::Context<'a, BotData, Error>;

async fn on_error(error: poise::FrameworkError<'_, BotData, Error>) {
    match error {
        poise::FrameworkError::Setup { error, .. } => {
            panic!("Failed to start bot: {error:?}");
        }
        poise::FrameworkError::Command { error, ctx, .. } => {
            error!("Error in command `{}`: {:?}", ctx.command().name, error);
            if let Err(e) = ctx.say(format!("An error occurred: {error}")).await {
                error!("Failed to send error message: {e}");
            }
        }
        error => {
            if let Err(e) = poise::builtins::on_error(error).await {
                error!("Error while handling error: {e}");
            }
        }
    }
}

/// Gateway intents: guild and DM basics plus member joins.
#[must_use]
pub fn intents() -> serenity::GatewayIntents {
    serenity::GatewayIntents::non_privileged() | serenity::GatewayIntents::GUILD_MEMBERS
}

/// Builds the client and runs it until the connection ends.
#[instrument(skip(token, settings))]
pub async fn run_bot(token: String, settings: Arc<Settings>) -> Result<(), serenity::Error> {
    let data = BotData::new(settings);

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: vec![commands::claim()],
            event_handler: |ctx, event, framework, data| {
                Box::pin(handlers::event_handler(ctx, event, framework, data))
            },
            on_error: |error| Box::pin(on_error(error)),
            ..Default::default()
        })
        .setup(|_ctx, ready, _framework| {
            Box::pin(async move {
                // Ready is dispatched by the event handler on every session.
                info!("Framework set up for {}", ready.user.name);
                Ok(data)
            })
        })
        .build();

    info!("Setting up Serenity client for Poise framework...");
    let client = serenity::Client::builder(&token, intents())
        .framework(framework)
        .await;

    match client {
        Ok(mut c) => {
            info!("Starting bot client...");
            if let Err(why) = c.start().await {
                error!("Client error: {:?}", why);
                return Err(why);
            }
        }
        Err(e) => {
            error!("Error creating client: {:?}", e);
            return Err(e);
        }
    }
    Ok(())
}
