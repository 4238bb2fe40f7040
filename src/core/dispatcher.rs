//! Routes platform events and invoked commands to their handlers.

use crate::config::Settings;
use crate::core::claim::{self, ClaimOutcome, Invocation};
use crate::core::platform::{CommandSync, Delivery, Platform, Responder};
use crate::core::verification::Verifier;
use crate::core::{status_log, welcome};
use poise::serenity_prelude::UserId;
use std::sync::Arc;
use tracing::{error, info};

/// Status line posted on startup when `ANNOUNCE_STARTUP` is enabled.
pub const STARTUP_ANNOUNCEMENT: &str = "Bot has started and is now online.";

/// Events pushed by the platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The gateway session is ready.
    Ready {
        /// Name the bot is logged in as
        bot_name: String,
    },
    /// A member joined a guild the bot is in.
    MemberJoined {
        /// The new member
        user: UserId,
        /// The new member's name, for logs
        user_name: String,
    },
}

/// Commands invoked by members.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `/claim`
    Claim(Invocation),
}

/// What handling an [`Event`] produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    /// Commands were synced (or syncing failed and was logged).
    Ready {
        /// Number of registered commands, `None` when syncing failed
        synced: Option<usize>,
        /// Startup broadcast result, `None` when disabled
        announcement: Option<Delivery>,
    },
    /// A welcome message was attempted.
    Welcomed(Delivery),
}

/// Process-wide handler state: the settings and the claim verifier.
pub struct Dispatcher {
    settings: Arc<Settings>,
    verifier: Box<dyn Verifier>,
}

impl Dispatcher {
    /// Creates a dispatcher over immutable `settings`.
    #[must_use]
    pub fn new(settings: Arc<Settings>, verifier: Box<dyn Verifier>) -> Self {
        Self { settings, verifier }
    }

    /// Handles a platform event.
    pub async fn handle_event<P, S>(&self, platform: &P, registrar: &S, event: Event) -> EventOutcome
    where
        P: Platform,
        S: CommandSync,
    {
        match event {
            Event::Ready { bot_name } => self.on_ready(platform, registrar, &bot_name).await,
            Event::MemberJoined { user, user_name } => EventOutcome::Welcomed(
                welcome::greet(platform, &self.settings, user, &user_name).await,
            ),
        }
    }

    /// Handles an invoked command.
    pub async fn handle_command<P, R>(
        &self,
        platform: &P,
        responder: &R,
        command: Command,
    ) -> ClaimOutcome
    where
        P: Platform,
        R: Responder,
    {
        match command {
            Command::Claim(invocation) => {
                claim::claim(
                    platform,
                    responder,
                    self.verifier.as_ref(),
                    &self.settings,
                    &invocation,
                )
                .await
            }
        }
    }

    async fn on_ready<P, S>(&self, platform: &P, registrar: &S, bot_name: &str) -> EventOutcome
    where
        P: Platform,
        S: CommandSync,
    {
        let synced = match registrar.sync_commands().await {
            Ok(count) => {
                info!("Logged in as {bot_name} and slash commands synced.");
                Some(count)
            }
            Err(e) => {
                error!("Logged in as {bot_name} but failed to sync slash commands: {e}");
                None
            }
        };

        let announcement = if self.settings.announce_startup {
            Some(status_log::forward(platform, &self.settings, STARTUP_ANNOUNCEMENT).await)
        } else {
            None
        };

        EventOutcome::Ready {
            synced,
            announcement,
        }
    }
}
