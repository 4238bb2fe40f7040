//! Welcome direct message sent to members when they join the guild.

use crate::config::Settings;
use crate::core::platform::{Delivery, Platform};
use chrono::{Local, NaiveDateTime};
use poise::serenity_prelude::{ChannelId, Mentionable, UserId};
use tracing::{info, warn};

/// Brand shown in the title and footer.
pub const BRAND: &str = "LordeFX";
/// Accent colour of the welcome embed (orange).
pub const WELCOME_COLOUR: u32 = 0x00FF_A500;
/// Footer timestamp layout, e.g. `07 Mar 2025 09:05`.
pub const FOOTER_TIME_FORMAT: &str = "%d %b %Y %H:%M";

/// The rendered welcome embed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WelcomeMessage {
    /// Embed title
    pub title: String,
    /// Embed body
    pub description: String,
    /// Accent colour as `0xRRGGBB`
    pub colour: u32,
    /// Footer text, brand and timestamp
    pub footer: String,
}

impl WelcomeMessage {
    /// Builds the welcome message for the configured channels at local time `now`.
    #[must_use]
    pub fn render(settings: &Settings, now: NaiveDateTime) -> Self {
        let rules = channel_mention(settings.rules_channel);
        let tickets = channel_mention(settings.tickets_channel);

        Self {
            title: format!("Welcome to {BRAND}"),
            description: format!(
                "Before doing anything, please read the {rules}.\n\
                 To view all the maps, prices and purchase, please open Ticket {tickets}.\n\
                 Firstly, you need to verify and obtain the role .\n\
                 Hope you enjoy your stay!"
            ),
            colour: WELCOME_COLOUR,
            footer: format!("{BRAND} • {}", now.format(FOOTER_TIME_FORMAT)),
        }
    }
}

// An unset id still renders as a channel mention; Discord shows it as an unknown channel.
fn channel_mention(channel: Option<ChannelId>) -> String {
    channel.map_or_else(|| "<#unset>".to_string(), |id| id.mention().to_string())
}

/// Sends the welcome message to a newly joined member.
///
/// Makes exactly one delivery attempt. A refused DM is logged as a warning and
/// reported as [`Delivery::Failed`]; it never reaches the caller as an error.
pub async fn greet<P: Platform>(
    platform: &P,
    settings: &Settings,
    user: UserId,
    user_name: &str,
) -> Delivery {
    let message = WelcomeMessage::render(settings, Local::now().naive_local());

    match platform.send_direct_message(user, &message).await {
        Ok(()) => {
            info!("Welcome embed message sent to {user_name} ({user})");
            Delivery::Delivered
        }
        Err(e) => {
            warn!("Failed to send welcome embed message to {user_name} ({user}): {e}");
            Delivery::Failed
        }
    }
}
