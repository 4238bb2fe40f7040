//! Forwards status lines to the configured status channel.

use crate::config::Settings;
use crate::core::platform::{Delivery, Platform};
use tracing::{error, info, warn};

/// Posts `message` to the status channel.
///
/// Fire-and-forget: failures are logged and reported through the returned
/// [`Delivery`], which callers are free to ignore.
pub async fn forward<P: Platform>(platform: &P, settings: &Settings, message: &str) -> Delivery {
    let Some(channel) = settings.status_channel else {
        warn!("Status channel is not configured; dropping log message: {message}");
        return Delivery::NotFound;
    };

    if !platform.channel_exists(channel).await {
        warn!("Channel with ID {channel} not found.");
        return Delivery::NotFound;
    }

    match platform.send_channel_message(channel, message).await {
        Ok(()) => {
            info!("Log message sent to channel {channel}: {message}");
            Delivery::Delivered
        }
        Err(e) => {
            error!("Failed to send log message: {e}");
            Delivery::Failed
        }
    }
}
