//! Settings loaded from environment variables.
//!
//! Every id is optional. A missing or malformed value is logged and leaves the
//! matching feature without a target instead of stopping the bot. Ids are
//! sanitized by dropping every non-digit character before parsing, so values
//! pasted with spaces, quotes or separators still load.

use crate::errors::{Error, Result};
use poise::serenity_prelude::{ChannelId, RoleId};
use tracing::{debug, error, warn};

/// Environment key for the status log channel.
pub const STATUS_CHANNEL_KEY: &str = "STATUS_CHANNEL_ID";
/// Environment key for the role granted by `/claim`.
pub const ROLE_KEY: &str = "ROLE_ID";
/// Environment key for the rules channel mentioned in the welcome message.
pub const RULES_CHANNEL_KEY: &str = "RULES_CHANNEL_ID";
/// Environment key for the tickets channel mentioned in the welcome message.
pub const TICKETS_CHANNEL_KEY: &str = "TICKETS_CHANNEL_ID";
/// Environment key for the role-claim channel.
pub const ROLE_CLAIM_KEY: &str = "ROLE_CLAIM_ID";
/// Environment key toggling the startup broadcast.
pub const ANNOUNCE_STARTUP_KEY: &str = "ANNOUNCE_STARTUP";
/// Environment key for the bot token.
pub const TOKEN_KEY: &str = "DISCORD_TOKEN";

/// Immutable bot settings, built once at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Channel that receives status log lines.
    pub status_channel: Option<ChannelId>,
    /// Role granted by `/claim`.
    pub claim_role: Option<RoleId>,
    /// Rules channel mentioned in the welcome message.
    pub rules_channel: Option<ChannelId>,
    /// Tickets channel mentioned in the welcome message.
    pub tickets_channel: Option<ChannelId>,
    /// Reserved for a role-claim help channel. Loaded, but no handler reads it yet.
    pub role_claim_channel: Option<ChannelId>,
    /// Post a message to the status channel once the bot is ready.
    pub announce_startup: bool,
}

impl Settings {
    /// Loads settings from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads settings through `lookup`, which returns the raw value for a key.
    ///
    /// Never fails: each bad or missing id is reported with a warning and left unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let id = |key: &str| read_id(key, lookup(key));

        let settings = Self {
            status_channel: id(STATUS_CHANNEL_KEY).map(ChannelId::new),
            claim_role: id(ROLE_KEY).map(RoleId::new),
            rules_channel: id(RULES_CHANNEL_KEY).map(ChannelId::new),
            tickets_channel: id(TICKETS_CHANNEL_KEY).map(ChannelId::new),
            role_claim_channel: id(ROLE_CLAIM_KEY).map(ChannelId::new),
            announce_startup: lookup(ANNOUNCE_STARTUP_KEY)
                .as_deref()
                .is_some_and(parse_flag),
        };
        debug!(?settings, "Settings loaded");
        settings
    }
}

fn read_id(key: &str, raw: Option<String>) -> Option<u64> {
    let Some(raw) = raw else {
        warn!("{key} is not set in the environment.");
        return None;
    };
    parse_id(&raw)
        .inspect_err(|e| warn!("{key} is not a valid id: {e}"))
        .ok()
}

/// Parses a Discord id, ignoring every character that is not an ASCII digit.
///
/// `"123-abc-456"` parses as `123456`. An empty remainder, a value that does
/// not fit in `u64`, or zero is rejected.
pub fn parse_id(raw: &str) -> Result<u64> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return Err(Error::Config(format!("{raw:?} contains no digits")));
    }
    match digits.parse::<u64>() {
        Ok(0) => Err(Error::Config(format!("{raw:?} is zero"))),
        Ok(id) => Ok(id),
        Err(e) => Err(Error::Config(format!("{raw:?} is not a valid integer: {e}"))),
    }
}

fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Reads the bot token from `DISCORD_TOKEN`.
///
/// The token is loaded right before the client is built and never kept in [`Settings`].
pub fn load_token() -> Result<String> {
    let raw = std::env::var(TOKEN_KEY)
        .inspect_err(|e| error!("{TOKEN_KEY} not found: {e}"))?;
    validate_token(raw)
}

fn validate_token(raw: String) -> Result<String> {
    let token = raw.trim();
    if token.is_empty() {
        error!("{TOKEN_KEY} is empty");
        return Err(Error::Config(format!("{TOKEN_KEY} is empty")));
    }
    Ok(token.to_string())
}
