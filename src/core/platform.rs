//! Platform capabilities the core handlers need.
//!
//! The core never touches serenity directly. It works through these traits,
//! which `bot::platform` implements on top of a serenity context and which the
//! tests implement with an in-memory recorder.

use crate::core::welcome::WelcomeMessage;
use crate::errors::Result;
use poise::serenity_prelude::{ChannelId, GuildId, RoleId, UserId};
use std::future::Future;

/// Outcome of delivering a message to a channel or a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// The platform accepted the message.
    Delivered,
    /// The target does not exist or is not configured.
    NotFound,
    /// The platform refused the message (permissions, closed DMs, network).
    Failed,
}

/// A guild role resolved by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleInfo {
    /// Role id
    pub id: RoleId,
    /// Display name of the role
    pub name: String,
}

/// Outbound calls into the chat platform.
pub trait Platform: Sync {
    /// Returns whether the channel is known to the bot.
    fn channel_exists(&self, channel: ChannelId) -> impl Future<Output = bool> + Send;

    /// Posts plain text to a channel.
    fn send_channel_message(
        &self,
        channel: ChannelId,
        content: &str,
    ) -> impl Future<Output = Result<()>> + Send;

    /// Sends the welcome embed to a user as a direct message.
    fn send_direct_message(
        &self,
        user: UserId,
        message: &WelcomeMessage,
    ) -> impl Future<Output = Result<()>> + Send;

    /// Looks a role up in the local guild cache without a network call.
    ///
    /// `None` means the cache cannot answer; the caller falls back to [`Platform::find_role`].
    fn cached_role(&self, guild: GuildId, role: RoleId) -> Option<RoleInfo>;

    /// Fetches a role from the platform. `Ok(None)` means the guild has no such role.
    fn find_role(
        &self,
        guild: GuildId,
        role: RoleId,
    ) -> impl Future<Output = Result<Option<RoleInfo>>> + Send;

    /// Adds a role to a guild member.
    fn add_role(
        &self,
        guild: GuildId,
        user: UserId,
        role: RoleId,
    ) -> impl Future<Output = Result<()>> + Send;
}

/// Replies to the interaction that triggered a command.
pub trait Responder: Sync {
    /// Sends the single visible response for the current invocation.
    fn respond(&self, content: &str) -> impl Future<Output = Result<()>> + Send;
}

/// Registers the bot's slash commands with the platform.
pub trait CommandSync: Sync {
    /// Synchronizes the command set, returning how many commands were registered.
    fn sync_commands(&self) -> impl Future<Output = Result<usize>> + Send;
}
