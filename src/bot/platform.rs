//! Serenity-backed implementations of the core platform traits.

use crate::bot::{BotData, Context};
use crate::core::platform::{CommandSync, Platform, Responder, RoleInfo};
use crate::core::welcome::WelcomeMessage;
use crate::errors::{Error, Result};
use poise::serenity_prelude::{
    self as serenity, ChannelId, CreateEmbed, CreateEmbedFooter, CreateMessage, GuildId, RoleId,
    UserId,
};
use tracing::debug;

/// Audit log reason attached to role grants.
const CLAIM_AUDIT_REASON: &str = "Role claimed with /claim";

/// Platform calls made through a serenity context.
pub struct SerenityPlatform<'a> {
    ctx: &'a serenity::Context,
}

impl<'a> SerenityPlatform<'a> {
    /// Wraps a serenity context.
    #[must_use]
    pub const fn new(ctx: &'a serenity::Context) -> Self {
        Self { ctx }
    }
}

/// Converts a rendered welcome message into a serenity embed.
#[must_use]
pub fn welcome_embed(message: &WelcomeMessage) -> CreateEmbed {
    CreateEmbed::new()
        .title(&message.title)
        .description(&message.description)
        .colour(message.colour)
        .footer(CreateEmbedFooter::new(&message.footer))
}

impl Platform for SerenityPlatform<'_> {
    async fn channel_exists(&self, channel: ChannelId) -> bool {
        match channel.to_channel(self.ctx).await {
            Ok(_) => true,
            Err(e) => {
                debug!("Channel {channel} lookup failed: {e}");
                false
            }
        }
    }

    async fn send_channel_message(&self, channel: ChannelId, content: &str) -> Result<()> {
        channel.say(self.ctx, content).await?;
        Ok(())
    }

    async fn send_direct_message(&self, user: UserId, message: &WelcomeMessage) -> Result<()> {
        let dm_channel = user.create_dm_channel(self.ctx).await?;
        dm_channel
            .send_message(self.ctx, CreateMessage::new().embed(welcome_embed(message)))
            .await?;
        Ok(())
    }

    fn cached_role(&self, guild: GuildId, role: RoleId) -> Option<RoleInfo> {
        let cached = self.ctx.cache.guild(guild)?;
        cached.roles.get(&role).map(|found| RoleInfo {
            id: found.id,
            name: found.name.clone(),
        })
    }

    async fn find_role(&self, guild: GuildId, role: RoleId) -> Result<Option<RoleInfo>> {
        let mut roles = guild.roles(self.ctx).await?;
        Ok(roles.remove(&role).map(|found| RoleInfo {
            id: found.id,
            name: found.name,
        }))
    }

    async fn add_role(&self, guild: GuildId, user: UserId, role: RoleId) -> Result<()> {
        self.ctx
            .http
            .add_member_role(guild, user, role, Some(CLAIM_AUDIT_REASON))
            .await
            .map_err(Error::from)
    }
}

/// Replies through the poise context of the running command.
pub struct PoiseResponder<'a> {
    ctx: Context<'a>,
}

impl<'a> PoiseResponder<'a> {
    /// Wraps the context of the running command.
    #[must_use]
    pub const fn new(ctx: Context<'a>) -> Self {
        Self { ctx }
    }
}

impl Responder for PoiseResponder<'_> {
    async fn respond(&self, content: &str) -> Result<()> {
        self.ctx.say(content).await?;
        Ok(())
    }
}

/// Registers the framework's commands globally.
pub struct GlobalRegistrar<'a> {
    ctx: &'a serenity::Context,
    commands: &'a [poise::Command<BotData, Error>],
}

impl<'a> GlobalRegistrar<'a> {
    /// Registers `commands` through `ctx`.
    #[must_use]
    pub const fn new(
        ctx: &'a serenity::Context,
        commands: &'a [poise::Command<BotData, Error>],
    ) -> Self {
        Self { ctx, commands }
    }
}

impl CommandSync for GlobalRegistrar<'_> {
    async fn sync_commands(&self) -> Result<usize> {
        poise::builtins::register_globally(self.ctx, self.commands).await?;
        Ok(self.commands.len())
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{RULES_CHANNEL, test_settings};
    use chrono::NaiveDate;

    #[test]
    fn test_welcome_embed_carries_rendered_fields() {
        let now = NaiveDate::from_ymd_opt(2025, 1, 2)
            .and_then(|day| day.and_hms_opt(3, 4, 0))
            .unwrap_or_default();
        let message = WelcomeMessage::render(&test_settings(), now);

        let embed = serde_json::to_value(welcome_embed(&message)).unwrap_or_default();

        assert_eq!(embed["title"], "Welcome to LordeFX");
        assert_eq!(embed["description"], message.description.as_str());
        assert_eq!(embed["color"].as_u64(), Some(0x00FF_A500));
        assert_eq!(embed["footer"]["text"], "LordeFX • 02 Jan 2025 03:04");
        assert!(
            embed["description"]
                .as_str()
                .is_some_and(|text| text.contains(&format!("<#{}>", RULES_CHANNEL.get())))
        );
    }
}
