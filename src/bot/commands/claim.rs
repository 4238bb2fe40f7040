//! `/claim` - grants the configured role to the member who runs it.

use crate::{
    core::claim::Invocation,
    errors::{Error, Result},
};
use poise::serenity_prelude::{GuildId, RoleId, User};

/// Builds the core invocation from the interaction payload.
///
/// A missing guild or member payload is an error: without the member's roles
/// the claim could not tell whether the role is already held.
pub fn invocation_from(
    author: &User,
    guild: Option<GuildId>,
    member_roles: Option<Vec<RoleId>>,
) -> Result<Invocation> {
    let Some(guild) = guild else {
        return Err(Error::Command("/claim must be used in a server".to_string()));
    };
    let Some(roles) = member_roles else {
        return Err(Error::Command(format!(
            "member data for {} is missing from the interaction",
            author.name
        )));
    };

    Ok(Invocation {
        user: author.id,
        user_name: author.name.clone(),
        guild,
        roles,
    })
}

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use super::invocation_from;
    use crate::{
        bot::{
            Context,
            platform::{PoiseResponder, SerenityPlatform},
        },
        core::dispatcher::Command,
        errors::Result,
    };

    /// Manually claim your purchased product and get a role
    #[poise::command(slash_command, guild_only)]
    pub async fn claim(ctx: Context<'_>) -> Result<()> {
        let member_roles = ctx
            .author_member()
            .await
            .map(|member| member.roles.clone());
        let invocation = invocation_from(ctx.author(), ctx.guild_id(), member_roles)?;

        let platform = SerenityPlatform::new(ctx.serenity_context());
        let responder = PoiseResponder::new(ctx);
        ctx.data()
            .dispatcher
            .handle_command(&platform, &responder, Command::Claim(invocation))
            .await;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
