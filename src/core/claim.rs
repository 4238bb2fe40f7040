//! The `/claim` flow: grant the configured role to the invoking member.
//!
//! Every run ends in exactly one response to the member, followed by exactly
//! one status log line carrying the same text.

use crate::config::Settings;
use crate::core::platform::{Platform, Responder, RoleInfo};
use crate::core::status_log;
use crate::core::verification::Verifier;
use poise::serenity_prelude::{GuildId, RoleId, UserId};
use std::fmt;
use tracing::{error, info, warn};

/// Who invoked `/claim` and where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Invoking user
    pub user: UserId,
    /// Invoking user's name, for logs
    pub user_name: String,
    /// Guild the command ran in
    pub guild: GuildId,
    /// Roles the member held when the command ran
    pub roles: Vec<RoleId>,
}

/// How a `/claim` run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClaimOutcome {
    /// The role was added to the member.
    Granted {
        /// Name of the granted role
        role: String,
    },
    /// The member already had the role; nothing changed.
    AlreadyHeld,
    /// The configured role is unset or missing from the guild.
    RoleNotFound,
    /// The platform refused to add the role.
    GrantFailed,
    /// The verifier rejected the member.
    NotVerified,
}

impl fmt::Display for ClaimOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Granted { role } => {
                write!(f, "Role `{role}` has been successfully assigned to you!")
            }
            Self::AlreadyHeld => f.write_str("You already have the role!"),
            Self::RoleNotFound => f.write_str("Role not found."),
            Self::GrantFailed => {
                f.write_str("Could not assign the role. Please contact a moderator.")
            }
            Self::NotVerified => f.write_str("You are not verified for this claim."),
        }
    }
}

/// Runs `/claim` for `invocation`, replies to the member, then logs the reply.
pub async fn claim<P, R, V>(
    platform: &P,
    responder: &R,
    verifier: &V,
    settings: &Settings,
    invocation: &Invocation,
) -> ClaimOutcome
where
    P: Platform,
    R: Responder,
    V: Verifier + ?Sized,
{
    let outcome = if verifier.is_verified(invocation.user, invocation.guild) {
        grant(platform, settings, invocation).await
    } else {
        ClaimOutcome::NotVerified
    };

    let message = outcome.to_string();
    if let Err(e) = responder.respond(&message).await {
        error!("Failed to respond to {}: {e}", invocation.user_name);
    }
    status_log::forward(platform, settings, &message).await;

    outcome
}

async fn grant<P: Platform>(
    platform: &P,
    settings: &Settings,
    invocation: &Invocation,
) -> ClaimOutcome {
    let Some(role) = resolve_role(platform, settings, invocation.guild).await else {
        return ClaimOutcome::RoleNotFound;
    };

    if invocation.roles.contains(&role.id) {
        return ClaimOutcome::AlreadyHeld;
    }

    match platform
        .add_role(invocation.guild, invocation.user, role.id)
        .await
    {
        Ok(()) => {
            info!("Granted role {} to {}", role.name, invocation.user_name);
            ClaimOutcome::Granted { role: role.name }
        }
        Err(e) => {
            error!(
                "Failed to grant role {} to {}: {e}",
                role.name, invocation.user_name
            );
            ClaimOutcome::GrantFailed
        }
    }
}

async fn resolve_role<P: Platform>(
    platform: &P,
    settings: &Settings,
    guild: GuildId,
) -> Option<RoleInfo> {
    let Some(role) = settings.claim_role else {
        warn!("Claim role is not configured");
        return None;
    };

    if let Some(cached) = platform.cached_role(guild, role) {
        return Some(cached);
    }

    match platform.find_role(guild, role).await {
        Ok(found) => found,
        Err(e) => {
            error!("Failed to look up role {role} in guild {guild}: {e}");
            None
        }
    }
}
