//! Verification check run before `/claim` grants a role.

use poise::serenity_prelude::{GuildId, UserId};

/// Decides whether a user may claim the configured role.
pub trait Verifier: Send + Sync {
    /// Returns `true` when `user` is verified in `guild`.
    fn is_verified(&self, user: UserId, guild: GuildId) -> bool;
}

/// Placeholder verifier that accepts everyone.
///
/// No purchase or verification source exists yet. Swap in a real [`Verifier`]
/// once one does; the claim flow does not change.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysVerified;

impl Verifier for AlwaysVerified {
    fn is_verified(&self, _user: UserId, _guild: GuildId) -> bool {
        true
    }
}
