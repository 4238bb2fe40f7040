//! Shared test utilities.
//!
//! [`RecordingPlatform`] stands in for Discord: it implements every platform
//! trait, records each outbound call in order, and can be told which channels
//! and roles exist and which calls should fail.

#![allow(clippy::unwrap_used)]

use crate::{
    config::Settings,
    core::{
        claim::Invocation,
        platform::{CommandSync, Platform, Responder, RoleInfo},
        verification::Verifier,
        welcome::WelcomeMessage,
    },
    errors::{Error, Result},
};
use poise::serenity_prelude::{ChannelId, GuildId, RoleId, UserId};
use std::collections::HashMap;
use std::sync::Mutex;

/// Status log channel used by [`test_settings`].
pub const STATUS_CHANNEL: ChannelId = ChannelId::new(1001);
/// Rules channel used by [`test_settings`].
pub const RULES_CHANNEL: ChannelId = ChannelId::new(1002);
/// Tickets channel used by [`test_settings`].
pub const TICKETS_CHANNEL: ChannelId = ChannelId::new(1003);
/// Claim role used by [`test_settings`].
pub const CLAIM_ROLE: RoleId = RoleId::new(2001);
/// Guild used by [`test_invocation`].
pub const GUILD: GuildId = GuildId::new(3001);

/// One outbound platform call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ChannelMessage(ChannelId, String),
    DirectMessage(UserId, WelcomeMessage),
    FindRole(GuildId, RoleId),
    AddRole(GuildId, UserId, RoleId),
    Respond(String),
    SyncCommands,
}

/// In-memory platform that records calls.
#[derive(Debug, Default)]
pub struct RecordingPlatform {
    channels: Vec<ChannelId>,
    roles: HashMap<RoleId, String>,
    cached_roles: HashMap<RoleId, String>,
    fail_channel_messages: bool,
    fail_direct_messages: bool,
    fail_role_lookups: bool,
    fail_role_grants: bool,
    fail_responses: bool,
    fail_command_sync: bool,
    calls: Mutex<Vec<Call>>,
}

impl RecordingPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_channel(mut self, channel: ChannelId) -> Self {
        self.channels.push(channel);
        self
    }

    pub fn with_role(mut self, role: RoleId, name: &str) -> Self {
        self.roles.insert(role, name.to_string());
        self
    }

    /// Makes `role` answerable from the guild cache, skipping the fetch.
    pub fn with_cached_role(mut self, role: RoleId, name: &str) -> Self {
        self.cached_roles.insert(role, name.to_string());
        self
    }

    pub fn failing_channel_messages(mut self) -> Self {
        self.fail_channel_messages = true;
        self
    }

    pub fn failing_direct_messages(mut self) -> Self {
        self.fail_direct_messages = true;
        self
    }

    pub fn failing_role_lookups(mut self) -> Self {
        self.fail_role_lookups = true;
        self
    }

    pub fn failing_role_grants(mut self) -> Self {
        self.fail_role_grants = true;
        self
    }

    pub fn failing_responses(mut self) -> Self {
        self.fail_responses = true;
        self
    }

    pub fn failing_command_sync(mut self) -> Self {
        self.fail_command_sync = true;
        self
    }

    /// Every recorded call, oldest first.
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// Text of every interaction response.
    pub fn responses(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Respond(text) => Some(text),
                _ => None,
            })
            .collect()
    }

    /// Text of every channel message.
    pub fn status_messages(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::ChannelMessage(_, text) => Some(text),
                _ => None,
            })
            .collect()
    }

    /// Number of role grants attempted.
    pub fn role_grants(&self) -> usize {
        self.calls()
            .iter()
            .filter(|call| matches!(call, Call::AddRole(..)))
            .count()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn outcome(failing: bool, what: &str) -> Result<()> {
        if failing {
            Err(Error::Command(format!("{what} rejected by test platform")))
        } else {
            Ok(())
        }
    }
}

impl Platform for RecordingPlatform {
    async fn channel_exists(&self, channel: ChannelId) -> bool {
        self.channels.contains(&channel)
    }

    async fn send_channel_message(&self, channel: ChannelId, content: &str) -> Result<()> {
        self.record(Call::ChannelMessage(channel, content.to_string()));
        Self::outcome(self.fail_channel_messages, "channel message")
    }

    async fn send_direct_message(&self, user: UserId, message: &WelcomeMessage) -> Result<()> {
        self.record(Call::DirectMessage(user, message.clone()));
        Self::outcome(self.fail_direct_messages, "direct message")
    }

    fn cached_role(&self, _guild: GuildId, role: RoleId) -> Option<RoleInfo> {
        self.cached_roles.get(&role).map(|name| RoleInfo {
            id: role,
            name: name.clone(),
        })
    }

    async fn find_role(&self, guild: GuildId, role: RoleId) -> Result<Option<RoleInfo>> {
        self.record(Call::FindRole(guild, role));
        Self::outcome(self.fail_role_lookups, "role lookup")?;
        Ok(self.roles.get(&role).map(|name| RoleInfo {
            id: role,
            name: name.clone(),
        }))
    }

    async fn add_role(&self, guild: GuildId, user: UserId, role: RoleId) -> Result<()> {
        self.record(Call::AddRole(guild, user, role));
        Self::outcome(self.fail_role_grants, "role grant")
    }
}

impl Responder for RecordingPlatform {
    async fn respond(&self, content: &str) -> Result<()> {
        self.record(Call::Respond(content.to_string()));
        Self::outcome(self.fail_responses, "response")
    }
}

impl CommandSync for RecordingPlatform {
    async fn sync_commands(&self) -> Result<usize> {
        self.record(Call::SyncCommands);
        Self::outcome(self.fail_command_sync, "command sync")?;
        Ok(1)
    }
}

/// Verifier that rejects everyone.
pub struct RejectingVerifier;

impl Verifier for RejectingVerifier {
    fn is_verified(&self, _user: UserId, _guild: GuildId) -> bool {
        false
    }
}

/// Settings with every channel and the claim role configured.
pub fn test_settings() -> Settings {
    Settings {
        status_channel: Some(STATUS_CHANNEL),
        claim_role: Some(CLAIM_ROLE),
        rules_channel: Some(RULES_CHANNEL),
        tickets_channel: Some(TICKETS_CHANNEL),
        role_claim_channel: None,
        announce_startup: false,
    }
}

/// `/claim` invocation by a member who holds no roles.
pub fn test_invocation() -> Invocation {
    Invocation {
        user: UserId::new(4001),
        user_name: "member".to_string(),
        guild: GUILD,
        roles: Vec::new(),
    }
}
