//! Translates serenity gateway events into core events.

use crate::bot::BotData;
use crate::bot::platform::{GlobalRegistrar, SerenityPlatform};
use crate::core::dispatcher::Event;
use crate::errors::Error;
use poise::serenity_prelude as serenity;
use tracing::debug;

/// Maps a serenity event to a core [`Event`], if the bot handles it.
///
/// Ready fires on every new gateway session, so commands are re-synced after
/// a reconnect. Resumed sessions do not fire it.
#[must_use]
pub fn to_core_event(event: &serenity::FullEvent) -> Option<Event> {
    match event {
        serenity::FullEvent::Ready { data_about_bot } => Some(Event::Ready {
            bot_name: data_about_bot.user.name.clone(),
        }),
        serenity::FullEvent::GuildMemberAddition { new_member } => Some(Event::MemberJoined {
            user: new_member.user.id,
            user_name: new_member.user.name.clone(),
        }),
        _ => None,
    }
}

/// Framework-wide event handler.
pub async fn event_handler(
    ctx: &serenity::Context,
    event: &serenity::FullEvent,
    framework: poise::FrameworkContext<'_, BotData, Error>,
    data: &BotData,
) -> Result<(), Error> {
    let Some(core_event) = to_core_event(event) else {
        return Ok(());
    };
    debug!(?core_event, "Dispatching gateway event");

    let platform = SerenityPlatform::new(ctx);
    let registrar = GlobalRegistrar::new(ctx, &framework.options.commands);
    data.dispatcher
        .handle_event(&platform, &registrar, core_event)
        .await;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_addition_maps_to_member_joined() {
        let mut new_member = serenity::Member::default();
        new_member.user.id = serenity::UserId::new(77);
        new_member.user.name = "newcomer".to_string();

        let event = serenity::FullEvent::GuildMemberAddition { new_member };

        assert_eq!(
            to_core_event(&event),
            Some(Event::MemberJoined {
                user: serenity::UserId::new(77),
                user_name: "newcomer".to_string(),
            })
        );
    }

    #[test]
    fn test_unhandled_events_are_ignored() {
        let event = serenity::FullEvent::ShardsReady { total_shards: 1 };
        assert_eq!(to_core_event(&event), None);
    }
}
