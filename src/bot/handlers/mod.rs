//! Gateway event handlers
//!
//! Poise hands every gateway event to [`event_handler`]; the ones the bot
//! reacts to are translated into core [`Event`](crate::core::dispatcher::Event)s.

/// Member join handling
pub mod events;

pub use events::event_handler;
