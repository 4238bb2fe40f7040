//! Core logic - framework-agnostic handlers for welcome, status logging and `/claim`.
//!
//! Handlers reach the chat platform only through the traits in [`platform`].

/// The `/claim` role grant flow
pub mod claim;
/// Event and command routing
pub mod dispatcher;
/// Platform capability traits and delivery outcomes
pub mod platform;
/// Status channel logging
pub mod status_log;
/// Claim verification
pub mod verification;
/// Welcome direct message
pub mod welcome;
