//! Terminal input module (engine-facing).
//!
//! This module is independent of any UI framework. It maps `crossterm` key
//! events into [`crate::types::Command`] and collects them into an
//! edge-triggered, de-duplicated batch per tick.

pub mod batch;
pub mod map;

pub use tui_mastermind_types as types;

pub use batch::CommandBatch;
pub use map::{handle_key_event, should_quit};
