//! Terminal input mapping.
//!
//! Turns `crossterm` key events into [`crate::types::GameAction`]s or a quit
//! request. Only press and repeat events produce commands; release events
//! (reported by terminals with keyboard enhancement) are ignored.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit, translate, Command};
