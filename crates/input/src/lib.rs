//! Terminal input module (engine-facing).
//!
//! This module is independent of any UI framework. It maps `crossterm` key
//! events into [`crate::types::GameAction`] and left clicks into screen cells;
//! the view turns those cells into grid coordinates.

pub mod map;

pub use tui_match3_types as types;

pub use map::{handle_key_event, pointer_pick, should_quit};
