//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal play. It avoids widget
//! toolkits and renders into a simple framebuffer that is then flushed to a
//! terminal backend.
//!
//! - `core` stays deterministic and testable; this crate only reads snapshots
//! - Cells are drawn 2 chars wide to keep tiles roughly square
//! - [`GameView::cell_at`] maps mouse positions back to grid coordinates

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_match3_core as core;
pub use tui_match3_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
