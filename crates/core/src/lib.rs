//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the match-3 rules: the tile grid, match detection,
//! gravity, the cascade state machine and the swap decision logic. It has
//! **no dependencies** on rendering or terminal I/O:
//!
//! - **Deterministic**: every random draw goes through an injectable [`TileSource`]
//! - **Testable**: [`ScriptedTiles`] replays exact refill sequences
//! - **Synchronous**: a player swap resolves its whole cascade before returning
//!
//! # Module Structure
//!
//! - [`grid`]: bounds-checked `width x height` tile storage
//! - [`matcher`]: run detection over the whole board or through one cell
//! - [`gravity`]: column compaction and refill bookkeeping
//! - [`cascade`]: detect → clear → gravity → refill loop with the score multiplier
//! - [`selection`]: adjacency and match checks for a player swap
//! - [`moves`]: valid-swap search for hints and dead boards
//! - [`game`]: [`Match3Game`], the facade a frontend drives
//!
//! # Scoring
//!
//! Each cleared cell scores `score_increment * multiplier`, after which the
//! multiplier grows by one. The multiplier resets to 1 at every player swap
//! and keeps climbing across the passes of that swap's cascade.
//!
//! # Example
//!
//! ```
//! use tui_match3_core::{BoardConfig, Match3Game, PickOutcome};
//! use tui_match3_types::GameAction;
//!
//! let mut game = Match3Game::new(BoardConfig::default(), 12345).unwrap();
//!
//! // Ask for a valid swap and play it.
//! game.apply_action(GameAction::Hint).unwrap();
//! let (a, b) = game.hint().unwrap();
//! game.pick(a).unwrap();
//! let outcome = game.pick(b).unwrap();
//!
//! assert!(matches!(outcome, PickOutcome::Swapped(ref swap) if swap.is_accepted()));
//! assert!(game.score() > 0);
//! ```

pub mod cascade;
pub mod config;
pub mod error;
pub mod game;
pub mod gravity;
pub mod grid;
pub mod matcher;
pub mod moves;
pub mod rng;
pub mod selection;
pub mod snapshot;

pub use tui_match3_types as types;

// Re-export commonly used types for convenience
pub use cascade::{
    CascadeEngine, CascadePhase, CascadeReport, CascadeState, CASCADE_PASS_LIMIT,
};
pub use config::BoardConfig;
pub use error::{ConfigError, GridError};
pub use game::Match3Game;
pub use gravity::{apply_gravity, GravityReport};
pub use grid::TileGrid;
pub use matcher::{find_all_matches, find_matches_through, has_matches, MatchSet};
pub use moves::{find_valid_swap, has_valid_swap};
pub use rng::{ScriptedTiles, SimpleRng, TileSource};
pub use selection::{try_swap, PickOutcome, RejectReason, SelectionController, SwapOutcome};
pub use snapshot::GameSnapshot;
