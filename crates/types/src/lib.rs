//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, tests, benches).
//!
//! # Grid Coordinates
//!
//! A [`Coordinate`] is a `(column, row)` pair, both 0-indexed:
//!
//! - **column**: 0 is the leftmost column
//! - **row**: 0 is the **bottom** row; gravity pulls tiles toward row 0
//!
//! # Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_WIDTH` | 5 | Columns on a fresh board |
//! | `DEFAULT_HEIGHT` | 5 | Rows on a fresh board |
//! | `DEFAULT_TILE_KINDS` | 5 | Tile kinds in play |
//! | `DEFAULT_SCORE_INCREMENT` | 100 | Points per cleared tile, before the multiplier |
//! | `MIN_RUN_LENGTH` | 3 | Shortest run that counts as a match |
//! | `TICK_MS` | 16 | Frame loop interval (~60 FPS) |
//!
//! # Examples
//!
//! ```
//! use tui_match3_types::{Coordinate, GameAction, TileType};
//!
//! let a = Coordinate::new(1, 2);
//! let b = Coordinate::new(1, 3);
//! assert_eq!(a.manhattan(b), 1);
//!
//! assert_eq!(TileType::from_str("blue"), Some(TileType::Blue));
//! assert_eq!(TileType::from_index(0), Some(TileType::Red));
//!
//! assert_eq!(GameAction::from_str("pick"), Some(GameAction::Pick));
//! ```

use std::fmt;

/// Default board width in columns
pub const DEFAULT_WIDTH: u16 = 5;

/// Default board height in rows
pub const DEFAULT_HEIGHT: u16 = 5;

/// Default number of tile kinds in play
pub const DEFAULT_TILE_KINDS: u8 = 5;

/// Default points awarded per cleared tile (multiplied by the cascade multiplier)
pub const DEFAULT_SCORE_INCREMENT: u32 = 100;

/// Shortest run of equal tiles that forms a match
pub const MIN_RUN_LENGTH: usize = 3;

/// Smallest accepted board dimension
pub const MIN_DIMENSION: u16 = 3;

/// Largest accepted board dimension
pub const MAX_DIMENSION: u16 = 64;

/// Frame loop interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// A grid position: `column` grows to the right, `row` grows upward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Coordinate {
    pub column: u16,
    pub row: u16,
}

impl Coordinate {
    pub const fn new(column: u16, row: u16) -> Self {
        Self { column, row }
    }

    /// Manhattan distance between two coordinates
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_match3_types::Coordinate;
    ///
    /// assert_eq!(Coordinate::new(0, 0).manhattan(Coordinate::new(0, 2)), 2);
    /// assert_eq!(Coordinate::new(3, 1).manhattan(Coordinate::new(2, 2)), 2);
    /// ```
    pub fn manhattan(self, other: Coordinate) -> u32 {
        let dc = self.column.abs_diff(other.column) as u32;
        let dr = self.row.abs_diff(other.row) as u32;
        dc + dr
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}

/// The tile catalog
///
/// A board plays with the first `tile_kinds` entries of [`TileType::ALL`].
/// Equality is the only property the match logic relies on; the colour
/// names exist for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TileType {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    White,
}

impl TileType {
    /// Every kind in catalog order
    pub const ALL: [TileType; 7] = [
        TileType::Red,
        TileType::Orange,
        TileType::Yellow,
        TileType::Green,
        TileType::Blue,
        TileType::Purple,
        TileType::White,
    ];

    /// Size of the catalog
    pub const COUNT: u8 = 7;

    /// Look up a kind by catalog index
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// Catalog index of this kind
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Parse tile kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_match3_types::TileType;
    ///
    /// assert_eq!(TileType::from_str("Red"), Some(TileType::Red));
    /// assert_eq!(TileType::from_str("w"), Some(TileType::White));
    /// assert_eq!(TileType::from_str("magenta"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "red" | "r" => Some(TileType::Red),
            "orange" | "o" => Some(TileType::Orange),
            "yellow" | "y" => Some(TileType::Yellow),
            "green" | "g" => Some(TileType::Green),
            "blue" | "b" => Some(TileType::Blue),
            "purple" | "p" => Some(TileType::Purple),
            "white" | "w" => Some(TileType::White),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            TileType::Red => "red",
            TileType::Orange => "orange",
            TileType::Yellow => "yellow",
            TileType::Green => "green",
            TileType::Blue => "blue",
            TileType::Purple => "purple",
            TileType::White => "white",
        }
    }

    /// Single-letter glyph used by text renderings and test fixtures
    pub fn letter(&self) -> char {
        match self {
            TileType::Red => 'R',
            TileType::Orange => 'O',
            TileType::Yellow => 'Y',
            TileType::Green => 'G',
            TileType::Blue => 'B',
            TileType::Purple => 'P',
            TileType::White => 'W',
        }
    }
}

/// A cell on the grid
///
/// - `None`: empty (only exists transiently in the middle of a cascade)
/// - `Some(TileType)`: a tile of that kind
pub type Cell = Option<TileType>;

/// One tile falling inside its column during gravity resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileMove {
    pub column: u16,
    pub from_row: u16,
    pub to_row: u16,
    pub tile: TileType,
}

/// Presentation-facing record of what a cascade did to the grid.
///
/// Events are emitted in the order the engine performed them, so a renderer
/// can replay a cascade pass by pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileEvent {
    /// A matched tile was removed during cascade pass `pass` (1-based).
    Cleared {
        at: Coordinate,
        tile: TileType,
        pass: u32,
    },
    /// A surviving tile fell to fill a gap.
    Moved(TileMove),
    /// A fresh tile was generated into an empty cell.
    Spawned { at: Coordinate, tile: TileType },
}

/// Game actions that can be applied to modify game state
///
/// Pointer picks carry a coordinate and bypass this enum (see
/// `Match3Game::pick`); these actions cover keyboard play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move the keyboard cursor one row up
    CursorUp,
    /// Move the keyboard cursor one row down
    CursorDown,
    /// Move the keyboard cursor one column left
    CursorLeft,
    /// Move the keyboard cursor one column right
    CursorRight,
    /// Select the cell under the cursor, or swap it with the current selection
    Pick,
    /// Drop the current selection
    Cancel,
    /// Show a swap that would produce a match
    Hint,
    /// Start over with a fresh board
    Restart,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_match3_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("cursorLeft"), Some(GameAction::CursorLeft));
    /// assert_eq!(GameAction::from_str("hint"), Some(GameAction::Hint));
    /// assert_eq!(GameAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "cursorup" => Some(GameAction::CursorUp),
            "cursordown" => Some(GameAction::CursorDown),
            "cursorleft" => Some(GameAction::CursorLeft),
            "cursorright" => Some(GameAction::CursorRight),
            "pick" => Some(GameAction::Pick),
            "cancel" => Some(GameAction::Cancel),
            "hint" => Some(GameAction::Hint),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::CursorUp => "cursorUp",
            GameAction::CursorDown => "cursorDown",
            GameAction::CursorLeft => "cursorLeft",
            GameAction::CursorRight => "cursorRight",
            GameAction::Pick => "pick",
            GameAction::Cancel => "cancel",
            GameAction::Hint => "hint",
            GameAction::Restart => "restart",
        }
    }
}
