//! Error types for the grid engine.
//!
//! Only programmer/configuration mistakes are errors. A swap that produces no
//! match, or targets a non-adjacent cell, is a normal `Rejected` outcome (see
//! [`crate::selection::SwapOutcome`]).

use thiserror::Error;

use crate::types::Coordinate;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("coordinate {at} is outside the {width}x{height} grid")]
    OutOfBounds {
        at: Coordinate,
        width: u16,
        height: u16,
    },
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),
}

/// Which construction rule a [`crate::BoardConfig`] broke.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board dimension {value} is below the minimum of {min}")]
    DimensionTooSmall { value: u16, min: u16 },
    #[error("board dimension {value} exceeds the maximum of {max}")]
    DimensionTooLarge { value: u16, max: u16 },
    #[error("{value} tile kinds requested, need between {min} and {max}")]
    TileKinds { value: u8, min: u8, max: u8 },
    #[error("score increment must be positive")]
    ZeroScoreIncrement,
    #[error("score increment {0} overflows the score counter at expected magnitudes")]
    ScoreOverflow(u32),
    #[error("grid is {actual_width}x{actual_height}, configuration expects {width}x{height}")]
    GridShape {
        width: u16,
        height: u16,
        actual_width: u16,
        actual_height: u16,
    },
}
