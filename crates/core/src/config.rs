//! Board configuration and its construction-time validation.

use crate::error::{ConfigError, GridError};
use crate::types::{
    TileType, DEFAULT_HEIGHT, DEFAULT_SCORE_INCREMENT, DEFAULT_TILE_KINDS, DEFAULT_WIDTH,
    MAX_DIMENSION, MIN_DIMENSION,
};

/// Fewest tile kinds that still allow a match-free starting board.
pub const MIN_TILE_KINDS: u8 = 3;

/// How many times over a single cascade may clear the full board before the
/// score counter is allowed to overflow. Used to bound `score_increment`.
pub const EXPECTED_BOARD_CLEARS: u64 = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardConfig {
    pub width: u16,
    pub height: u16,
    pub tile_kinds: u8,
    pub score_increment: u32,
}

impl BoardConfig {
    /// Build and validate a configuration.
    pub fn new(
        width: u16,
        height: u16,
        tile_kinds: u8,
        score_increment: u32,
    ) -> Result<Self, GridError> {
        let config = Self {
            width,
            height,
            tile_kinds,
            score_increment,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), GridError> {
        for value in [self.width, self.height] {
            if value < MIN_DIMENSION {
                return Err(ConfigError::DimensionTooSmall {
                    value,
                    min: MIN_DIMENSION,
                }
                .into());
            }
            if value > MAX_DIMENSION {
                return Err(ConfigError::DimensionTooLarge {
                    value,
                    max: MAX_DIMENSION,
                }
                .into());
            }
        }

        if !(MIN_TILE_KINDS..=TileType::COUNT).contains(&self.tile_kinds) {
            return Err(ConfigError::TileKinds {
                value: self.tile_kinds,
                min: MIN_TILE_KINDS,
                max: TileType::COUNT,
            }
            .into());
        }

        if self.score_increment == 0 {
            return Err(ConfigError::ZeroScoreIncrement.into());
        }

        // Worst expected cascade: k cleared cells score I * k * (k + 1) / 2.
        let k = self.cell_count() as u64 * EXPECTED_BOARD_CLEARS;
        let fits = k
            .checked_mul(k + 1)
            .map(|n| n / 2)
            .and_then(|tri| tri.checked_mul(self.score_increment as u64))
            .is_some();
        if !fits {
            return Err(ConfigError::ScoreOverflow(self.score_increment).into());
        }

        Ok(())
    }

    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// The kinds a board with this configuration draws from.
    pub fn kinds(&self) -> &'static [TileType] {
        &TileType::ALL[..self.tile_kinds.min(TileType::COUNT) as usize]
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            tile_kinds: DEFAULT_TILE_KINDS,
            score_increment: DEFAULT_SCORE_INCREMENT,
        }
    }
}
