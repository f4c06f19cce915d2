use crate::selection::RejectReason;
use crate::types::{Cell, Coordinate, TileEvent};

/// Render-facing copy of the game, refreshed once per frame.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameSnapshot {
    pub width: u16,
    pub height: u16,
    /// Row-major cells, row 0 (bottom) first.
    pub cells: Vec<Cell>,
    pub score: u64,
    /// Score gained by the last accepted swap.
    pub last_delta: u64,
    /// Multiplier reached by the last accepted swap.
    pub last_multiplier: u64,
    pub last_reject: Option<RejectReason>,
    pub selected: Option<Coordinate>,
    pub cursor: Coordinate,
    pub hint: Option<(Coordinate, Coordinate)>,
    /// Events of the last accepted cascade.
    pub events: Vec<TileEvent>,
    pub swaps: u32,
    pub reshuffles: u32,
    pub episode_id: u32,
    pub seed: u32,
}

impl GameSnapshot {
    /// Cell at `at`, or `None` outside the board.
    pub fn cell(&self, at: Coordinate) -> Cell {
        if at.column >= self.width || at.row >= self.height {
            return None;
        }
        self.cells
            .get(at.row as usize * self.width as usize + at.column as usize)
            .copied()
            .flatten()
    }

    pub fn clear(&mut self) {
        self.width = 0;
        self.height = 0;
        self.cells.clear();
        self.score = 0;
        self.last_delta = 0;
        self.last_multiplier = 0;
        self.last_reject = None;
        self.selected = None;
        self.cursor = Coordinate::default();
        self.hint = None;
        self.events.clear();
        self.swaps = 0;
        self.reshuffles = 0;
        self.episode_id = 0;
        self.seed = 0;
    }

    /// True if `at` is part of the current hint.
    pub fn is_hinted(&self, at: Coordinate) -> bool {
        self.hint.is_some_and(|(a, b)| a == at || b == at)
    }
}
