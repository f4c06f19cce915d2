//! Selection controller - turns picked cells into swap decisions
//!
//! Pure decision logic. A first pick selects a cell; a second pick drops the
//! selection and tries to swap the two cells. A swap is accepted only when it
//! creates a match through one of the two cells; otherwise the grid is left
//! exactly as it was and the outcome says why.

use tracing::debug;

use crate::cascade::{CascadeEngine, CascadeReport};
use crate::error::GridError;
use crate::grid::TileGrid;
use crate::matcher::find_matches_through;
use crate::rng::TileSource;
use crate::types::Coordinate;

/// Why a swap attempt was turned down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectReason {
    OutOfBounds,
    NotNeighboring,
    NoMatch,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwapOutcome {
    Rejected(RejectReason),
    Accepted(CascadeReport),
}

impl SwapOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SwapOutcome::Accepted(_))
    }

    pub fn score_delta(&self) -> u64 {
        match self {
            SwapOutcome::Accepted(report) => report.score_delta,
            SwapOutcome::Rejected(_) => 0,
        }
    }
}

/// Result of a single pick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickOutcome {
    /// Nothing was selected; `at` is now the selection.
    Selected(Coordinate),
    /// A selection existed; the swap was attempted and the selection dropped.
    Swapped(SwapOutcome),
}

/// Attempt to swap `selected` with `target` and resolve the cascade.
///
/// Rejections leave `grid` bit-for-bit unchanged.
pub fn try_swap(
    grid: &mut TileGrid,
    engine: &mut CascadeEngine,
    source: &mut impl TileSource,
    selected: Coordinate,
    target: Coordinate,
) -> Result<SwapOutcome, GridError> {
    if !grid.contains(target) || !grid.contains(selected) {
        debug!(%selected, %target, "swap rejected: out of bounds");
        return Ok(SwapOutcome::Rejected(RejectReason::OutOfBounds));
    }
    if !TileGrid::neighboring(selected, target) {
        debug!(%selected, %target, "swap rejected: not neighboring");
        return Ok(SwapOutcome::Rejected(RejectReason::NotNeighboring));
    }

    grid.swap(selected, target)?;
    let matched = !find_matches_through(grid, selected).is_empty()
        || !find_matches_through(grid, target).is_empty();
    if !matched {
        grid.swap(selected, target)?;
        debug!(%selected, %target, "swap rejected: no match");
        return Ok(SwapOutcome::Rejected(RejectReason::NoMatch));
    }

    let report = engine.run(grid, source)?;
    Ok(SwapOutcome::Accepted(report))
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionController {
    selected: Option<Coordinate>,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<Coordinate> {
        self.selected
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Make `at` the selection. Any in-bounds cell is accepted; an
    /// out-of-bounds cell is an error and leaves the selection as it was.
    pub fn select(&mut self, grid: &TileGrid, at: Coordinate) -> Result<(), GridError> {
        grid.get(at)?;
        self.selected = Some(at);
        Ok(())
    }

    /// Swap the current selection with `target`. The selection is always
    /// cleared. Returns `None` when nothing was selected.
    pub fn try_swap(
        &mut self,
        target: Coordinate,
        grid: &mut TileGrid,
        engine: &mut CascadeEngine,
        source: &mut impl TileSource,
    ) -> Result<Option<SwapOutcome>, GridError> {
        let Some(selected) = self.selected.take() else {
            return Ok(None);
        };
        try_swap(grid, engine, source, selected, target).map(Some)
    }

    /// Two-click pick: select when idle, otherwise swap with the selection.
    pub fn pick(
        &mut self,
        at: Coordinate,
        grid: &mut TileGrid,
        engine: &mut CascadeEngine,
        source: &mut impl TileSource,
    ) -> Result<PickOutcome, GridError> {
        match self.try_swap(at, grid, engine, source)? {
            Some(outcome) => Ok(PickOutcome::Swapped(outcome)),
            None => {
                self.select(grid, at)?;
                Ok(PickOutcome::Selected(at))
            }
        }
    }
}
