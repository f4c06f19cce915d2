//! Valid-move search, used for hints and dead-board detection.

use crate::grid::TileGrid;
use crate::matcher::find_matches_through;
use crate::types::Coordinate;

/// First neighbouring swap that would create a match.
///
/// Cells are visited columns ascending, rows ascending; each cell tries its
/// right neighbour, then the one above. `grid` is not modified.
pub fn find_valid_swap(grid: &TileGrid) -> Option<(Coordinate, Coordinate)> {
    let mut scratch = grid.clone();
    for at in grid.coordinates() {
        // Left and lower neighbours were already tried from the other side.
        let forward = grid
            .neighbors(at)
            .into_iter()
            .filter(|n| n.column > at.column || n.row > at.row);
        for other in forward {
            if swap_matches(&mut scratch, at, other) {
                return Some((at, other));
            }
        }
    }
    None
}

pub fn has_valid_swap(grid: &TileGrid) -> bool {
    find_valid_swap(grid).is_some()
}

/// Swap `a` and `b` on `scratch`, test for a match through either, swap back.
fn swap_matches(scratch: &mut TileGrid, a: Coordinate, b: Coordinate) -> bool {
    if scratch.get(a) == scratch.get(b) || scratch.swap(a, b).is_err() {
        return false;
    }
    let matched = !find_matches_through(scratch, a).is_empty()
        || !find_matches_through(scratch, b).is_empty();
    // The forward swap succeeded, so the same cells are in bounds.
    scratch.swap(a, b).is_ok() && matched
}
