//! Gravity resolution - compacts columns toward row 0
//!
//! Each column is compacted independently with a two-pointer pass: a read
//! cursor walks up the column and every non-empty cell is written to the
//! lowest free row. Relative order of surviving tiles is preserved, so a fall
//! animation can be derived unambiguously from the reported moves.

use crate::error::GridError;
use crate::grid::TileGrid;
use crate::types::{Coordinate, TileMove};

/// What one gravity pass did.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GravityReport {
    /// Every tile that changed row, in column order then source-row order.
    pub moves: Vec<TileMove>,
    /// Columns where at least one tile changed row, ascending.
    pub moved_columns: Vec<u16>,
    /// Cells left empty after compaction, columns ascending, rows ascending.
    pub refill: Vec<Coordinate>,
}

impl GravityReport {
    pub fn moved(&self) -> bool {
        !self.moved_columns.is_empty()
    }
}

/// Compact every column of `grid` downward and report moves and empties.
pub fn apply_gravity(grid: &mut TileGrid) -> Result<GravityReport, GridError> {
    let mut report = GravityReport::default();
    let (width, height) = (grid.width(), grid.height());

    for column in 0..width {
        let mut write_row = 0u16;
        let mut column_moved = false;

        for read_row in 0..height {
            let from = Coordinate::new(column, read_row);
            let Some(tile) = grid.get(from)? else {
                continue;
            };
            if read_row != write_row {
                let to = Coordinate::new(column, write_row);
                grid.set(to, Some(tile))?;
                grid.set(from, None)?;
                report.moves.push(TileMove {
                    column,
                    from_row: read_row,
                    to_row: write_row,
                    tile,
                });
                column_moved = true;
            }
            write_row += 1;
        }

        if column_moved {
            report.moved_columns.push(column);
        }
        for row in write_row..height {
            report.refill.push(Coordinate::new(column, row));
        }
    }

    Ok(report)
}
