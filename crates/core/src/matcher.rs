//! Match detection - run-length scans over rows and columns
//!
//! A match is a maximal run of at least [`MIN_RUN_LENGTH`] equal tiles along a
//! row or a column. Empty cells never match and break any run. A run of five
//! is reported as one run of five, never as overlapping threes.
//!
//! Both entry points share [`scan_line`]:
//!
//! - [`find_all_matches`]: every column (bottom to top), then every row
//!   (left to right)
//! - [`find_matches_through`]: only the column and the row crossing one cell
//!
//! Results are collected into a [`MatchSet`], which deduplicates cells that
//! sit in both a horizontal and a vertical run (L, T and + shapes).

use crate::grid::TileGrid;
use crate::types::{Cell, Coordinate, MIN_RUN_LENGTH};

/// A deduplicated set of matched coordinates.
///
/// Iteration order is discovery order: column scans first (columns
/// ascending, bottom to top), then row scans (rows ascending, left to
/// right). A cell already seen in a column run is not repeated by a row run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MatchSet {
    width: u16,
    cells: Vec<Coordinate>,
    seen: Vec<bool>,
}

impl MatchSet {
    /// An empty set pre-sized for a `width x height` grid.
    pub fn for_grid(width: u16, height: u16) -> Self {
        Self {
            width,
            cells: Vec::new(),
            seen: vec![false; width as usize * height as usize],
        }
    }

    fn index(&self, at: Coordinate) -> Option<usize> {
        if at.column >= self.width {
            return None;
        }
        let idx = at.row as usize * self.width as usize + at.column as usize;
        (idx < self.seen.len()).then_some(idx)
    }

    /// Insert a coordinate; returns false if it was already present or lies
    /// outside the grid.
    pub fn insert(&mut self, at: Coordinate) -> bool {
        let Some(idx) = self.index(at) else {
            return false;
        };
        if self.seen[idx] {
            return false;
        }
        self.seen[idx] = true;
        self.cells.push(at);
        true
    }

    pub fn contains(&self, at: Coordinate) -> bool {
        self.index(at).is_some_and(|idx| self.seen[idx])
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.cells.iter().copied()
    }

    pub fn as_slice(&self) -> &[Coordinate] {
        &self.cells
    }

    /// Sorted copy, for order-insensitive comparisons.
    pub fn sorted(&self) -> Vec<Coordinate> {
        let mut v = self.cells.clone();
        v.sort();
        v
    }
}

/// Scan one line of cells and record every maximal run of length
/// `>= MIN_RUN_LENGTH` into `out`. `at(i)` maps a position along the line to
/// its grid coordinate.
fn scan_line(
    cells: impl Iterator<Item = Cell>,
    at: impl Fn(u16) -> Coordinate,
    out: &mut MatchSet,
) {
    let mut run_start = 0u16;
    let mut run_tile: Cell = None;
    let mut i = 0u16;

    let flush = |start: u16, end: u16, tile: Cell, out: &mut MatchSet| {
        if tile.is_some() && (end - start) as usize >= MIN_RUN_LENGTH {
            for j in start..end {
                out.insert(at(j));
            }
        }
    };

    for cell in cells {
        if cell.is_none() || cell != run_tile {
            flush(run_start, i, run_tile, out);
            run_start = i;
            run_tile = cell;
        }
        i += 1;
    }
    flush(run_start, i, run_tile, out);
}

fn scan_column(grid: &TileGrid, column: u16, out: &mut MatchSet) {
    let cells = grid.cells();
    let width = grid.width() as usize;
    let line = (0..grid.height()).map(|r| cells[r as usize * width + column as usize]);
    scan_line(line, |r| Coordinate::new(column, r), out);
}

fn scan_row(grid: &TileGrid, row: u16, out: &mut MatchSet) {
    let width = grid.width() as usize;
    let start = row as usize * width;
    let line = grid.cells()[start..start + width].iter().copied();
    scan_line(line, |c| Coordinate::new(c, row), out);
}

/// Every matched cell on the board.
pub fn find_all_matches(grid: &TileGrid) -> MatchSet {
    let mut out = MatchSet::for_grid(grid.width(), grid.height());
    for column in 0..grid.width() {
        scan_column(grid, column, &mut out);
    }
    for row in 0..grid.height() {
        scan_row(grid, row, &mut out);
    }
    out
}

/// Matched cells on the column and row through `at`.
///
/// Equivalent to [`find_all_matches`] restricted to that cross. An
/// out-of-bounds `at` yields an empty set.
pub fn find_matches_through(grid: &TileGrid, at: Coordinate) -> MatchSet {
    let mut out = MatchSet::for_grid(grid.width(), grid.height());
    if !grid.contains(at) {
        return out;
    }
    scan_column(grid, at.column, &mut out);
    scan_row(grid, at.row, &mut out);
    out
}

/// True if any run of [`MIN_RUN_LENGTH`] exists on the board.
pub fn has_matches(grid: &TileGrid) -> bool {
    !find_all_matches(grid).is_empty()
}
