//! Grid module - owns the tile grid
//!
//! The grid is `width x height` cells, each empty or holding a [`TileType`].
//! Storage is a flat row-major vector (`row * width + column`) with row 0 at
//! the bottom. Every accessor is bounds-checked and fails loudly with
//! [`GridError::OutOfBounds`] instead of clamping.

use arrayvec::ArrayVec;

use crate::error::GridError;
use crate::rng::TileSource;
use crate::types::{Cell, Coordinate, TileType};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    width: u16,
    height: u16,
    /// Flat array of cells, row-major order (row * width + column)
    cells: Vec<Cell>,
}

impl TileGrid {
    /// Create a grid with every cell empty.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        }
    }

    /// Create a grid filled with tiles drawn from `source`.
    ///
    /// The result may contain matches; settle it with
    /// [`crate::CascadeEngine::settle`] before play.
    pub fn random(
        width: u16,
        height: u16,
        kinds: &[TileType],
        source: &mut impl TileSource,
    ) -> Self {
        let mut grid = Self::new(width, height);
        grid.refill_all(kinds, source);
        grid
    }

    /// Build a grid from rows listed **top row first**, the way a board reads
    /// on screen. Returns `None` for ragged rows.
    pub fn from_rows(rows: &[Vec<Cell>]) -> Option<Self> {
        let height = rows.len() as u16;
        let width = rows.first().map_or(0, |r| r.len()) as u16;
        if rows.iter().any(|r| r.len() != width as usize) {
            return None;
        }
        let mut grid = Self::new(width, height);
        for (i, row) in rows.iter().enumerate() {
            let r = height as usize - 1 - i;
            for (c, cell) in row.iter().enumerate() {
                grid.cells[r * width as usize + c] = *cell;
            }
        }
        Some(grid)
    }

    /// Parse a grid from lines of tile letters (see [`TileType::letter`]),
    /// top row first; `.` marks an empty cell. Whitespace is ignored.
    pub fn from_letters(lines: &[&str]) -> Option<Self> {
        let mut rows = Vec::with_capacity(lines.len());
        for line in lines {
            let mut row = Vec::new();
            for ch in line.chars().filter(|c| !c.is_whitespace()) {
                if ch == '.' {
                    row.push(None);
                } else {
                    row.push(Some(TileType::from_str(&ch.to_string())?));
                }
            }
            rows.push(row);
        }
        Self::from_rows(&rows)
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn contains(&self, at: Coordinate) -> bool {
        at.column < self.width && at.row < self.height
    }

    #[inline(always)]
    fn index(&self, at: Coordinate) -> Result<usize, GridError> {
        if !self.contains(at) {
            return Err(GridError::OutOfBounds {
                at,
                width: self.width,
                height: self.height,
            });
        }
        Ok(at.row as usize * self.width as usize + at.column as usize)
    }

    pub fn get(&self, at: Coordinate) -> Result<Cell, GridError> {
        let idx = self.index(at)?;
        Ok(self.cells[idx])
    }

    pub fn set(&mut self, at: Coordinate, cell: Cell) -> Result<(), GridError> {
        let idx = self.index(at)?;
        self.cells[idx] = cell;
        Ok(())
    }

    /// Empty a cell, returning what it held.
    pub fn clear(&mut self, at: Coordinate) -> Result<Cell, GridError> {
        let idx = self.index(at)?;
        Ok(self.cells[idx].take())
    }

    /// Exchange two cells. Adjacency is not checked here.
    pub fn swap(&mut self, a: Coordinate, b: Coordinate) -> Result<(), GridError> {
        let ia = self.index(a)?;
        let ib = self.index(b)?;
        self.cells.swap(ia, ib);
        Ok(())
    }

    /// True iff `a` and `b` share an edge.
    pub fn neighboring(a: Coordinate, b: Coordinate) -> bool {
        a.manhattan(b) == 1
    }

    /// In-bounds edge neighbours of `at` (left, right, down, up).
    pub fn neighbors(&self, at: Coordinate) -> ArrayVec<Coordinate, 4> {
        let mut out = ArrayVec::new();
        if at.column > 0 {
            out.push(Coordinate::new(at.column - 1, at.row));
        }
        if at.column + 1 < self.width {
            out.push(Coordinate::new(at.column + 1, at.row));
        }
        if at.row > 0 {
            out.push(Coordinate::new(at.column, at.row - 1));
        }
        if at.row + 1 < self.height {
            out.push(Coordinate::new(at.column, at.row + 1));
        }
        out
    }

    /// Draw a fresh tile from `kinds` using `source`.
    pub fn random_tile(kinds: &[TileType], source: &mut impl TileSource) -> TileType {
        source.next_tile(kinds)
    }

    /// Fill every cell with a fresh random tile.
    pub fn refill_all(&mut self, kinds: &[TileType], source: &mut impl TileSource) {
        for cell in &mut self.cells {
            *cell = Some(source.next_tile(kinds));
        }
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Row-major cells, row 0 (bottom) first.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// All coordinates, columns ascending, rows ascending within a column.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        (0..self.width).flat_map(move |c| (0..self.height).map(move |r| Coordinate::new(c, r)))
    }

    /// Render as letter rows, top row first (`.` for empty).
    pub fn to_letters(&self) -> Vec<String> {
        (0..self.height)
            .rev()
            .map(|r| {
                (0..self.width)
                    .map(|c| {
                        let idx = r as usize * self.width as usize + c as usize;
                        self.cells[idx].map_or('.', |t| t.letter())
                    })
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SimpleRng;

    #[test]
    fn test_get_set_roundtrip() {
        let mut grid = TileGrid::new(4, 3);
        let at = Coordinate::new(3, 2);
        assert_eq!(grid.get(at), Ok(None));
        grid.set(at, Some(TileType::Blue)).unwrap();
        assert_eq!(grid.get(at), Ok(Some(TileType::Blue)));
        assert_eq!(grid.cells()[2 * 4 + 3], Some(TileType::Blue));
    }

    #[test]
    fn test_out_of_bounds_fails_loudly() {
        let mut grid = TileGrid::new(3, 3);
        let bad = Coordinate::new(3, 0);
        assert_eq!(
            grid.get(bad),
            Err(GridError::OutOfBounds {
                at: bad,
                width: 3,
                height: 3
            })
        );
        assert!(grid.set(Coordinate::new(0, 3), Some(TileType::Red)).is_err());
        assert!(grid.swap(Coordinate::new(0, 0), bad).is_err());
        // A failed swap leaves the grid untouched.
        assert_eq!(grid, TileGrid::new(3, 3));
    }

    #[test]
    fn test_swap_exchanges_contents() {
        let mut grid = TileGrid::from_letters(&["RGB", "YOP", "RGB"]).unwrap();
        grid.swap(Coordinate::new(0, 0), Coordinate::new(2, 2)).unwrap();
        assert_eq!(grid.to_letters(), vec!["RGR", "YOP", "BGB"]);
    }

    #[test]
    fn test_from_letters_puts_first_line_on_top() {
        let grid = TileGrid::from_letters(&["R..", "GBY"]).unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.get(Coordinate::new(0, 1)), Ok(Some(TileType::Red)));
        assert_eq!(grid.get(Coordinate::new(1, 1)), Ok(None));
        assert_eq!(grid.get(Coordinate::new(2, 0)), Ok(Some(TileType::Yellow)));
        assert!(TileGrid::from_letters(&["RX"]).is_none());
        assert!(TileGrid::from_letters(&["RG", "R"]).is_none());
    }

    #[test]
    fn test_neighboring_is_edge_only() {
        let a = Coordinate::new(1, 1);
        assert!(TileGrid::neighboring(a, Coordinate::new(1, 2)));
        assert!(TileGrid::neighboring(a, Coordinate::new(0, 1)));
        assert!(!TileGrid::neighboring(a, Coordinate::new(2, 2)));
        assert!(!TileGrid::neighboring(a, a));
        assert!(!TileGrid::neighboring(Coordinate::new(0, 0), Coordinate::new(0, 2)));
    }

    #[test]
    fn test_neighbors_respect_edges() {
        let grid = TileGrid::new(3, 3);
        assert_eq!(grid.neighbors(Coordinate::new(0, 0)).len(), 2);
        assert_eq!(grid.neighbors(Coordinate::new(1, 0)).len(), 3);
        assert_eq!(grid.neighbors(Coordinate::new(1, 1)).len(), 4);
    }

    #[test]
    fn test_random_grid_is_full_and_seeded() {
        let kinds = &TileType::ALL[..4];
        let a = TileGrid::random(5, 5, kinds, &mut SimpleRng::new(3));
        let b = TileGrid::random(5, 5, kinds, &mut SimpleRng::new(3));
        assert!(a.is_full());
        assert_eq!(a, b);
        assert!(a.cells().iter().flatten().all(|t| kinds.contains(t)));
    }

    #[test]
    fn test_clear_returns_previous_tile() {
        let mut grid = TileGrid::from_letters(&["RG"]).unwrap();
        assert_eq!(grid.clear(Coordinate::new(1, 0)), Ok(Some(TileType::Green)));
        assert_eq!(grid.clear(Coordinate::new(1, 0)), Ok(None));
    }
}
