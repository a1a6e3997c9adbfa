//! Fixed-size district grid with bounds-tolerant access
//!
//! Cells live in a row-major `Array2` indexed `[y, x]`. Reads outside the grid return
//! `None` and writes outside the grid are ignored, since placement routines probe
//! positions speculatively and skip interior bounds checks.

use ndarray::Array2;
use serde::ser::{Serialize, Serializer};

use crate::spatial::cell::{Cell, TileType};

/// Rectangular array of tile cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Array2<Cell>,
}

impl Grid {
    /// Create a grid of open-ground, self-anchored cells
    pub fn new(width: usize, height: usize) -> Self {
        let cells = Array2::from_shape_fn((height, width), |(row, col)| {
            Cell::grass(col as i32, row as i32)
        });
        Self { cells }
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Whether `(x, y)` lies inside `[0, width) × [0, height)`
    pub fn contains(&self, x: i32, y: i32) -> bool {
        Self::index(x, y).is_some_and(|[row, col]| row < self.height() && col < self.width())
    }

    /// Cell at `(x, y)`, or `None` outside the grid
    pub fn get(&self, x: i32, y: i32) -> Option<&Cell> {
        Self::index(x, y).and_then(|index| self.cells.get(index))
    }

    /// Mutable cell at `(x, y)`, or `None` outside the grid
    pub fn get_mut(&mut self, x: i32, y: i32) -> Option<&mut Cell> {
        Self::index(x, y).and_then(|index| self.cells.get_mut(index))
    }

    /// Overwrite the cell at `(x, y)`; no-op outside the grid
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) {
        if let Some(slot) = self.get_mut(x, y) {
            *slot = cell;
        }
    }

    /// Ground classification at `(x, y)`, or `None` outside the grid
    pub fn tile_type(&self, x: i32, y: i32) -> Option<TileType> {
        self.get(x, y).map(|cell| cell.tile_type)
    }

    /// Iterate all cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Owned copy of every row, top to bottom
    pub fn rows(&self) -> Vec<Vec<Cell>> {
        self.cells.rows().into_iter().map(|row| row.to_vec()).collect()
    }

    /// Count cells matching a predicate
    pub fn count_where(&self, predicate: impl Fn(&Cell) -> bool) -> usize {
        self.cells.iter().filter(|cell| predicate(cell)).count()
    }

    const fn index(x: i32, y: i32) -> Option<[usize; 2]> {
        if x < 0 || y < 0 {
            None
        } else {
            Some([y as usize, x as usize])
        }
    }
}

// Serialized as an array of rows so consumers index `grid[y][x]`
impl Serialize for Grid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.cells.rows().into_iter().map(|row| row.to_vec()))
    }
}
