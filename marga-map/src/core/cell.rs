//! Cell coordinate type for the occupancy grid.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Grid cell as a (row, col) pair, 0-indexed from the top-left corner.
///
/// The derived ordering is lexicographic (row first, then column). The
/// search engine and the renderers rely on it whenever a set of cells
/// has to be listed in a reproducible order.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Cell {
    /// Row index (0 = top)
    pub row: i32,
    /// Column index (0 = left)
    pub col: i32,
}

impl Cell {
    /// Create a new cell coordinate
    #[inline]
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Manhattan distance to another cell
    #[inline]
    pub fn manhattan_distance(&self, other: &Cell) -> i32 {
        (self.row - other.row).abs() + (self.col - other.col).abs()
    }

    /// The four axis-adjacent cells in fixed (up, down, left, right) order.
    ///
    /// No bounds or occupancy filtering is done here; see
    /// [`MazeGrid::open_neighbors4`](crate::grid::MazeGrid::open_neighbors4).
    #[inline]
    pub fn neighbors4(&self) -> [Cell; 4] {
        [
            Cell::new(self.row - 1, self.col), // up
            Cell::new(self.row + 1, self.col), // down
            Cell::new(self.row, self.col - 1), // left
            Cell::new(self.row, self.col + 1), // right
        ]
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
