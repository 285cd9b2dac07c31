//! Square occupancy grid with start/goal bookkeeping.
//!
//! [`MazeGrid`] owns the wall data together with the current start and
//! goal cells, so the invariant "start and goal are always open" can be
//! enforced at every mutation: a wall toggle targeting either endpoint
//! and an endpoint move onto a wall are both rejected before any state
//! changes.

use crate::core::Cell;
use crate::error::{MapError, Result};
use log::{debug, trace};
use rand::prelude::*;

/// Square boolean occupancy grid (`true` = wall).
///
/// Cells are addressed as (row, col) with (0, 0) at the top-left
/// corner. The grid dimension is fixed at construction.
#[derive(Clone, Debug)]
pub struct MazeGrid {
    /// Row-major wall flags, `size * size` entries
    walls: Vec<bool>,
    /// Grid dimension in cells
    size: usize,
    /// Current search start; always open
    start: Cell,
    /// Current search goal; always open
    goal: Cell,
}

impl MazeGrid {
    /// Create an all-open grid with start at (0, 0) and goal at the
    /// opposite corner.
    pub fn open(size: usize) -> Result<Self> {
        Self::check_params(size, 0.0)?;
        Ok(Self {
            walls: vec![false; size * size],
            size,
            start: Cell::new(0, 0),
            goal: Cell::new(size as i32 - 1, size as i32 - 1),
        })
    }

    /// Generate a random maze: each cell is independently a wall with
    /// probability `wall_probability`, except the two corner cells
    /// (0, 0) and (n-1, n-1) which are forced open and become the
    /// initial start and goal.
    ///
    /// Generation is deterministic for a given non-zero `seed`;
    /// `seed == 0` draws a seed from OS entropy.
    pub fn generate(size: usize, wall_probability: f64, seed: u64) -> Result<Self> {
        Self::check_params(size, wall_probability)?;

        let mut rng = if seed == 0 {
            StdRng::from_os_rng()
        } else {
            StdRng::seed_from_u64(seed)
        };

        let mut grid = Self::open(size)?;
        for wall in grid.walls.iter_mut() {
            *wall = rng.random::<f64>() < wall_probability;
        }

        // Start and goal corners are always open
        let start_idx = grid.index(grid.start);
        let goal_idx = grid.index(grid.goal);
        grid.walls[start_idx] = false;
        grid.walls[goal_idx] = false;

        debug!(
            "[MazeGrid] generated {}x{} grid: {} walls (p={:.2}, seed={})",
            size,
            size,
            grid.walls.iter().filter(|&&w| w).count(),
            wall_probability,
            seed
        );
        Ok(grid)
    }

    fn check_params(size: usize, wall_probability: f64) -> Result<()> {
        if size < 2 {
            return Err(MapError::InvalidConfig(format!(
                "grid size must be at least 2, got {}",
                size
            )));
        }
        if !(0.0..1.0).contains(&wall_probability) {
            return Err(MapError::InvalidConfig(format!(
                "wall probability must be in [0, 1), got {}",
                wall_probability
            )));
        }
        Ok(())
    }

    /// Grid dimension in cells
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Current search start
    #[inline]
    pub fn start(&self) -> Cell {
        self.start
    }

    /// Current search goal
    #[inline]
    pub fn goal(&self) -> Cell {
        self.goal
    }

    /// Check if a cell lies within grid bounds
    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row >= 0
            && cell.col >= 0
            && (cell.row as usize) < self.size
            && (cell.col as usize) < self.size
    }

    #[inline]
    fn index(&self, cell: Cell) -> usize {
        cell.row as usize * self.size + cell.col as usize
    }

    fn check_bounds(&self, cell: Cell) -> Result<()> {
        if self.contains(cell) {
            Ok(())
        } else {
            Err(MapError::OutOfBounds {
                cell,
                size: self.size,
            })
        }
    }

    /// Check if a cell is open (not a wall)
    pub fn is_open(&self, cell: Cell) -> Result<bool> {
        self.check_bounds(cell)?;
        Ok(!self.walls[self.index(cell)])
    }

    /// Check if a cell is a wall
    pub fn is_wall(&self, cell: Cell) -> Result<bool> {
        Ok(!self.is_open(cell)?)
    }

    /// Flip the wall state of a cell.
    ///
    /// Rejected with [`MapError::WallConflict`] when the cell is the
    /// current start or goal; the grid is left unchanged.
    pub fn toggle_wall(&mut self, cell: Cell) -> Result<()> {
        self.check_bounds(cell)?;
        if cell == self.start || cell == self.goal {
            return Err(MapError::WallConflict { cell });
        }
        let idx = self.index(cell);
        self.walls[idx] = !self.walls[idx];
        trace!(
            "[MazeGrid] cell {} -> {}",
            cell,
            if self.walls[idx] { "wall" } else { "open" }
        );
        Ok(())
    }

    /// Move the search start to an open cell
    pub fn set_start(&mut self, cell: Cell) -> Result<()> {
        self.check_endpoint(cell)?;
        self.start = cell;
        trace!("[MazeGrid] start moved to {}", cell);
        Ok(())
    }

    /// Move the search goal to an open cell
    pub fn set_goal(&mut self, cell: Cell) -> Result<()> {
        self.check_endpoint(cell)?;
        self.goal = cell;
        trace!("[MazeGrid] goal moved to {}", cell);
        Ok(())
    }

    fn check_endpoint(&self, cell: Cell) -> Result<()> {
        if !self.is_open(cell)? {
            return Err(MapError::WallConflict { cell });
        }
        Ok(())
    }

    /// The up-to-4 axis-adjacent cells that are in-bounds and open,
    /// in fixed (up, down, left, right) order.
    pub fn open_neighbors4(&self, cell: Cell) -> Vec<Cell> {
        cell.neighbors4()
            .into_iter()
            .filter(|&n| self.contains(n) && !self.walls[self.index(n)])
            .collect()
    }
}
