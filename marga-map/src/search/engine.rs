//! Stepped A* engine implementation.

use crate::core::Cell;
use crate::error::{MapError, Result};
use crate::grid::MazeGrid;
use log::{debug, trace};
use std::collections::{BinaryHeap, HashMap, HashSet};

use super::types::{CostEntry, FrontierNode, Path, SearchSnapshot, SearchStatus, StepResult};

/// Manhattan heuristic; admissible and consistent on a unit-cost
/// 4-connected grid.
#[inline]
fn heuristic(a: Cell, b: Cell) -> u32 {
    a.manhattan_distance(&b) as u32
}

/// Stepped A* search over a [`MazeGrid`].
///
/// The engine borrows the grid for its whole lifetime and owns all
/// transient search state, so aborting a search is just dropping the
/// engine. Each [`step`](SteppedAStar::step) expands exactly one node
/// and hands back a snapshot of the frontier and visited sets, which
/// is what lets a caller render intermediate search state.
///
/// Lifecycle: construction validates the endpoints and enters
/// `Running`; the engine then moves to `Succeeded` or `Exhausted` and
/// never leaves a terminal state. Re-running means constructing a new
/// engine.
///
/// # Usage
///
/// ```rust
/// use marga_map::{MazeGrid, SteppedAStar, StepResult};
///
/// let grid = MazeGrid::open(5)?;
/// let mut search = SteppedAStar::init(&grid, grid.start(), grid.goal())?;
/// match search.run_to_completion() {
///     StepResult::Found(path) => assert_eq!(path.moves(), 8),
///     _ => panic!("open grid must have a path"),
/// }
/// # Ok::<(), marga_map::MapError>(())
/// ```
pub struct SteppedAStar<'a> {
    grid: &'a MazeGrid,
    start: Cell,
    goal: Cell,
    status: SearchStatus,
    /// Best known cost from start
    g: HashMap<Cell, u32>,
    /// Priority key `g + h` as last written
    f: HashMap<Cell, u32>,
    /// Predecessor links for path reconstruction; no entry for start
    came_from: HashMap<Cell, Cell>,
    frontier: BinaryHeap<FrontierNode>,
    /// Frontier membership for O(1) queued checks
    queued: HashSet<Cell>,
    visited: HashSet<Cell>,
    next_seq: u64,
    /// Set once on success; lets terminal `step` calls repeat `Found`
    path: Option<Path>,
}

impl<'a> SteppedAStar<'a> {
    /// Initialize a search from `start` to `goal`.
    ///
    /// Fails with [`MapError::InvalidEndpoint`] when either endpoint
    /// is out of bounds or a wall.
    pub fn init(grid: &'a MazeGrid, start: Cell, goal: Cell) -> Result<Self> {
        for cell in [start, goal] {
            if !grid.contains(cell) || !grid.is_open(cell)? {
                debug!("[StepSearch] init rejected: endpoint {} invalid", cell);
                return Err(MapError::InvalidEndpoint { cell });
            }
        }

        let h0 = heuristic(start, goal);
        trace!(
            "[StepSearch] init: start={} goal={} h0={}",
            start,
            goal,
            h0
        );

        let mut engine = Self {
            grid,
            start,
            goal,
            status: SearchStatus::Running,
            g: HashMap::new(),
            f: HashMap::new(),
            came_from: HashMap::new(),
            frontier: BinaryHeap::new(),
            queued: HashSet::new(),
            visited: HashSet::new(),
            next_seq: 0,
            path: None,
        };
        engine.g.insert(start, 0);
        engine.f.insert(start, h0);
        engine.push_frontier(start, h0);
        Ok(engine)
    }

    /// Current lifecycle state
    pub fn status(&self) -> SearchStatus {
        self.status
    }

    /// Search start cell
    pub fn start(&self) -> Cell {
        self.start
    }

    /// Search goal cell
    pub fn goal(&self) -> Cell {
        self.goal
    }

    /// The path found so far (set only in `Succeeded`)
    pub fn path(&self) -> Option<&Path> {
        self.path.as_ref()
    }

    /// Frontier membership in row-major order
    pub fn frontier_cells(&self) -> Vec<Cell> {
        let mut cells: Vec<Cell> = self.queued.iter().copied().collect();
        cells.sort();
        cells
    }

    /// Visited (closed) set in row-major order
    pub fn visited_cells(&self) -> Vec<Cell> {
        let mut cells: Vec<Cell> = self.visited.iter().copied().collect();
        cells.sort();
        cells
    }

    /// Expand one node.
    ///
    /// In `Running`: pops the minimum-f frontier cell (insertion order
    /// breaks ties; stale entries for already-visited cells are
    /// discarded), finalizes it, and either reconstructs the path
    /// (goal reached), reports exhaustion, or relaxes the open
    /// 4-neighbors and returns a snapshot.
    ///
    /// In a terminal state this returns the terminal result again.
    pub fn step(&mut self) -> StepResult {
        match self.status {
            SearchStatus::Succeeded => {
                // Terminal states repeat their result
                return StepResult::Found(self.path.clone().unwrap_or_else(|| Path::new(vec![])));
            }
            SearchStatus::Exhausted => return StepResult::NoPath,
            SearchStatus::Running => {}
        }

        let current = loop {
            match self.frontier.pop() {
                None => {
                    debug!(
                        "[StepSearch] exhausted: no path after visiting {} cells",
                        self.visited.len()
                    );
                    self.status = SearchStatus::Exhausted;
                    return StepResult::NoPath;
                }
                // Skip stale entries; the cell was already expanded
                // under a better key
                Some(node) if self.visited.contains(&node.cell) => continue,
                Some(node) => break node.cell,
            }
        };

        self.queued.remove(&current);
        self.visited.insert(current);

        if current == self.goal {
            let path = self.reconstruct_path();
            trace!(
                "[StepSearch] success: path length={} cells, visited={}",
                path.len_cells(),
                self.visited.len()
            );
            self.status = SearchStatus::Succeeded;
            self.path = Some(path.clone());
            return StepResult::Found(path);
        }

        let g_current = self.g[&current];
        for neighbor in self.grid.open_neighbors4(current) {
            if self.visited.contains(&neighbor) {
                continue;
            }

            let tentative_g = g_current + 1;
            let known_g = self.g.get(&neighbor).copied().unwrap_or(u32::MAX);
            if tentative_g < known_g {
                self.came_from.insert(neighbor, current);
                self.g.insert(neighbor, tentative_g);
                let f = tentative_g + heuristic(neighbor, self.goal);
                self.f.insert(neighbor, f);
                // A cell already queued keeps its old heap key; the
                // maps above carry the improved cost
                if !self.queued.contains(&neighbor) {
                    self.push_frontier(neighbor, f);
                }
            }
        }

        StepResult::InProgress(self.snapshot(current))
    }

    /// Drive the search to a terminal result without yielding.
    pub fn run_to_completion(&mut self) -> StepResult {
        loop {
            let result = self.step();
            if self.status.is_terminal() {
                return result;
            }
        }
    }

    /// `(cell, h, g, f)` records along the final path; empty unless
    /// the search succeeded.
    pub fn cost_trace(&self) -> Vec<CostEntry> {
        let Some(path) = &self.path else {
            return Vec::new();
        };
        path.cells()
            .iter()
            .map(|&cell| CostEntry {
                cell,
                h: heuristic(cell, self.goal),
                g: self.g[&cell],
                f: self.f[&cell],
            })
            .collect()
    }

    fn push_frontier(&mut self, cell: Cell, f: u32) {
        self.frontier.push(FrontierNode {
            cell,
            f,
            seq: self.next_seq,
        });
        self.next_seq += 1;
        self.queued.insert(cell);
    }

    fn snapshot(&self, expanded: Cell) -> SearchSnapshot {
        SearchSnapshot {
            expanded,
            frontier: self.frontier_cells(),
            visited: self.visited_cells(),
        }
    }

    fn reconstruct_path(&self) -> Path {
        let mut cells = Vec::new();
        let mut current = self.goal;
        while let Some(&prev) = self.came_from.get(&current) {
            cells.push(current);
            current = prev;
        }
        cells.push(current); // start
        cells.reverse();
        Path::new(cells)
    }
}
