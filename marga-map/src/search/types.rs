//! Stepped A* search types.

use crate::core::Cell;
use std::cmp::Ordering;

/// A queued frontier entry.
///
/// `seq` is the insertion sequence number: among equal `f` keys the
/// earliest-pushed entry pops first, which keeps step sequences
/// reproducible across runs.
#[derive(Clone, Debug)]
pub(super) struct FrontierNode {
    pub cell: Cell,
    /// Priority key: g + Manhattan heuristic at push time
    pub f: u32,
    /// Insertion order tie-break
    pub seq: u64,
}

impl Eq for FrontierNode {}

impl PartialEq for FrontierNode {
    fn eq(&self, other: &Self) -> bool {
        self.cell == other.cell
    }
}

impl Ord for FrontierNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior; earlier seq wins ties
        other.f.cmp(&self.f).then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Search lifecycle state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchStatus {
    /// Frontier is non-empty and the goal has not been reached
    Running,
    /// Goal expanded; path available
    Succeeded,
    /// Frontier drained without reaching the goal
    Exhausted,
}

impl SearchStatus {
    /// Is this a terminal state?
    pub fn is_terminal(&self) -> bool {
        !matches!(self, SearchStatus::Running)
    }
}

/// Read-only view of engine state after one expansion.
///
/// Cell lists are sorted (row-major) so renderers and golden tests see
/// a reproducible order regardless of hash-set iteration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchSnapshot {
    /// The cell expanded by this step
    pub expanded: Cell,
    /// Cells currently queued in the frontier
    pub frontier: Vec<Cell>,
    /// Cells whose cost is finalized
    pub visited: Vec<Cell>,
}

/// Outcome of a single step (or of a full run)
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepResult {
    /// One node expanded; search continues
    InProgress(SearchSnapshot),
    /// Goal reached; shortest path attached
    Found(Path),
    /// Frontier exhausted; no path exists under the current walls
    NoPath,
}

impl StepResult {
    /// Is this a terminal result?
    pub fn is_terminal(&self) -> bool {
        !matches!(self, StepResult::InProgress(_))
    }
}

/// Shortest path from start to goal, both inclusive.
///
/// Adjacent cells are 4-connected and open at the time the search ran;
/// the session invalidates the path when the grid changes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path {
    cells: Vec<Cell>,
}

impl Path {
    pub(super) fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    /// Path cells in start-to-goal order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Path length in cells (moves + 1)
    pub fn len_cells(&self) -> usize {
        self.cells.len()
    }

    /// Number of moves along the path
    pub fn moves(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }

    /// Check whether a cell lies on the path
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }
}

/// One `(cell, h, g, f)` record along the final path, for the
/// diagnostic trace.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CostEntry {
    pub cell: Cell,
    /// Manhattan heuristic to the goal
    pub h: u32,
    /// Cost from the start
    pub g: u32,
    /// Priority key `g + h`
    pub f: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    #[test]
    fn test_frontier_pops_min_f_then_insertion_order() {
        let mut heap = BinaryHeap::new();
        heap.push(FrontierNode {
            cell: Cell::new(0, 0),
            f: 5,
            seq: 0,
        });
        heap.push(FrontierNode {
            cell: Cell::new(1, 1),
            f: 3,
            seq: 1,
        });
        heap.push(FrontierNode {
            cell: Cell::new(2, 2),
            f: 3,
            seq: 2,
        });

        assert_eq!(heap.pop().unwrap().cell, Cell::new(1, 1));
        assert_eq!(heap.pop().unwrap().cell, Cell::new(2, 2));
        assert_eq!(heap.pop().unwrap().cell, Cell::new(0, 0));
    }

    #[test]
    fn test_path_accessors() {
        let path = Path::new(vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(1, 1)]);
        assert_eq!(path.len_cells(), 3);
        assert_eq!(path.moves(), 2);
        assert!(path.contains(Cell::new(0, 1)));
        assert!(!path.contains(Cell::new(1, 0)));
    }

    #[test]
    fn test_status_terminal() {
        assert!(!SearchStatus::Running.is_terminal());
        assert!(SearchStatus::Succeeded.is_terminal());
        assert!(SearchStatus::Exhausted.is_terminal());
    }

    #[test]
    fn test_step_result_terminal() {
        assert!(StepResult::NoPath.is_terminal());
        assert!(StepResult::Found(Path::new(vec![])).is_terminal());
        assert!(!StepResult::InProgress(SearchSnapshot {
            expanded: Cell::new(0, 0),
            frontier: vec![],
            visited: vec![],
        })
        .is_terminal());
    }
}
