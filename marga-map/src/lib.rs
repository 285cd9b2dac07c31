//! # Marga-Map: Grid Pathfinding Core
//!
//! Occupancy grid and stepped A* search for an interactive pathfinding
//! demonstrator. The search engine yields control after every node
//! expansion so a host can render the frontier and visited sets while
//! the search is still running.
//!
//! ## Quick Start
//!
//! ```rust
//! use marga_map::{Cell, MazeGrid, SteppedAStar, StepResult};
//!
//! // Reproducible 20x20 maze, 30% walls
//! let mut grid = MazeGrid::generate(20, 0.3, 42)?;
//! grid.toggle_wall(Cell::new(5, 5)).ok(); // user edit
//!
//! let mut search = SteppedAStar::init(&grid, grid.start(), grid.goal())?;
//! loop {
//!     match search.step() {
//!         StepResult::InProgress(snapshot) => {
//!             // render snapshot.frontier / snapshot.visited here
//!             let _ = snapshot.expanded;
//!         }
//!         StepResult::Found(path) => {
//!             println!("path: {} moves", path.moves());
//!             break;
//!         }
//!         StepResult::NoPath => break,
//!     }
//! }
//! # Ok::<(), marga_map::MapError>(())
//! ```
//!
//! ## Architecture
//!
//! - [`core`]: the [`Cell`] coordinate type
//! - [`grid`]: [`MazeGrid`] occupancy storage with seeded generation
//! - [`search`]: the stepped engine and its result types
//! - [`error`]: precondition errors ([`MapError`])
//!
//! The grid is fixed to 4-connected movement with a Manhattan
//! heuristic; on a unit-cost grid the heuristic is admissible and
//! consistent, so returned paths are shortest.

pub mod core;
pub mod error;
pub mod grid;
pub mod search;

pub use crate::core::Cell;
pub use error::{MapError, Result};
pub use grid::MazeGrid;
pub use search::{CostEntry, Path, SearchSnapshot, SearchStatus, StepResult, SteppedAStar};
