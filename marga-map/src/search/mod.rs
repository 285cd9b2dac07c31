//! Stepped A* search over a [`MazeGrid`](crate::grid::MazeGrid).
//!
//! - [`SteppedAStar`]: one-expansion-at-a-time engine
//! - [`StepResult`] / [`SearchSnapshot`]: per-step progress reporting
//! - [`Path`] / [`CostEntry`]: result and diagnostic trace types

mod engine;
mod types;

pub use engine::SteppedAStar;
pub use types::{CostEntry, Path, SearchSnapshot, SearchStatus, StepResult};
