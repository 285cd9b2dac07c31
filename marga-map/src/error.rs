//! Error types for marga-map.
//!
//! All variants are caller-precondition violations detected before any
//! mutation takes place. An exhausted search (`NoPath`) is a normal
//! terminal outcome, not an error; see
//! [`StepResult`](crate::search::StepResult).

use crate::core::Cell;
use thiserror::Error;

/// Grid and search error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// Coordinate outside the grid
    #[error("cell {cell} is outside the {size}x{size} grid")]
    OutOfBounds { cell: Cell, size: usize },

    /// Start/goal placement collides with a wall, or a wall toggle
    /// targets the current start or goal
    #[error("wall conflict at cell {cell}: start and goal must stay on open cells")]
    WallConflict { cell: Cell },

    /// Search initialized with a start or goal that is a wall or out of bounds
    #[error("invalid search endpoint at cell {cell}")]
    InvalidEndpoint { cell: Cell },

    /// Grid construction parameters out of range
    #[error("invalid grid parameters: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, MapError>;
