//! Core types for the marga-map grid library.

mod cell;

pub use cell::Cell;
