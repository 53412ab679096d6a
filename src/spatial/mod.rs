//! Spatial data structures for tiled boards
//!
//! This module contains:
//! - Board storage with typed cells and positions
//! - Independent verification of finished tilings

/// Board, cell and position types
pub mod board;
/// Tiling law checks over boards and step logs
pub mod verification;

pub use board::{Board, Cell, Position, TileId};
