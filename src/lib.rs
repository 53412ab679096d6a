//! Divide-and-conquer L-tromino tiling of deficient `2^n × 2^n` boards
//!
//! A board with one damaged cell is split into quadrants, a pivot tromino
//! is placed around the center so every quadrant has exactly one excluded
//! cell, and the process repeats down to single cells.

#![forbid(unsafe_code)]

/// Tiling engine, quadrant geometry and placement recording
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Board storage and tiling verification
pub mod spatial;

pub use algorithm::engine::{TilingResult, solve};
pub use io::error::{Result, TilingError};
