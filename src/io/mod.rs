/// Command-line parsing and the single-run driver
pub mod cli;
/// Tiling limits and runtime defaults
pub mod configuration;
/// Error types and constructors
pub mod error;
/// PNG export of tiled boards
pub mod image;
