/// Request validation and the `solve` entry point
pub mod engine;
/// Regions, quadrants and the per-quadrant delta table
pub mod quadrant;
/// Recursive pivot tromino placement
pub mod recursion;
/// Placement log entries and the optional recorder
pub mod steps;
