//! Placement log entries and the optional recorder that collects them

use crate::spatial::board::{Position, TileId};
use std::fmt;

/// One tromino placement
///
/// Cells are stored in quadrant-scan order (top-left, top-right,
/// bottom-left, bottom-right) with the special quadrant omitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TilingStep {
    /// Id assigned to the tromino
    pub tile_id: TileId,
    /// The three covered cells
    pub cells: [Position; 3],
}

impl TilingStep {
    /// Create a step record
    pub const fn new(tile_id: TileId, cells: [Position; 3]) -> Self {
        Self { tile_id, cells }
    }
}

impl fmt::Display for TilingStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.cells;
        write!(f, "Tile {} placed at {a}, {b}, {c}", self.tile_id)
    }
}

/// Collects steps when logging was requested and does nothing otherwise
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepRecorder {
    /// Placements are not recorded
    Disabled,
    /// Placements are appended in the order they happen
    Recording(Vec<TilingStep>),
}

impl StepRecorder {
    /// Recorder for the caller's logging choice
    pub const fn new(log_steps: bool) -> Self {
        if log_steps {
            Self::Recording(Vec::new())
        } else {
            Self::Disabled
        }
    }

    /// Append a step; a disabled recorder never builds it
    pub fn record(&mut self, step: impl FnOnce() -> TilingStep) {
        if let Self::Recording(steps) = self {
            steps.push(step());
        }
    }

    /// Recorded steps in placement order (empty when disabled)
    pub fn into_steps(self) -> Vec<TilingStep> {
        match self {
            Self::Disabled => Vec::new(),
            Self::Recording(steps) => steps,
        }
    }
}
