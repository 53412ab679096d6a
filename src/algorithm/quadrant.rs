//! Square regions and their four quadrants
//!
//! Every per-quadrant quantity the recursion needs comes from one delta
//! table, so the four symmetric cases share a single code path.

use crate::spatial::board::Position;

/// One of the four equal sub-squares of a region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// Quadrant 0
    TopLeft,
    /// Quadrant 1
    TopRight,
    /// Quadrant 2
    BottomLeft,
    /// Quadrant 3
    BottomRight,
}

impl Quadrant {
    /// All quadrants in scan order
    pub const ALL: [Self; 4] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
    ];

    /// `(row, col)` offset of this quadrant in units of half the region side
    pub const fn delta(self) -> [usize; 2] {
        match self {
            Self::TopLeft => [0, 0],
            Self::TopRight => [0, 1],
            Self::BottomLeft => [1, 0],
            Self::BottomRight => [1, 1],
        }
    }

    /// The three other quadrants, in scan order
    pub const fn others(self) -> [Self; 3] {
        match self {
            Self::TopLeft => [Self::TopRight, Self::BottomLeft, Self::BottomRight],
            Self::TopRight => [Self::TopLeft, Self::BottomLeft, Self::BottomRight],
            Self::BottomLeft => [Self::TopLeft, Self::TopRight, Self::BottomRight],
            Self::BottomRight => [Self::TopLeft, Self::TopRight, Self::BottomLeft],
        }
    }

    const fn from_halves(lower_row: bool, right_col: bool) -> Self {
        match (lower_row, right_col) {
            (false, false) => Self::TopLeft,
            (false, true) => Self::TopRight,
            (true, false) => Self::BottomLeft,
            (true, true) => Self::BottomRight,
        }
    }
}

/// Square sub-board with its top-left corner and side length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// Top-left cell of the region
    pub origin: Position,
    /// Side length (a power of two)
    pub size: usize,
}

impl Region {
    /// Create a region
    pub const fn new(origin: Position, size: usize) -> Self {
        Self { origin, size }
    }

    /// Region covering an entire board of side `size`
    pub const fn whole(size: usize) -> Self {
        Self::new(Position::new(0, 0), size)
    }

    /// Side length of each quadrant
    pub const fn half(&self) -> usize {
        self.size / 2
    }

    /// Whether `pos` lies inside the region
    pub const fn contains(&self, pos: Position) -> bool {
        pos.row >= self.origin.row
            && pos.row < self.origin.row + self.size
            && pos.col >= self.origin.col
            && pos.col < self.origin.col + self.size
    }

    /// Quadrant holding `pos`
    ///
    /// Coordinates on a split line belong to the bottom or right half.
    pub const fn locate(&self, pos: Position) -> Quadrant {
        let half = self.half();
        Quadrant::from_halves(
            pos.row >= self.origin.row + half,
            pos.col >= self.origin.col + half,
        )
    }

    /// Sub-region covered by `quadrant`
    #[must_use]
    pub const fn quadrant(&self, quadrant: Quadrant) -> Self {
        let half = self.half();
        let [dr, dc] = quadrant.delta();
        Self::new(
            Position::new(self.origin.row + dr * half, self.origin.col + dc * half),
            half,
        )
    }

    /// Cell of `quadrant` that touches the exact center of the region
    ///
    /// Only meaningful for regions of side 2 or more.
    pub const fn center_cell(&self, quadrant: Quadrant) -> Position {
        let half = self.half();
        let [dr, dc] = quadrant.delta();
        Position::new(
            self.origin.row + half - 1 + dr,
            self.origin.col + half - 1 + dc,
        )
    }
}
