//! Square board storage for deficient 2^n grids
//!
//! The board owns a dense `Array2<Cell>` and only exposes mutation to the
//! tiling recursion inside the crate. Callers read finished boards through
//! [`Board::get`], [`Board::tile_id`] and [`Board::positions`].

use crate::io::configuration::MAX_ORDER;
use crate::io::error::{Result, invalid_argument};
use ndarray::Array2;
use std::fmt;

/// Identifier shared by the three cells of one placed tromino (starts at 1)
pub type TileId = u32;

/// Zero-based `(row, col)` coordinate with the origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Row index
    pub row: usize,
    /// Column index
    pub col: usize,
}

impl Position {
    /// Create a position from row and column indices
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// Contents of a single board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    /// Not yet covered by any tromino
    #[default]
    Empty,
    /// The single forbidden cell excluded from the tiling
    Damaged,
    /// Covered by the tromino with this id
    Tile(TileId),
}

impl Cell {
    /// Tile id if this cell is covered by a tromino
    pub const fn tile_id(self) -> Option<TileId> {
        match self {
            Self::Tile(id) => Some(id),
            Self::Empty | Self::Damaged => None,
        }
    }
}

/// A `2^order × 2^order` grid of cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Array2<Cell>,
    order: u32,
}

impl Board {
    /// Allocate an empty board of side `2^order`
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `order` is above [`MAX_ORDER`]
    pub fn new(order: u32) -> Result<Self> {
        if order > MAX_ORDER {
            return Err(invalid_argument(
                "order",
                &order,
                &format!("order exceeds the maximum supported order {MAX_ORDER}"),
            ));
        }

        let size = 1usize << order;
        Ok(Self {
            cells: Array2::from_elem((size, size), Cell::Empty),
            order,
        })
    }

    /// Allocate an empty board with `damaged` already marked
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `order` is above [`MAX_ORDER`] or
    /// `damaged` lies off the board
    pub fn with_damaged(order: u32, damaged: Position) -> Result<Self> {
        let mut board = Self::new(order)?;
        if !board.contains(damaged) {
            return Err(invalid_argument(
                "damaged cell",
                &damaged,
                &"damaged cell out of bounds",
            ));
        }
        if let Some(cell) = board.cells.get_mut([damaged.row, damaged.col]) {
            *cell = Cell::Damaged;
        }
        Ok(board)
    }

    /// Board order `n` (side length is `2^n`)
    pub const fn order(&self) -> u32 {
        self.order
    }

    /// Side length of the board
    pub fn size(&self) -> usize {
        self.cells.nrows()
    }

    /// Whether `pos` lies on the board
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.size() && pos.col < self.size()
    }

    /// Cell at `pos`, or `None` when off the board
    pub fn get(&self, pos: Position) -> Option<Cell> {
        self.cells.get([pos.row, pos.col]).copied()
    }

    /// Tile id covering `pos`, if any
    pub fn tile_id(&self, pos: Position) -> Option<TileId> {
        self.get(pos).and_then(Cell::tile_id)
    }

    /// First damaged cell in row-major order
    pub fn damaged(&self) -> Option<Position> {
        self.cells
            .indexed_iter()
            .find(|(_, cell)| **cell == Cell::Damaged)
            .map(|((row, col), _)| Position::new(row, col))
    }

    /// Iterate every cell together with its position in row-major order
    pub fn positions(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((row, col), cell)| (Position::new(row, col), *cell))
    }

    // Off-board writes are ignored; the recursion only targets in-range cells
    pub(crate) fn place(&mut self, pos: Position, id: TileId) {
        if let Some(cell) = self.cells.get_mut([pos.row, pos.col]) {
            *cell = Cell::Tile(id);
        }
    }
}
