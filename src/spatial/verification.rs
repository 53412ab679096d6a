//! Independent checks of the tiling laws on finished boards and step logs
//!
//! Neither check reuses the recursion: `verify_board` inspects cell contents
//! only, and `verify_steps` replays a step log over a coverage bitmap.

use bitvec::prelude::*;

use crate::algorithm::steps::TilingStep;
use crate::io::error::{Result, inconsistent};
use crate::spatial::board::{Board, Cell, Position, TileId};

/// Facts established by a successful [`verify_board`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TilingSummary {
    /// Number of distinct trominoes on the board
    pub tiles: u32,
    /// The damaged cell
    pub damaged: Position,
}

// Bounding box and count of the cells seen so far for one tile id
#[derive(Debug, Clone, Copy)]
struct TileExtent {
    count: u8,
    min: Position,
    max: Position,
}

impl TileExtent {
    const fn start(pos: Position) -> Self {
        Self {
            count: 1,
            min: pos,
            max: pos,
        }
    }

    fn include(&mut self, pos: Position) {
        self.count = self.count.saturating_add(1);
        self.min = Position::new(self.min.row.min(pos.row), self.min.col.min(pos.col));
        self.max = Position::new(self.max.row.max(pos.row), self.max.col.max(pos.col));
    }

    // Three distinct cells inside a 2x2 box are always an L
    const fn is_tromino(&self) -> bool {
        self.count == 3 && self.max.row - self.min.row == 1 && self.max.col - self.min.col == 1
    }
}

/// Check that `board` is a complete, valid L-tromino tiling
///
/// # Errors
///
/// Returns `InconsistentTiling` if:
/// - the board has no damaged cell, or more than one
/// - any cell is still empty
/// - tile ids are not exactly `1..=tiles`
/// - some tile id does not cover exactly three cells forming an L
pub fn verify_board(board: &Board) -> Result<TilingSummary> {
    let mut damaged = None;
    let mut extents: Vec<Option<TileExtent>> = Vec::new();

    for (pos, cell) in board.positions() {
        match cell {
            Cell::Empty => return Err(inconsistent(Some(pos), &"cell is not covered")),
            Cell::Damaged => {
                if damaged.replace(pos).is_some() {
                    return Err(inconsistent(Some(pos), &"second damaged cell"));
                }
            }
            Cell::Tile(0) => return Err(inconsistent(Some(pos), &"tile id 0 is reserved")),
            Cell::Tile(id) => {
                let slot = (id - 1) as usize;
                if slot >= extents.len() {
                    extents.resize(slot + 1, None);
                }
                if let Some(extent) = extents.get_mut(slot) {
                    match extent {
                        Some(seen) => seen.include(pos),
                        None => *extent = Some(TileExtent::start(pos)),
                    }
                }
            }
        }
    }

    let damaged = damaged.ok_or_else(|| inconsistent(None, &"board has no damaged cell"))?;

    for (slot, extent) in extents.iter().enumerate() {
        let id = slot + 1;
        match extent {
            None => return Err(inconsistent(None, &format!("tile {id} is missing"))),
            Some(extent) if !extent.is_tromino() => {
                return Err(inconsistent(
                    Some(extent.min),
                    &format!("tile {id} is not an L-tromino"),
                ));
            }
            Some(_) => {}
        }
    }

    Ok(TilingSummary {
        tiles: extents.len() as u32,
        damaged,
    })
}

/// Check that `steps` replays into exactly the tiling held by `board`
///
/// # Errors
///
/// Returns `InconsistentTiling` if:
/// - step ids do not run `1, 2, 3, ...` in order
/// - a step names a cell off the board, the damaged cell, or a cell already
///   claimed by an earlier step
/// - a step's cells do not carry its id on the board
/// - some non-damaged cell is never claimed
pub fn verify_steps(board: &Board, steps: &[TilingStep]) -> Result<()> {
    let size = board.size();
    let mut covered = bitvec![0; size * size];

    for (expected, step) in (1..).zip(steps) {
        let expected: TileId = expected;
        if step.tile_id != expected {
            return Err(inconsistent(
                None,
                &format!("step {expected} records tile {}", step.tile_id),
            ));
        }

        for pos in step.cells {
            match board.get(pos) {
                None => return Err(inconsistent(Some(pos), &"step cell is off the board")),
                Some(Cell::Tile(id)) if id == step.tile_id => {}
                Some(_) => {
                    return Err(inconsistent(
                        Some(pos),
                        &format!("board does not hold tile {} here", step.tile_id),
                    ));
                }
            }

            let index = pos.row * size + pos.col;
            if covered.replace(index, true) {
                return Err(inconsistent(Some(pos), &"cell claimed twice"));
            }
        }
    }

    if let Some(damaged) = board.damaged() {
        covered.set(damaged.row * size + damaged.col, true);
    }

    covered.first_zero().map_or(Ok(()), |index| {
        Err(inconsistent(
            Some(Position::new(index / size, index % size)),
            &"cell is not claimed by any step",
        ))
    })
}
