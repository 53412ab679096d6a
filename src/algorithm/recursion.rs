//! Divide-and-conquer tromino placement over quadrants

use crate::algorithm::quadrant::{Quadrant, Region};
use crate::algorithm::steps::{StepRecorder, TilingStep};
use crate::spatial::board::{Board, Position, TileId};

/// Tile every cell of `region` except `special`, returning the next free id
///
/// The three center cells outside the special quadrant receive `next_id`
/// before any sub-quadrant is visited, so ids and recorded steps follow a
/// pre-order walk (top-left, top-right, bottom-left, bottom-right). Each
/// sub-quadrant then excludes either the real special cell or the center
/// cell it just gave up to the pivot tromino.
pub fn tile_region(
    board: &mut Board,
    region: Region,
    special: Position,
    next_id: TileId,
    recorder: &mut StepRecorder,
) -> TileId {
    if region.size <= 1 {
        return next_id;
    }

    let special_quadrant = region.locate(special);
    let tile_id = next_id;
    let cells = special_quadrant.others().map(|q| region.center_cell(q));

    for cell in cells {
        board.place(cell, tile_id);
    }
    if log::log_enabled!(log::Level::Trace) {
        let [a, b, c] = cells;
        log::trace!("placed tile {tile_id} at {a}, {b}, {c}");
    }
    recorder.record(|| TilingStep::new(tile_id, cells));

    let mut next = tile_id + 1;
    for quadrant in Quadrant::ALL {
        let sub_special = if quadrant == special_quadrant {
            special
        } else {
            region.center_cell(quadrant)
        };
        next = tile_region(
            board,
            region.quadrant(quadrant),
            sub_special,
            next,
            recorder,
        );
    }
    next
}
