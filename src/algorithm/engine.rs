//! Entry point that validates a request and tiles a whole board

use crate::algorithm::quadrant::Region;
use crate::algorithm::recursion::tile_region;
use crate::algorithm::steps::{StepRecorder, TilingStep};
use crate::io::configuration::{FIRST_TILE_ID, MAX_ORDER};
use crate::io::error::{Result, invalid_argument};
use crate::spatial::board::{Board, Position};
use std::time::{Duration, Instant};

/// Outcome of one `solve` call
///
/// The caller owns every field; nothing is shared with later calls.
#[derive(Debug, Clone)]
pub struct TilingResult {
    /// Fully tiled board with the damaged cell marked
    pub board: Board,
    /// Number of trominoes placed, `(4^n - 1) / 3`
    pub tiles_used: u32,
    /// Placements in pre-order; empty unless logging was requested
    pub steps: Vec<TilingStep>,
    /// Wall time spent in the recursion alone
    pub elapsed: Duration,
}

/// Check `order` and return it as an unsigned board order
///
/// # Errors
///
/// Returns `InvalidArgument` if `order` is negative or above [`MAX_ORDER`]
pub fn validate_order(order: i32) -> Result<u32> {
    let order = u32::try_from(order)
        .map_err(|_negative| invalid_argument("order", &order, &"order must be non-negative"))?;
    if order > MAX_ORDER {
        return Err(invalid_argument(
            "order",
            &order,
            &format!("order exceeds the maximum supported order {MAX_ORDER}"),
        ));
    }
    Ok(order)
}

/// Side length `2^order` of a board with the given order
///
/// # Errors
///
/// Returns `InvalidArgument` under the same conditions as [`validate_order`]
pub fn board_size(order: i32) -> Result<usize> {
    validate_order(order).map(|order| 1usize << order)
}

fn validate_damaged(size: usize, damaged_row: i64, damaged_col: i64) -> Result<Position> {
    let in_bounds = |value: i64| usize::try_from(value).ok().filter(|v| *v < size);
    match (in_bounds(damaged_row), in_bounds(damaged_col)) {
        (Some(row), Some(col)) => Ok(Position::new(row, col)),
        _ => Err(invalid_argument(
            "damaged cell",
            &format!("({damaged_row},{damaged_col})"),
            &"damaged cell out of bounds",
        )),
    }
}

/// Tile a `2^order × 2^order` board around one damaged cell
///
/// Arguments are signed so that out-of-range values from callers reach
/// validation instead of wrapping. With `log_steps` set, every placement is
/// returned in [`TilingResult::steps`].
///
/// # Errors
///
/// Returns `InvalidArgument` if the order is negative or too large, or if
/// the damaged cell is outside `[0, 2^order)` on either axis. Validation
/// happens before any allocation.
pub fn solve(
    order: i32,
    damaged_row: i64,
    damaged_col: i64,
    log_steps: bool,
) -> Result<TilingResult> {
    let order = validate_order(order)?;
    let size = 1usize << order;
    let damaged = validate_damaged(size, damaged_row, damaged_col)?;

    log::debug!("tiling {size}x{size} board with damaged cell {damaged}");

    let mut board = Board::with_damaged(order, damaged)?;
    let mut recorder = StepRecorder::new(log_steps);

    let start = Instant::now();
    let next_id = tile_region(
        &mut board,
        Region::whole(size),
        damaged,
        FIRST_TILE_ID,
        &mut recorder,
    );
    let elapsed = start.elapsed();

    let tiles_used = next_id - FIRST_TILE_ID;
    log::debug!("placed {tiles_used} tiles in {elapsed:?}");

    Ok(TilingResult {
        board,
        tiles_used,
        steps: recorder.into_steps(),
        elapsed,
    })
}

/// Expected tromino count `(4^order - 1) / 3` for a board of this order
///
/// Valid for every order up to [`MAX_ORDER`].
pub const fn expected_tiles(order: u32) -> u64 {
    ((1u64 << (2 * order)) - 1) / 3
}
