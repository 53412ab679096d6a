//! Tests for tiling law checks on boards and step logs

#[cfg(test)]
mod tests {
    use trominoes::TilingError;
    use trominoes::algorithm::engine::solve;
    use trominoes::algorithm::steps::TilingStep;
    use trominoes::spatial::verification::{verify_board, verify_steps};
    use trominoes::spatial::{Board, Position};

    fn failure_position(result: trominoes::Result<impl Sized>) -> Option<Option<Position>> {
        match result {
            Err(TilingError::InconsistentTiling { position, .. }) => Some(position),
            _ => None,
        }
    }

    // Tests solved boards pass both checks
    // Verified by skipping the damaged cell mark before the final coverage check
    #[test]
    fn test_solved_boards_verify() {
        for (order, row, col) in [(0, 0, 0), (1, 1, 0), (3, 5, 2), (4, 15, 15)] {
            let Ok(result) = solve(order, row, col, true) else {
                unreachable!("valid request must succeed");
            };

            let summary = verify_board(&result.board);
            assert!(
                summary.is_ok_and(|s| s.tiles == result.tiles_used
                    && s.damaged == Position::new(row as usize, col as usize))
            );
            assert!(verify_steps(&result.board, &result.steps).is_ok());
        }
    }

    // Tests an untiled board is reported at its first empty cell
    // Verified by skipping empty cells in verify_board
    #[test]
    fn test_empty_cell_detected() {
        let Ok(board) = Board::with_damaged(1, Position::new(1, 1)) else {
            unreachable!("damaged cell is on the board");
        };
        assert_eq!(
            failure_position(verify_board(&board)),
            Some(Some(Position::new(0, 0)))
        );
    }

    // Tests a step log missing its last placement leaves cells unclaimed
    // Verified by skipping the final first_zero check
    #[test]
    fn test_truncated_log_detected() {
        let Ok(result) = solve(2, 1, 2, true) else {
            unreachable!("valid request must succeed");
        };

        let truncated = result.steps.get(..4).unwrap_or_default();
        assert!(failure_position(verify_steps(&result.board, truncated)).is_some());
    }

    // Tests out-of-order tile ids are rejected
    // Verified by removing the step id sequence check
    #[test]
    fn test_misnumbered_log_detected() {
        let Ok(result) = solve(2, 0, 0, true) else {
            unreachable!("valid request must succeed");
        };

        let mut steps = result.steps;
        steps.swap(0, 1);
        assert_eq!(failure_position(verify_steps(&result.board, &steps)), Some(None));
    }

    // Tests a step pointing at cells of a different tile is rejected
    // Verified by accepting any cell contents on the board
    #[test]
    fn test_step_disagreeing_with_board_detected() {
        let Ok(result) = solve(1, 0, 0, true) else {
            unreachable!("valid request must succeed");
        };

        let forged = [TilingStep::new(
            1,
            [Position::new(0, 0), Position::new(0, 1), Position::new(1, 1)],
        )];
        assert_eq!(
            failure_position(verify_steps(&result.board, &forged)),
            Some(Some(Position::new(0, 0)))
        );
    }

    // Tests a step naming an off-board cell is rejected
    // Verified by treating off-board cells as matching
    #[test]
    fn test_off_board_step_detected() {
        let Ok(result) = solve(1, 0, 0, true) else {
            unreachable!("valid request must succeed");
        };

        let forged = [TilingStep::new(
            1,
            [Position::new(0, 1), Position::new(1, 0), Position::new(2, 2)],
        )];
        assert_eq!(
            failure_position(verify_steps(&result.board, &forged)),
            Some(Some(Position::new(2, 2)))
        );
    }
}
