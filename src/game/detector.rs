//! Terminal-state detection: four-in-a-row and full-board draws.

use super::board::Board;
use super::player::Player;

/// Tokens in a row needed to win.
pub const CONNECT: usize = 4;

/// Horizontal, vertical, diagonal `/` and anti-diagonal `\`.
const DIRECTIONS: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// True iff every cell is occupied, regardless of who (if anyone) has won.
pub fn is_drawn(board: &Board) -> bool {
    board.is_full()
}

/// True iff `side` has at least four consecutive tokens in any direction.
pub fn is_won_by(board: &Board, side: Player) -> bool {
    winning_line(board, side).is_some()
}

/// The first four cells of a winning run for `side`, as `(column, row)`.
///
/// Each direction walks every maximal line exactly once, starting from cells
/// whose predecessor lies off the board, so the scan is linear in the board
/// size per direction.
pub fn winning_line(board: &Board, side: Player) -> Option<[(usize, usize); CONNECT]> {
    let target = side.to_cell();

    for (dc, dr) in DIRECTIONS {
        for col in 0..board.width() as isize {
            for row in 0..board.height() as isize {
                if board.is_in_bounds(col - dc, row - dr) {
                    continue;
                }

                let mut streak = 0;
                let (mut c, mut r) = (col, row);
                while let Some(cell) = board.cell_at(c, r) {
                    if cell == target {
                        streak += 1;
                        if streak == CONNECT {
                            return Some(run_ending_at(c, r, dc, dr));
                        }
                    } else {
                        streak = 0;
                    }
                    c += dc;
                    r += dr;
                }
            }
        }
    }

    None
}

fn run_ending_at(col: isize, row: isize, dc: isize, dr: isize) -> [(usize, usize); CONNECT] {
    let mut cells = [(0, 0); CONNECT];
    for (i, slot) in cells.iter_mut().enumerate() {
        let back = (CONNECT - 1 - i) as isize;
        *slot = ((col - back * dc) as usize, (row - back * dr) as usize);
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Cell;

    fn board_with(width: usize, height: usize, tokens: &[(usize, Cell)]) -> Board {
        let mut board = Board::new(width, height).unwrap();
        for &(col, cell) in tokens {
            board.apply_move(col, cell).unwrap();
        }
        board
    }

    #[test]
    fn test_empty_board_has_no_winner() {
        let board = Board::default();
        assert!(!is_won_by(&board, Player::A));
        assert!(!is_won_by(&board, Player::B));
        assert!(!is_drawn(&board));
    }

    #[test]
    fn test_horizontal_win() {
        let board = board_with(
            7,
            6,
            &[
                (2, Cell::PlayerA),
                (3, Cell::PlayerA),
                (4, Cell::PlayerA),
                (5, Cell::PlayerA),
            ],
        );
        assert!(is_won_by(&board, Player::A));
        assert!(!is_won_by(&board, Player::B));
        assert_eq!(
            winning_line(&board, Player::A),
            Some([(2, 0), (3, 0), (4, 0), (5, 0)])
        );
    }

    #[test]
    fn test_vertical_win() {
        let board = board_with(7, 6, &[(3, Cell::PlayerB); 4]);
        assert!(is_won_by(&board, Player::B));
        assert_eq!(
            winning_line(&board, Player::B),
            Some([(3, 0), (3, 1), (3, 2), (3, 3)])
        );
    }

    #[test]
    fn test_three_in_a_row_is_not_a_win() {
        let tokens: Vec<_> = (0..3).map(|col| (col, Cell::PlayerA)).collect();
        let board = board_with(7, 6, &tokens);
        assert!(!is_won_by(&board, Player::A));

        let board = board_with(7, 6, &[(6, Cell::PlayerB); 3]);
        assert!(!is_won_by(&board, Player::B));
    }

    #[test]
    fn test_interrupted_run_is_not_a_win() {
        let board = board_with(
            7,
            6,
            &[
                (0, Cell::PlayerA),
                (1, Cell::PlayerA),
                (2, Cell::PlayerB),
                (3, Cell::PlayerA),
                (4, Cell::PlayerA),
            ],
        );
        assert!(!is_won_by(&board, Player::A));
    }

    #[test]
    fn test_diagonal_up_win() {
        // (0,0) (1,1) (2,2) (3,3) for B, filled with A underneath
        let board = board_with(
            4,
            4,
            &[
                (0, Cell::PlayerB),
                (1, Cell::PlayerA),
                (1, Cell::PlayerB),
                (2, Cell::PlayerA),
                (2, Cell::PlayerA),
                (2, Cell::PlayerB),
                (3, Cell::PlayerA),
                (3, Cell::PlayerA),
                (3, Cell::PlayerA),
                (3, Cell::PlayerB),
            ],
        );
        assert!(is_won_by(&board, Player::B));
        assert!(!is_won_by(&board, Player::A));
        assert_eq!(
            winning_line(&board, Player::B),
            Some([(0, 0), (1, 1), (2, 2), (3, 3)])
        );
    }

    #[test]
    fn test_anti_diagonal_win() {
        // (0,3) (1,2) (2,1) (3,0) for B
        let board = board_with(
            4,
            4,
            &[
                (0, Cell::PlayerA),
                (0, Cell::PlayerA),
                (0, Cell::PlayerA),
                (0, Cell::PlayerB),
                (1, Cell::PlayerA),
                (1, Cell::PlayerA),
                (1, Cell::PlayerB),
                (2, Cell::PlayerA),
                (2, Cell::PlayerB),
                (3, Cell::PlayerB),
            ],
        );
        assert!(is_won_by(&board, Player::B));
        assert_eq!(
            winning_line(&board, Player::B),
            Some([(0, 3), (1, 2), (2, 1), (3, 0)])
        );
    }

    #[test]
    fn test_diagonal_away_from_origin() {
        // `/` run from (3,1) to (6,4) on the standard board
        let mut board = Board::default();
        let fill = |board: &mut Board, col: usize, below: usize| {
            for _ in 0..below {
                board.apply_move(col, Cell::PlayerB).unwrap();
            }
            board.apply_move(col, Cell::PlayerA).unwrap();
        };
        fill(&mut board, 3, 1);
        fill(&mut board, 4, 2);
        fill(&mut board, 5, 3);
        assert!(!is_won_by(&board, Player::A));
        fill(&mut board, 6, 4);
        assert!(is_won_by(&board, Player::A));
    }

    #[test]
    fn test_run_longer_than_four_still_wins() {
        let tokens: Vec<_> = (0..5).map(|col| (col, Cell::PlayerA)).collect();
        let board = board_with(7, 6, &tokens);
        assert!(is_won_by(&board, Player::A));
    }

    #[test]
    fn test_small_board_never_wins() {
        let tokens: Vec<_> = (0..3).map(|col| (col, Cell::PlayerA)).collect();
        let board = board_with(3, 3, &tokens);
        assert!(!is_won_by(&board, Player::A));
    }

    #[test]
    fn test_full_board_without_winner_is_drawn() {
        // Columns alternate tokens vertically; column pairs flip the phase,
        // which caps every line at two.
        let phase = [false, false, true, true, false, false, true];
        let mut board = Board::default();
        for (col, &flip) in phase.iter().enumerate() {
            for row in 0..6 {
                let cell = if (row % 2 == 1) != flip {
                    Cell::PlayerB
                } else {
                    Cell::PlayerA
                };
                board.apply_move(col, cell).unwrap();
            }
        }
        assert!(is_drawn(&board));
        assert!(!is_won_by(&board, Player::A));
        assert!(!is_won_by(&board, Player::B));
    }
}
