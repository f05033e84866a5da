use log::{debug, info};

use super::board::Board;
use super::detector;
use super::player::Player;
use crate::error::BoardError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Drawn,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Outcome of a single `drop_token` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropResult {
    /// Whether a token was actually placed.
    pub applied: bool,
    /// Status after the call (unchanged when nothing was applied).
    pub status: GameStatus,
    /// Landing cell `(column, row)` of the placed token.
    pub landed: Option<(usize, usize)>,
}

/// A single game: the board, whose turn it is, and whether it is over.
///
/// Moves on a finished game are ignored until [`Game::reset`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    current_side: Player,
    status: GameStatus,
    move_count: usize,
    last_move: Option<(usize, usize)>,
}

impl Game {
    /// Create a fresh game on a `width` x `height` board
    pub fn new(width: usize, height: usize) -> Result<Self, BoardError> {
        Ok(Self::with_board(Board::new(width, height)?))
    }

    fn with_board(board: Board) -> Self {
        Game {
            board,
            current_side: Player::A, // A starts
            status: GameStatus::InProgress,
            move_count: 0,
            last_move: None,
        }
    }

    /// Get the side to move
    pub fn current_side(&self) -> Player {
        self.current_side
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Number of tokens placed since the last reset
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Landing cell of the most recent applied move
    pub fn last_move(&self) -> Option<(usize, usize)> {
        self.last_move
    }

    /// Columns the current side may play; empty once the game is over.
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.board.legal_columns()
    }

    /// The four cells of the winning run, if the game was won.
    pub fn winning_line(&self) -> Option<[(usize, usize); detector::CONNECT]> {
        match self.status {
            GameStatus::Won(side) => detector::winning_line(&self.board, side),
            _ => None,
        }
    }

    /// Drop the current side's token into `column`.
    ///
    /// Full columns, out-of-range columns and moves after the game ended are
    /// no-ops: nothing changes and `applied` is false.
    pub fn drop_token(&mut self, column: usize) -> DropResult {
        let rejected = DropResult {
            applied: false,
            status: self.status,
            landed: None,
        };

        if self.is_terminal() {
            debug!("ignoring drop in column {column}: game is over");
            return rejected;
        }

        let side = self.current_side;
        let Some(row) = self.board.apply_move(column, side.to_cell()) else {
            debug!("ignoring drop in column {column}: not a valid move");
            return rejected;
        };

        self.move_count += 1;
        self.last_move = Some((column, row));
        debug!("{} dropped into column {column}, landed on row {row}", side.name());

        // Win is checked for the side that just moved, before the turn passes.
        if detector::is_won_by(&self.board, side) {
            self.status = GameStatus::Won(side);
            info!("{} wins after {} moves", side.name(), self.move_count);
        } else if detector::is_drawn(&self.board) {
            self.status = GameStatus::Drawn;
            info!("draw after {} moves", self.move_count);
        }

        self.current_side = side.other();

        DropResult {
            applied: true,
            status: self.status,
            landed: Some((column, row)),
        }
    }

    /// Start over on an empty board of the same size, Player A to move.
    pub fn reset(&mut self) {
        let mut board = std::mem::take(&mut self.board);
        board.clear();
        *self = Self::with_board(board);
        debug!("game reset");
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::with_board(Board::default())
    }
}
