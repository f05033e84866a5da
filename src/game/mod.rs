//! Core Connect Four game logic: board, player, win/draw detection, and the
//! game state machine.

mod board;
pub mod detector;
mod player;
mod state;

pub use board::{Board, Cell, COLS, ROWS};
pub use detector::{is_drawn, is_won_by, winning_line, CONNECT};
pub use player::Player;
pub use state::{DropResult, Game, GameStatus};
