//! Terminal UI: the board view, keyboard and mouse input, and the event loop
//! that drives a [`Game`](crate::game::Game).

mod app;
pub mod board_widget;
mod game_view;

pub use app::App;
pub use board_widget::BoardGeometry;
