//! # Connect Four
//!
//! Two players drop tokens into the columns of a fixed-size grid; tokens fall
//! to the lowest empty row and the first side to line up four wins. Features a
//! terminal UI built with Ratatui, playable with keyboard or mouse.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, win/draw detection, state machine
//! - [`ui`] — Terminal UI: board view, input handling, event loop
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
