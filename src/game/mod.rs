//! Core Connect Four game logic: board representation, player types, and the
//! turn-taking state machine with win/draw detection.

mod board;
mod player;

pub use board::{Board, Cell, MoveError, DEFAULT_COLS, DEFAULT_ROWS};
pub use player::Player;
