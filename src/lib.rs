//! # Minimax Connect Four
//!
//! A human-versus-computer Connect Four engine. The computer's moves come
//! from a depth-limited minimax search with alpha-beta pruning and a windowed
//! positional heuristic; the search depth doubles as the difficulty setting,
//! with the weaker tiers occasionally playing a random column.
//!
//! ## Modules
//!
//! - [`game`] — Board state machine: gravity drops, turn alternation,
//!   win/draw detection with the exact winning line
//! - [`ai`] — Search engine, heuristic evaluator, difficulty tiers, random
//!   baseline agent
//! - [`session`] — Game session facade: the call surface a front-end drives
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod session;
