//! A tic-tac-toe engine where the computer never loses.
//!
//! The interesting part lives in [`eval`] and [`search`]: a terminal-state
//! evaluator and a minimax search with alpha-beta pruning on top of it.
//! The rest is the plumbing needed to actually play a game against it.

pub mod board;
pub mod core;
pub mod error;
pub mod eval;
pub mod game;
pub mod player;
pub mod search;

pub use board::{Board, Move};
pub use error::{Error, Result};
pub use eval::{evaluate, game_status, is_full, Score};
pub use search::{best_move_for, find_best_move, Searcher};
