//! The core abstractions for this application
//!

use std::fmt::Display;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::{board::Board, board::Move, error::Result};

/// The two marks. Scores are always reported from the point of view of
/// `Cross`: the human plays `Cross` and maximizes, the computer plays
/// `Naught` and minimizes.
#[derive(
    Clone, Copy, PartialEq, Eq, Debug, Hash, PartialOrd, Ord, Serialize, Deserialize, ValueEnum,
)]
pub enum PlayerMark {
    #[value(name = "x")]
    Cross,
    #[value(name = "o")]
    Naught,
}

impl PlayerMark {
    pub fn other(&self) -> Self {
        match *self {
            Self::Cross => Self::Naught,
            Self::Naught => Self::Cross,
        }
    }

    /// True for the side whose wins score positive.
    pub fn is_maximizing(&self) -> bool {
        matches!(self, Self::Cross)
    }
}

impl Display for PlayerMark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerMark::Cross => write!(f, "X"),
            PlayerMark::Naught => write!(f, "O"),
        }
    }
}

/// The Player trait is the struct that represents a player.
pub trait Player {
    /// You observe the whole board through a reference, and return the cell to play.
    /// The board handed over always has at least one empty cell.
    fn play(&mut self, b: &Board) -> Result<Move>;
}

#[derive(Debug, Clone, Copy, PartialEq, Hash, Eq, Ord, PartialOrd, Serialize, Deserialize)]
pub enum GameStatus {
    Undecided,
    Draw,
    Won(PlayerMark),
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::Undecided)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Hash, Eq, Ord, PartialOrd, Serialize, Deserialize)]
pub enum GameEndStatus {
    Draw,
    Won(PlayerMark),
}

impl Display for GameEndStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEndStatus::Draw => write!(f, "draw"),
            GameEndStatus::Won(mark) => write!(f, "{mark} won"),
        }
    }
}

impl TryFrom<GameStatus> for GameEndStatus {
    type Error = GameStatus;
    fn try_from(status: GameStatus) -> std::result::Result<Self, Self::Error> {
        match status {
            GameStatus::Draw => Ok(GameEndStatus::Draw),
            GameStatus::Won(p) => Ok(GameEndStatus::Won(p)),
            GameStatus::Undecided => Err(status),
        }
    }
}
