use log::debug;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

use crate::{
    board::{Board, Move},
    core::Player,
    error::{Error, Result},
};

/// Plays a uniformly random empty cell. A sparring partner for the arena and the tests.
pub struct RandomAi<R> {
    rng: R,
}

impl<Rng: rand::Rng> Player for RandomAi<Rng> {
    fn play(&mut self, b: &Board) -> Result<Move> {
        let moves: Vec<_> = b.empty_cells().collect();
        let mv = *moves.choose(&mut self.rng).ok_or(Error::NoLegalMoves)?;
        debug!("Random AI plays {}", mv);
        Ok(mv)
    }
}

impl RandomAi<StdRng> {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}
