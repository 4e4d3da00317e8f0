use crate::{
    board::{Board, Move},
    core::{Player, PlayerMark},
    error::Result,
    search::Searcher,
};

/// The computer opponent. Searches the whole game tree on every move.
pub struct PerfectAi {
    my_marker: PlayerMark,
    searcher: Searcher,
}

impl PerfectAi {
    pub fn new(mark: PlayerMark) -> Self {
        PerfectAi {
            my_marker: mark,
            searcher: Searcher::new(),
        }
    }

    pub fn mark(&self) -> PlayerMark {
        self.my_marker
    }

    /// Nodes searched over all moves made so far
    pub fn nodes_visited(&self) -> usize {
        self.searcher.nodes_visited()
    }
}

impl Player for PerfectAi {
    fn play(&mut self, b: &Board) -> Result<Move> {
        self.searcher.best_move_for(b, self.my_marker)
    }
}
