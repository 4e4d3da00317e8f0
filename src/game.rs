use log::debug;

use crate::{
    board::Board,
    core::{GameEndStatus, Player, PlayerMark},
    error::Result,
    eval::game_status,
};

/// Let two players play until someone completes a line or the board fills up.
///
/// `first` decides who opens. Returns the outcome and the final board.
/// A move on an occupied cell aborts the game with an error.
pub fn run_game(
    cross: &mut dyn Player,
    naught: &mut dyn Player,
    first: PlayerMark,
) -> Result<(GameEndStatus, Board)> {
    let mut board = Board::new();
    let mut current_player = first;
    loop {
        let status = game_status(&board);
        if let Ok(end) = GameEndStatus::try_from(status) {
            debug!("Game ended with {}", end);
            return Ok((end, board));
        }
        let action = match current_player {
            PlayerMark::Cross => cross.play(&board)?,
            PlayerMark::Naught => naught.play(&board)?,
        };
        debug!("Player {} played {}", current_player, &action);
        board.place(action, current_player)?;
        debug!("\n{}", board);
        current_player = current_player.other();
    }
}
