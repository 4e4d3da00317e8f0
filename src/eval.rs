//! Terminal-state evaluation of a board.
//!
//! [`evaluate`] only looks for completed lines. A zero means either "drawn"
//! or "still going"; use [`is_full`] (or [`game_status`]) to tell the two apart.

use crate::{
    board::{Board, Move},
    core::{GameStatus, PlayerMark},
};

/// Position value from the point of view of [`PlayerMark::Cross`].
pub type Score = i32;

pub const WIN_SCORE: Score = 10;

const fn cell(row: usize, col: usize) -> Move {
    Move { row, col }
}

/// All eight lines, in the order they are checked:
/// rows top to bottom, columns left to right, the main diagonal and the anti-diagonal.
pub const LINES: [[Move; 3]; 8] = [
    [cell(0, 0), cell(0, 1), cell(0, 2)],
    [cell(1, 0), cell(1, 1), cell(1, 2)],
    [cell(2, 0), cell(2, 1), cell(2, 2)],
    [cell(0, 0), cell(1, 0), cell(2, 0)],
    [cell(0, 1), cell(1, 1), cell(2, 1)],
    [cell(0, 2), cell(1, 2), cell(2, 2)],
    [cell(0, 0), cell(1, 1), cell(2, 2)],
    [cell(0, 2), cell(1, 1), cell(2, 0)],
];

/// The mark owning the first complete line, if any.
pub fn winner(board: &Board) -> Option<PlayerMark> {
    LINES.iter().find_map(|line| {
        let first = board.get(line[0])?;
        line[1..]
            .iter()
            .all(|&mv| board.get(mv) == Some(first))
            .then_some(first)
    })
}

/// `+10` when crosses own a complete line, `-10` for naughts, `0` otherwise.
pub fn evaluate(board: &Board) -> Score {
    match winner(board) {
        Some(PlayerMark::Cross) => WIN_SCORE,
        Some(PlayerMark::Naught) => -WIN_SCORE,
        None => 0,
    }
}

pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

pub fn game_status(board: &Board) -> GameStatus {
    let score = evaluate(board);
    if score > 0 {
        GameStatus::Won(PlayerMark::Cross)
    } else if score < 0 {
        GameStatus::Won(PlayerMark::Naught)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::Undecided
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn board_with_line(line: &[Move; 3], mark: PlayerMark) -> Board {
        let mut b = Board::new();
        for &mv in line {
            b.place(mv, mark).unwrap();
        }
        b
    }

    #[test]
    fn every_line_scores_for_its_owner() {
        for line in LINES.iter() {
            assert_eq!(evaluate(&board_with_line(line, PlayerMark::Cross)), 10);
            assert_eq!(evaluate(&board_with_line(line, PlayerMark::Naught)), -10);
        }
    }

    #[test]
    fn line_among_other_marks() {
        let b: Board = "oxo/xxx/o_o".parse().unwrap();
        assert_eq!(evaluate(&b), 10);
        let b: Board = "xxo/xo_/o__".parse().unwrap();
        assert_eq!(evaluate(&b), -10);
        assert_eq!(game_status(&b), GameStatus::Won(PlayerMark::Naught));
    }

    #[test]
    fn empty_board_is_neutral() {
        let b = Board::new();
        assert_eq!(evaluate(&b), 0);
        assert!(!is_full(&b));
        assert_eq!(game_status(&b), GameStatus::Undecided);
    }

    #[test]
    fn drawn_board_is_neutral_and_full() {
        let b: Board = "xox/xoo/oxx".parse().unwrap();
        assert_eq!(evaluate(&b), 0);
        assert!(is_full(&b));
        assert_eq!(game_status(&b), GameStatus::Draw);
    }

    #[test]
    fn mixed_lines_are_not_terminal() {
        for s in ["xx_/___/___", "xxo/___/___", "x__/_o_/__x", "xo_/xo_/o_x"] {
            let b: Board = s.parse().unwrap();
            assert_eq!(evaluate(&b), 0, "{s}");
            assert_eq!(game_status(&b), GameStatus::Undecided, "{s}");
        }
    }
}
