use std::{fmt::Display, str::FromStr};

use itertools::iproduct;
use serde::{Deserialize, Serialize};

use crate::{
    core::PlayerMark,
    error::{Error, Result},
};

pub const SIZE: usize = 3;

type RawBoard = [[Option<PlayerMark>; SIZE]; SIZE];

/// Represents a coordinate on the board, 0-indexed
///
///  (0,0) (0,1) (0,2)
///  (1,0) (1,1) (1,2)
///  (2,0) (2,1) (2,2)
///
/// invariant: both numbers must be 0-2
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub fn new(row: usize, col: usize) -> Result<Self> {
        if row >= SIZE {
            return Err(Error::OutOfRange { what: "row", value: row });
        }
        if col >= SIZE {
            return Err(Error::OutOfRange { what: "column", value: col });
        }
        Ok(Move { row, col })
    }

    /// Translate a keypad number into a coordinate
    ///
    ///  1 2 3
    ///  4 5 6
    ///  7 8 9
    pub fn from_keypad(num: usize) -> Result<Self> {
        if !(1..=9).contains(&num) {
            return Err(Error::OutOfRange { what: "cell number", value: num });
        }
        Ok(Move {
            row: (num - 1) / SIZE,
            col: (num - 1) % SIZE,
        })
    }

    pub fn keypad(&self) -> usize {
        self.row * SIZE + self.col + 1
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A 3x3 grid. `None` is an empty cell.
///
/// Boards are small and `Copy`, so the search hands every branch its own
/// copy instead of placing and removing marks on a shared board.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: RawBoard,
}

impl From<Board> for RawBoard {
    fn from(val: Board) -> Self {
        val.cells
    }
}

impl From<RawBoard> for Board {
    fn from(cells: RawBoard) -> Self {
        Board { cells }
    }
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, mv: Move) -> Option<PlayerMark> {
        self.cells[mv.row][mv.col]
    }

    pub fn rows(&self) -> &RawBoard {
        &self.cells
    }

    /// Place a marker. Fails if the cell is off the board or already taken.
    pub fn place(&mut self, mv: Move, mark: PlayerMark) -> Result<()> {
        let mv = Move::new(mv.row, mv.col)?;
        if self.get(mv).is_some() {
            return Err(Error::Occupied {
                row: mv.row,
                col: mv.col,
            });
        }
        self.cells[mv.row][mv.col] = Some(mark);
        Ok(())
    }

    /// The board after `mark` is played at `mv`. The caller guarantees the cell is empty.
    pub(crate) fn with_mark(&self, mv: Move, mark: PlayerMark) -> Board {
        debug_assert!(self.get(mv).is_none(), "{mv} is already taken");
        let mut child = *self;
        child.cells[mv.row][mv.col] = Some(mark);
        child
    }

    /// Empty cells in row-major order (row 0 to 2, and within a row column 0 to 2).
    pub fn empty_cells(&self) -> impl Iterator<Item = Move> + '_ {
        iproduct!(0..SIZE, 0..SIZE)
            .map(|(row, col)| Move { row, col })
            .filter(|&mv| self.get(mv).is_none())
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|c| c.is_some())
    }

    pub fn n_moves_made(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_some()).count()
    }

    /// The mark due to move, assuming `first` opened the game.
    pub fn to_move(&self, first: PlayerMark) -> PlayerMark {
        if self.n_moves_made() % 2 == 0 {
            first
        } else {
            first.other()
        }
    }
}

/// Parses 9 cells in row-major order. Rows may be separated by `/`.
/// `x`/`X` is a cross, `o`/`O` a naught, and `_`, `.` or a blank an empty cell.
impl FromStr for Board {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let cells: Vec<char> = s.chars().filter(|&c| c != '/').collect();
        if cells.len() != SIZE * SIZE {
            return Err(Error::InvalidBoardLength {
                got: cells.len(),
                context: s.to_string(),
            });
        }
        let mut b = Board::new();
        for (position, &c) in cells.iter().enumerate() {
            let mark = match c {
                'x' | 'X' => Some(PlayerMark::Cross),
                'o' | 'O' => Some(PlayerMark::Naught),
                '_' | '.' | ' ' => None,
                character => {
                    return Err(Error::InvalidCellCharacter {
                        character,
                        position,
                        context: s.to_string(),
                    })
                }
            };
            b.cells[position / SIZE][position % SIZE] = mark;
        }
        Ok(b)
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let m = |m| match m {
            None => ' ',
            Some(PlayerMark::Cross) => 'X',
            Some(PlayerMark::Naught) => 'O',
        };
        writeln!(f, " ------- ")?;
        for row in self.cells.iter() {
            write!(f, "| ")?;
            row.iter().try_for_each(|&mark| write!(f, "{} ", m(mark)))?;
            writeln!(f, "|")?;
        }
        writeln!(f, " ------- ")
    }
}
