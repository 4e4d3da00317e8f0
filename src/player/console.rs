use std::io::{BufRead, Write};

use crate::{
    board::{Board, Move},
    core::{Player, PlayerMark},
    error::{Error, Result},
};

/// A human at the keyboard, choosing cells by their keypad number.
pub struct ConsolePlayer<R, W> {
    mark: PlayerMark,
    input: R,
    output: W,
}

impl ConsolePlayer<std::io::StdinLock<'static>, std::io::Stdout> {
    pub fn new(mark: PlayerMark) -> Self {
        ConsolePlayer::with_io(mark, std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsolePlayer<R, W> {
    pub fn with_io(mark: PlayerMark, input: R, output: W) -> Self {
        ConsolePlayer {
            mark,
            input,
            output,
        }
    }

    fn prompt(&mut self, b: &Board) -> std::io::Result<()> {
        writeln!(self.output, "Where do you want to place {}?", self.mark)?;
        write!(self.output, "{}", render_choices(b))?;
        self.output.flush()
    }
}

/// The board with free cells shown as their keypad number, e.g. `[5]`.
pub fn render_choices(b: &Board) -> String {
    let mut s = String::new();
    for (row_idx, row) in b.rows().iter().enumerate() {
        let cells: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(col_idx, cell)| match cell {
                None => format!("[{}]", row_idx * 3 + col_idx + 1),
                Some(mark) => format!(" {mark} "),
            })
            .collect();
        s.push_str(&cells.join("\t"));
        s.push('\n');
    }
    s
}

/// Read a keypad number from a line of input and check that the cell is free.
pub fn parse_choice(line: &str, b: &Board) -> Result<Move> {
    let trimmed = line.trim();
    let num: usize = trimmed.parse().map_err(|_| Error::InvalidInput {
        input: trimmed.to_string(),
    })?;
    let mv = Move::from_keypad(num)?;
    if b.get(mv).is_some() {
        return Err(Error::Occupied {
            row: mv.row,
            col: mv.col,
        });
    }
    Ok(mv)
}

impl<R: BufRead, W: Write> Player for ConsolePlayer<R, W> {
    fn play(&mut self, b: &Board) -> Result<Move> {
        loop {
            self.prompt(b).map_err(|source| Error::Io {
                operation: "write the prompt",
                source,
            })?;
            let mut line = String::new();
            let n_read = self.input.read_line(&mut line).map_err(|source| Error::Io {
                operation: "read a move",
                source,
            })?;
            if n_read == 0 {
                return Err(Error::Io {
                    operation: "read a move",
                    source: std::io::ErrorKind::UnexpectedEof.into(),
                });
            }
            match parse_choice(&line, b) {
                Ok(mv) => return Ok(mv),
                Err(e) => {
                    writeln!(self.output, "{e}").map_err(|source| Error::Io {
                        operation: "write the prompt",
                        source,
                    })?;
                }
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses_free_cells_only() {
        let b: Board = "x__/_o_/___".parse().unwrap();
        assert_eq!(parse_choice(" 6\n", &b).unwrap(), Move { row: 1, col: 2 });
        assert!(matches!(
            parse_choice("1", &b),
            Err(Error::Occupied { row: 0, col: 0 })
        ));
        assert!(matches!(
            parse_choice("five", &b),
            Err(Error::InvalidInput { .. })
        ));
        assert!(matches!(
            parse_choice("0", &b),
            Err(Error::OutOfRange { value: 0, .. })
        ));
    }

    #[test]
    fn shows_numbers_for_free_cells() {
        let b: Board = "x__/_o_/___".parse().unwrap();
        assert_eq!(
            render_choices(&b),
            " X \t[2]\t[3]\n[4]\t O \t[6]\n[7]\t[8]\t[9]\n"
        );
    }

    #[test]
    fn reprompts_until_a_free_cell_is_given() {
        let b: Board = "x__/_o_/___".parse().unwrap();
        let input = "5\nabc\n9\n".as_bytes();
        let mut output = Vec::new();
        let mut p = ConsolePlayer::with_io(PlayerMark::Cross, input, &mut output);
        assert_eq!(p.play(&b).unwrap(), Move { row: 2, col: 2 });
        drop(p);
        let shown = String::from_utf8(output).unwrap();
        assert_eq!(shown.matches("Where do you want").count(), 3);
        assert!(shown.contains("already occupied"));
    }

    #[test]
    fn closed_input_is_an_error() {
        let b = Board::new();
        let mut p = ConsolePlayer::with_io(PlayerMark::Cross, "".as_bytes(), Vec::new());
        assert!(matches!(p.play(&b), Err(Error::Io { .. })));
    }
}
