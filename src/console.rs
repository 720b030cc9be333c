//! Line-oriented text shell around a [`GameSession`].

use std::io::{self, BufRead, Write};

use crate::game::{GameOutcome, GameSession};

pub const TIE_MESSAGE: &str = "TIE GAME!";
pub const INVALID_COLUMN_MESSAGE: &str = "Invalid column. Try again";

/// Why the console loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// The game reached a result and the final board was printed.
    Finished,
    /// The player typed `q`.
    Quit,
    /// Input ran out before the game was decided.
    EndOfInput,
}

pub struct Console {
    session: GameSession,
}

impl Console {
    pub fn new(session: GameSession) -> Self {
        Console { session }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Main loop: prompt, read a column, repeat until the game is decided.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        output: &mut W,
    ) -> io::Result<ExitReason> {
        let mut line = String::new();
        loop {
            writeln!(output)?;
            write!(output, "{}", self.session.board())?;
            writeln!(output, "{} choose a column:", self.session.current_turn().name())?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                return Ok(ExitReason::EndOfInput);
            }

            if self.handle_line(line.trim(), output)? {
                return Ok(ExitReason::Quit);
            }

            if self.session.is_terminal() {
                break;
            }
        }

        self.print_result(output)?;
        Ok(ExitReason::Finished)
    }

    /// Returns true when the player asked to quit.
    fn handle_line<W: Write>(&mut self, line: &str, output: &mut W) -> io::Result<bool> {
        if line.eq_ignore_ascii_case("q") {
            return Ok(true);
        }

        if let Err(err) = self.session.attempt_move(line) {
            log::debug!("rejected move: {}", err);
            writeln!(output, "{}", INVALID_COLUMN_MESSAGE)?;
        }
        Ok(false)
    }

    fn print_result<W: Write>(&self, output: &mut W) -> io::Result<()> {
        writeln!(output)?;
        write!(output, "{}", self.session.board())?;
        match self.session.result() {
            Some(GameOutcome::Winner(id)) => {
                writeln!(output, "Winner is {}!", self.session.player(id).name())?
            }
            Some(GameOutcome::Draw) => writeln!(output, "{}", TIE_MESSAGE)?,
            None => {}
        }
        writeln!(output)?;
        output.flush()
    }
}
