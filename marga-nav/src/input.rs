//! Input boundary: discrete command sources.
//!
//! The session consumes [`Command`]s through the [`InputSource`]
//! trait; where they come from (a script, stdin, some future UI) is
//! the host's business. Malformed text is rejected here at the
//! boundary; out-of-range coordinates are rejected later by the grid.

use marga_map::Cell;
use std::collections::VecDeque;
use std::io::{self, BufRead};
use tracing::warn;

/// A discrete session command
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// End the session
    Quit,
    /// Move the search start
    SetStart(Cell),
    /// Move the search goal
    SetGoal(Cell),
    /// Flip the wall state of a cell
    ToggleWall(Cell),
    /// Run the stepped search on the current grid
    RunSearch,
}

/// Source of session commands
pub trait InputSource {
    /// Next command, or None when the stream is exhausted
    fn next_command(&mut self) -> Option<Command>;
}

/// Fixed command sequence; used by tests and `--script` runs.
pub struct ScriptedInput {
    commands: VecDeque<Command>,
}

impl ScriptedInput {
    pub fn new(commands: Vec<Command>) -> Self {
        Self {
            commands: commands.into(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn next_command(&mut self) -> Option<Command> {
        self.commands.pop_front()
    }
}

/// Line-oriented command reader.
///
/// Accepted lines: `start R C`, `goal R C`, `wall R C`, `run`, `quit`
/// (single-letter abbreviations work too). Blank lines are skipped,
/// bad lines are reported and skipped.
pub struct ConsoleInput<R: BufRead> {
    reader: R,
}

impl ConsoleInput<io::BufReader<io::Stdin>> {
    /// Read commands from stdin
    pub fn stdin() -> Self {
        Self {
            reader: io::BufReader::new(io::stdin()),
        }
    }
}

impl<R: BufRead> ConsoleInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> InputSource for ConsoleInput<R> {
    fn next_command(&mut self) -> Option<Command> {
        loop {
            let mut line = String::new();
            match self.reader.read_line(&mut line) {
                Ok(0) => return None, // EOF
                Ok(_) => {}
                Err(e) => {
                    warn!("input read failed: {}", e);
                    return None;
                }
            }
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match parse_line(line) {
                Ok(command) => return Some(command),
                Err(reason) => warn!("ignoring command '{}': {}", line, reason),
            }
        }
    }
}

/// Parse one command line
pub fn parse_line(line: &str) -> Result<Command, String> {
    let mut parts = line.split_whitespace();
    let verb = parts.next().ok_or_else(|| "empty line".to_string())?;

    let mut cell_arg = || -> Result<Cell, String> {
        let row = parse_coord(parts.next(), "row")?;
        let col = parse_coord(parts.next(), "col")?;
        Ok(Cell::new(row, col))
    };

    let command = match verb {
        "quit" | "q" => Command::Quit,
        "run" | "r" => Command::RunSearch,
        "start" | "s" => Command::SetStart(cell_arg()?),
        "goal" | "g" => Command::SetGoal(cell_arg()?),
        "wall" | "w" => Command::ToggleWall(cell_arg()?),
        other => return Err(format!("unknown command '{}'", other)),
    };

    if parts.next().is_some() {
        return Err("trailing arguments".to_string());
    }
    Ok(command)
}

fn parse_coord(part: Option<&str>, name: &str) -> Result<i32, String> {
    let text = part.ok_or_else(|| format!("missing {}", name))?;
    text.parse::<i32>()
        .map_err(|_| format!("{} '{}' is not an integer", name, text))
}
