//! Text console boundary: prompt, status lines, warnings.
//!
//! Owns the raw reader/writer pair. Every user-facing string passes
//! through here; the state machines only return outcomes.

use std::io::{self, BufRead, Write};

use crate::command::COMMAND_LABELS;
use crate::error::CycleError;

/// ANSI clear-screen + cursor-home sequence.
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[1;1H";

/// Shown when the gearbox is operated with the engine off.
pub const MSG_START_FIRST: &str = "please start the car first!";
/// Shown for unrecognized input tokens.
pub const MSG_INVALID_INPUT: &str = "invalid input";
/// Shown when `stop` is issued outside Park.
pub const MSG_PARK_BEFORE_STOP: &str =
    "please put the car into park before shutting down the engine!";
/// Exit refused: engine running and unmanned idle disallowed.
pub const MSG_PARK_AND_STOP_BEFORE_EXIT: &str =
    "please Park and Stop the engine before exiting!";
/// Exit refused: engine running in gear, unmanned idle allowed.
pub const MSG_PARK_BEFORE_EXIT: &str = "please Park the car before exiting!";
/// Final line of a session.
pub const MSG_EXITING: &str = "exiting vehicle....";

/// Console over any line-buffered reader and writer.
///
/// Generic so scripted sessions can run against in-memory buffers.
pub struct Console<R, W> {
    input: R,
    output: W,
    prompt: String,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Build a console with the standard command prompt.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            prompt: format!("Commands: {}", COMMAND_LABELS.join(", ")),
        }
    }

    /// Wipe the screen between cycles.
    pub fn clear(&mut self) -> io::Result<()> {
        write!(self.output, "{CLEAR_SCREEN}")
    }

    /// Engine/gear status line at the top of a cycle.
    pub fn status(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{line}")?;
        writeln!(self.output)
    }

    /// Guard-rejection or boundary warning.
    pub fn warn(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{message}")
    }

    /// Print the prompt and block for one line of input.
    ///
    /// Fails with [`CycleError::InputClosed`] when the stream ends before
    /// an exit command — the loop must not keep spinning on an empty
    /// reader.
    pub fn read_line(&mut self) -> Result<String, CycleError> {
        writeln!(self.output, "{}", self.prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(CycleError::InputClosed);
        }
        Ok(line)
    }
}

// ─── Tests ──────────────────────────────────────────────────────────
