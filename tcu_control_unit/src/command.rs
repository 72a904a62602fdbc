//! Driver console commands.
//!
//! Decodes raw input tokens into typed commands. Mode and gear tokens wrap
//! the corresponding gearbox [`Action`]; engine and session commands stand
//! alone.

use tcu_common::state::Action;

/// A recognized console command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Start the engine.
    Start,
    /// Stop the engine (only in Park).
    Stop,
    /// Forward a mode/gear action to the gearbox.
    Shift(Action),
    /// Leave the vehicle and end the session.
    Exit,
}

/// Command labels in prompt display order.
pub const COMMAND_LABELS: [&str; 10] = [
    "Start", "Stop", "Park", "Drive", "Manual", "Neutral", "Reverse", "Up", "Down", "Exit",
];

impl Command {
    /// Decode one raw input line.
    ///
    /// Tokens are case-insensitive and surrounding whitespace is ignored.
    /// Returns `None` for anything unrecognized.
    pub fn parse(input: &str) -> Option<Self> {
        let token = input.trim().to_ascii_lowercase();
        let command = match token.as_str() {
            "start" => Self::Start,
            "stop" => Self::Stop,
            "park" => Self::Shift(Action::Park),
            "drive" => Self::Shift(Action::Drive),
            "manual" => Self::Shift(Action::Manual),
            "neutral" => Self::Shift(Action::Neutral),
            "reverse" => Self::Shift(Action::Reverse),
            "up" => Self::Shift(Action::Up),
            "down" => Self::Shift(Action::Down),
            "exit" => Self::Exit,
            _ => return None,
        };
        Some(command)
    }
}

// ─── Tests ──────────────────────────────────────────────────────────
