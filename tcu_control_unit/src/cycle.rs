//! Console cycle: render → auto-shift → read → dispatch.
//!
//! One synchronous loop alternating between rendering the vehicle status
//! (with the auto-shift policy evaluated first while in Drive) and
//! blocking for a single driver command. The blocking read is the only
//! suspension point; the loop ends through the exit command or a console
//! fault.

use std::io::{BufRead, Write};

use tracing::debug;

use tcu_common::config::TcuConfig;
use tcu_common::state::Mode;

use crate::autoshift;
use crate::command::Command;
use crate::console::{
    Console, MSG_EXITING, MSG_INVALID_INPUT, MSG_PARK_AND_STOP_BEFORE_EXIT, MSG_PARK_BEFORE_EXIT,
    MSG_PARK_BEFORE_STOP, MSG_START_FIRST,
};
use crate::error::CycleError;
use crate::state::engine::Engine;
use crate::state::gearbox::{Gearbox, ShiftOutcome};

/// Exit is allowed while parked with the engine idling (when configured),
/// or whenever the engine is off.
pub const fn exit_permitted(engine_running: bool, parked: bool, allow_unmanned_idle: bool) -> bool {
    (allow_unmanned_idle && parked) || !engine_running
}

/// What the loop does after a dispatched command.
enum LoopControl {
    Continue,
    Exit,
}

/// Owns the engine and gearbox for one simulated vehicle and drives the
/// console loop over them.
pub struct CycleRunner {
    engine: Engine,
    gearbox: Gearbox,
    allow_unmanned_idle: bool,
}

impl CycleRunner {
    /// Build a runner for a freshly parked vehicle.
    pub fn new(config: &TcuConfig) -> Self {
        Self {
            engine: Engine::new(),
            gearbox: Gearbox::new(
                config.downshift_rpm_threshold,
                config.upshift_rpm_threshold,
            ),
            allow_unmanned_idle: config.allow_unmanned_idle,
        }
    }

    /// Engine state.
    #[inline]
    pub const fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Gearbox state.
    #[inline]
    pub const fn gearbox(&self) -> &Gearbox {
        &self.gearbox
    }

    /// Run the console loop until the driver exits.
    ///
    /// Generic over the stream pair so tests can script whole sessions
    /// through in-memory buffers.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: W) -> Result<(), CycleError> {
        let mut console = Console::new(input, output);

        loop {
            console.clear()?;

            if self.engine.is_running() {
                if self.gearbox.mode() == Mode::Drive {
                    if let Some(outcome) = autoshift::evaluate(self.engine.rpm(), &mut self.gearbox)
                    {
                        debug!(
                            rpm = self.engine.rpm(),
                            ?outcome,
                            label = %self.gearbox.friendly_label(),
                            "auto-shift evaluated"
                        );
                    }
                }
                console.status(&format!(
                    "engine running: gear [{}]",
                    self.gearbox.friendly_label()
                ))?;
            } else {
                console.status("engine at rest")?;
            }

            let line = console.read_line()?;
            let Some(command) = Command::parse(&line) else {
                console.warn(MSG_INVALID_INPUT)?;
                continue;
            };

            match self.dispatch(command, &mut console)? {
                LoopControl::Continue => {}
                LoopControl::Exit => return Ok(()),
            }
        }
    }

    /// Apply one command against the engine/gearbox pair.
    fn dispatch<R: BufRead, W: Write>(
        &mut self,
        command: Command,
        console: &mut Console<R, W>,
    ) -> Result<LoopControl, CycleError> {
        match command {
            Command::Start => {
                if !self.engine.is_running() {
                    self.engine.start();
                    debug!(rpm = self.engine.rpm(), "engine started");
                }
            }

            Command::Stop => {
                if !self.gearbox.is_parked() {
                    console.warn(MSG_PARK_BEFORE_STOP)?;
                } else if self.engine.is_running() {
                    self.engine.stop();
                    debug!("engine stopped");
                }
            }

            Command::Exit => {
                if exit_permitted(
                    self.engine.is_running(),
                    self.gearbox.is_parked(),
                    self.allow_unmanned_idle,
                ) {
                    console.clear()?;
                    console.status(MSG_EXITING)?;
                    debug!("exit accepted");
                    return Ok(LoopControl::Exit);
                }
                let warning = if self.allow_unmanned_idle {
                    MSG_PARK_BEFORE_EXIT
                } else {
                    MSG_PARK_AND_STOP_BEFORE_EXIT
                };
                console.warn(warning)?;
            }

            Command::Shift(action) => {
                match self
                    .gearbox
                    .shift(action, self.engine.is_running(), false)
                {
                    ShiftOutcome::Applied => {
                        debug!(?action, label = %self.gearbox.friendly_label(), "shift applied");
                    }
                    ShiftOutcome::NoOp => {}
                    ShiftOutcome::NotRunning => console.warn(MSG_START_FIRST)?,
                    ShiftOutcome::Rejected(reason) => console.warn(reason)?,
                }
            }
        }

        Ok(LoopControl::Continue)
    }
}

// ─── Tests ──────────────────────────────────────────────────────────
