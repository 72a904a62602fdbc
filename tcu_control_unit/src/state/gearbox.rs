//! Gearbox shift state machine.
//!
//! Mode transitions P/R/N/D/M plus manual and automatic gear stepping,
//! guarded by the rules of a real transmission: no Reverse or Park while
//! rolling in a gear above First, Park re-engages the parking pawl and
//! centers the gear to Neutral, and leaving Manual for Drive keeps the
//! gear that was engaged.
//!
//! Gear changes happen ONLY through `shift`: driver-issued Up/Down require
//! Manual mode, while the auto-shifter passes `auto_shift = true` to step
//! gears in Drive through the same transition function.

use tcu_common::config::{DOWNSHIFT_RPM_THRESHOLD_DEFAULT, UPSHIFT_RPM_THRESHOLD_DEFAULT};
use tcu_common::state::{Action, Gear, Mode};

/// Result of a shift attempt.
///
/// A boundary action that changes nothing (already parked, already at top
/// gear) is `NoOp`, not `Rejected`: it carries no user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftOutcome {
    /// Transition accepted — state changed.
    Applied,
    /// Transition accepted — nothing to do.
    NoOp,
    /// The engine must be running to operate the gearbox.
    NotRunning,
    /// Guard violated — reason for the driver.
    Rejected(&'static str),
}

/// Main transmission state: mode, gear, and parking pawl.
///
/// The RPM thresholds drive the auto-shift policy; they are fixed at
/// construction from configuration.
#[derive(Debug, Clone)]
pub struct Gearbox {
    mode: Mode,
    gear: Gear,
    parking_pawl_engaged: bool,
    downshift_rpm_threshold: u32,
    upshift_rpm_threshold: u32,
}

impl Gearbox {
    /// Create a gearbox in Park with the given auto-shift thresholds.
    ///
    /// The pawl starts disengaged; it is first engaged by an explicit Park
    /// transition.
    pub const fn new(downshift_rpm_threshold: u32, upshift_rpm_threshold: u32) -> Self {
        Self {
            mode: Mode::Park,
            gear: Gear::Neutral,
            parking_pawl_engaged: false,
            downshift_rpm_threshold,
            upshift_rpm_threshold,
        }
    }

    /// Current mode.
    #[inline]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Current gear.
    #[inline]
    pub const fn gear(&self) -> Gear {
        self.gear
    }

    /// Is the parking pawl engaged?
    #[inline]
    pub const fn parking_pawl_engaged(&self) -> bool {
        self.parking_pawl_engaged
    }

    /// Is the transmission in Park?
    #[inline]
    pub const fn is_parked(&self) -> bool {
        matches!(self.mode, Mode::Park)
    }

    /// RPM at or below which Drive mode downshifts.
    #[inline]
    pub const fn downshift_rpm_threshold(&self) -> u32 {
        self.downshift_rpm_threshold
    }

    /// RPM at or above which Drive mode upshifts.
    #[inline]
    pub const fn upshift_rpm_threshold(&self) -> u32 {
        self.upshift_rpm_threshold
    }

    /// Compact cockpit label: mode letter, plus the gear number in Drive
    /// and Manual ("D1", "M3", "P", "N", "R").
    pub fn friendly_label(&self) -> String {
        match self.mode {
            Mode::Drive | Mode::Manual => format!("{}{}", self.mode.letter(), self.gear.rank()),
            _ => self.mode.letter().to_string(),
        }
    }

    /// Attempt a transition for a driver or auto-shifter action.
    ///
    /// The engine check always runs first; each action then applies its own
    /// guard. On `NotRunning` and `Rejected` the state is untouched.
    /// `auto_shift` bypasses only the Manual-mode requirement on Up/Down.
    pub fn shift(&mut self, action: Action, engine_running: bool, auto_shift: bool) -> ShiftOutcome {
        if !engine_running {
            return ShiftOutcome::NotRunning;
        }

        match action {
            Action::Reverse => {
                if !matches!(self.gear, Gear::Neutral | Gear::One) {
                    return ShiftOutcome::Rejected(
                        "please put the car into neutral or first gear before reversing!",
                    );
                }
                self.mode = Mode::Reverse;
                self.gear = Gear::Reverse;
                self.parking_pawl_engaged = false;
                ShiftOutcome::Applied
            }

            Action::Neutral => {
                // Park also qualifies: its gear is already centered, so the
                // selector may drop straight into Neutral.
                if self.mode != Mode::Park && !matches!(self.gear, Gear::Reverse | Gear::One) {
                    return ShiftOutcome::Rejected(
                        "please put the car into first gear or reverse before switching to neutral!",
                    );
                }
                self.mode = Mode::Neutral;
                self.gear = Gear::Neutral;
                self.parking_pawl_engaged = false;
                ShiftOutcome::Applied
            }

            Action::Park => {
                if self.mode == Mode::Park {
                    return ShiftOutcome::NoOp;
                }
                if !matches!(self.gear, Gear::Reverse | Gear::Neutral | Gear::One) {
                    return ShiftOutcome::Rejected(
                        "please put the car into neutral, first gear or reverse before parking!",
                    );
                }
                self.mode = Mode::Park;
                self.gear = Gear::Neutral;
                self.parking_pawl_engaged = true;
                ShiftOutcome::Applied
            }

            Action::Drive => {
                if self.mode == Mode::Drive {
                    return ShiftOutcome::NoOp;
                }
                // Coming back from Manual keeps the engaged gear; every
                // other mode starts from First.
                if self.mode != Mode::Manual {
                    self.gear = Gear::One;
                }
                self.mode = Mode::Drive;
                self.parking_pawl_engaged = false;
                ShiftOutcome::Applied
            }

            Action::Manual => {
                if self.mode == Mode::Manual {
                    return ShiftOutcome::NoOp;
                }
                if self.mode != Mode::Drive {
                    return ShiftOutcome::Rejected("please put the car into drive first!");
                }
                self.mode = Mode::Manual;
                ShiftOutcome::Applied
            }

            Action::Up => {
                if !auto_shift && self.mode != Mode::Manual {
                    return ShiftOutcome::Rejected("please put the car into manual first!");
                }
                match self.gear.step_up() {
                    Some(next) => {
                        self.gear = next;
                        ShiftOutcome::Applied
                    }
                    None => ShiftOutcome::NoOp,
                }
            }

            Action::Down => {
                if !auto_shift && self.mode != Mode::Manual {
                    return ShiftOutcome::Rejected("please put the car into manual first!");
                }
                match self.gear.step_down() {
                    Some(next) => {
                        self.gear = next;
                        ShiftOutcome::Applied
                    }
                    None => ShiftOutcome::NoOp,
                }
            }
        }
    }
}

impl Default for Gearbox {
    fn default() -> Self {
        Self::new(DOWNSHIFT_RPM_THRESHOLD_DEFAULT, UPSHIFT_RPM_THRESHOLD_DEFAULT)
    }
}

// ─── Tests ──────────────────────────────────────────────────────────
