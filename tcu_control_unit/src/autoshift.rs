//! Automatic up/downshift policy for Drive mode.
//!
//! Compares engine RPM against the gearbox thresholds and issues shifts
//! through the same `shift` entry point the driver uses, with the
//! Manual-mode guard bypassed. The caller only evaluates the policy while
//! the gearbox is in Drive and the engine is running.

use tcu_common::state::{Action, Gear};

use crate::state::gearbox::{Gearbox, ShiftOutcome};

/// Evaluate one auto-shift decision for the current RPM.
///
/// Returns the shift outcome when a shift was issued, `None` when the RPM
/// sits between the thresholds or the gear is already at the limit. The
/// boundary checks here are primary; `shift`'s own no-op at top and bottom
/// gear is the redundant net behind them.
pub fn evaluate(rpm: u32, gearbox: &mut Gearbox) -> Option<ShiftOutcome> {
    if rpm >= gearbox.upshift_rpm_threshold() && gearbox.gear() != Gear::TOP {
        Some(gearbox.shift(Action::Up, true, true))
    } else if rpm <= gearbox.downshift_rpm_threshold() && gearbox.gear() != Gear::One {
        Some(gearbox.shift(Action::Down, true, true))
    } else {
        None
    }
}

// ─── Tests ──────────────────────────────────────────────────────────
