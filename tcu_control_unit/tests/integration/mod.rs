//! Shared helpers for scripted console sessions.

mod console_rules;
mod driving_session;

use std::io::Cursor;

use tcu_common::config::TcuConfig;
use tcu_control_unit::cycle::CycleRunner;
use tcu_control_unit::error::CycleError;

/// Run one scripted session against a fresh vehicle.
///
/// Returns the runner (for state assertions), the captured console
/// output, and the loop result.
pub fn run_session(
    config: TcuConfig,
    script: &str,
) -> (CycleRunner, String, Result<(), CycleError>) {
    let mut runner = CycleRunner::new(&config);
    let mut output = Vec::new();
    let result = runner.run(Cursor::new(script), &mut output);
    let transcript = String::from_utf8(output).expect("console output is UTF-8");
    (runner, transcript, result)
}
