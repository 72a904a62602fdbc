//! End-to-end driving sessions through the console cycle.

use tcu_common::config::TcuConfig;
use tcu_common::state::{Gear, Mode};
use tcu_control_unit::error::CycleError;

use super::run_session;

#[test]
fn full_manual_driving_session() {
    // Start, drive off, switch to manual, shift up, try to park from
    // second (refused), shift back down, park, stop, exit.
    let script = "start\ndrive\nmanual\nup\npark\ndown\npark\nstop\nexit\n";
    let (runner, transcript, result) = run_session(TcuConfig::default(), script);
    result.expect("session ends via exit");

    assert!(!runner.engine().is_running());
    assert_eq!(runner.gearbox().mode(), Mode::Park);
    assert_eq!(runner.gearbox().gear(), Gear::Neutral);
    assert!(runner.gearbox().parking_pawl_engaged());

    assert!(transcript.contains("engine at rest"));
    assert!(transcript.contains("engine running: gear [M2]"));
    assert!(transcript
        .contains("please put the car into neutral, first gear or reverse before parking!"));
    assert!(transcript.contains("exiting vehicle...."));
}

#[test]
fn reversing_out_then_driving_forward() {
    let script = "start\nneutral\nreverse\nneutral\ndrive\npark\nstop\nexit\n";
    let (runner, transcript, result) = run_session(TcuConfig::default(), script);
    result.expect("session ends via exit");

    assert!(transcript.contains("engine running: gear [R]"));
    assert!(transcript.contains("engine running: gear [D1]"));
    assert_eq!(runner.gearbox().mode(), Mode::Park);
}

#[test]
fn shift_before_start_is_refused() {
    let script = "drive\nexit\n";
    let (runner, transcript, result) = run_session(TcuConfig::default(), script);
    result.expect("session ends via exit");

    assert!(transcript.contains("please start the car first!"));
    assert_eq!(runner.gearbox().mode(), Mode::Park);
    assert_eq!(runner.gearbox().gear(), Gear::Neutral);
}

#[test]
fn auto_shift_climbs_gears_with_a_lowered_upshift_threshold() {
    // Idle RPM (1500) clears a 1400 RPM upshift threshold, so every
    // iteration in Drive steps one gear up until the top gear holds.
    let config = TcuConfig {
        upshift_rpm_threshold: 1400,
        ..TcuConfig::default()
    };
    // Filler tokens only advance the loop; the final read hits EOF since
    // the car can no longer be parked from fifth.
    let script = "start\ndrive\nx\nx\nx\nx\npark\n";
    let (runner, transcript, result) = run_session(config, script);

    assert!(matches!(result, Err(CycleError::InputClosed)));
    assert_eq!(runner.gearbox().mode(), Mode::Drive);
    assert_eq!(runner.gearbox().gear(), Gear::Five);
    assert!(transcript.contains("engine running: gear [D5]"));
    assert!(transcript
        .contains("please put the car into neutral, first gear or reverse before parking!"));
}

#[test]
fn auto_shift_holds_gear_at_default_thresholds() {
    // 1500 RPM sits between 1200 and 3000: no automatic movement out of
    // first gear however long the loop spins.
    let script = "start\ndrive\nx\nx\nx\npark\nstop\nexit\n";
    let (runner, transcript, result) = run_session(TcuConfig::default(), script);
    result.expect("session ends via exit");

    assert!(transcript.contains("engine running: gear [D1]"));
    assert!(!transcript.contains("engine running: gear [D2]"));
    assert_eq!(runner.gearbox().mode(), Mode::Park);
}
