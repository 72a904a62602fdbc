//! Console boundary rules: exit guards, engine stop guard, input parsing.

use tcu_common::config::TcuConfig;
use tcu_common::state::Mode;

use super::run_session;

#[test]
fn exit_with_engine_idling_in_park_is_allowed_by_default() {
    let (runner, transcript, result) = run_session(TcuConfig::default(), "start\nexit\n");
    result.expect("session ends via exit");

    // The driver walked away from an idling, parked car.
    assert!(runner.engine().is_running());
    assert!(runner.gearbox().is_parked());
    assert!(transcript.contains("engine running: gear [P]"));
    assert!(transcript.contains("exiting vehicle...."));
}

#[test]
fn exit_refused_in_gear_even_with_unmanned_idle_allowed() {
    let script = "start\ndrive\nexit\npark\nexit\n";
    let (runner, transcript, result) = run_session(TcuConfig::default(), script);
    result.expect("session ends via exit");

    assert!(transcript.contains("please Park the car before exiting!"));
    assert!(runner.gearbox().is_parked());
}

#[test]
fn exit_requires_a_stopped_engine_when_unmanned_idle_disallowed() {
    let config = TcuConfig {
        allow_unmanned_idle: false,
        ..TcuConfig::default()
    };
    let script = "start\nexit\nstop\nexit\n";
    let (runner, transcript, result) = run_session(config, script);
    result.expect("session ends via exit");

    assert!(transcript.contains("please Park and Stop the engine before exiting!"));
    assert!(!runner.engine().is_running());
}

#[test]
fn exit_with_engine_off_is_always_allowed() {
    let (_, transcript, result) = run_session(TcuConfig::default(), "exit\n");
    result.expect("session ends via exit");

    assert!(transcript.contains("engine at rest"));
    assert!(transcript.contains("exiting vehicle...."));
}

#[test]
fn stop_refused_outside_park() {
    let script = "start\ndrive\nstop\npark\nstop\nexit\n";
    let (runner, transcript, result) = run_session(TcuConfig::default(), script);
    result.expect("session ends via exit");

    assert!(transcript.contains("please put the car into park before shutting down the engine!"));
    assert!(!runner.engine().is_running());
    assert_eq!(runner.gearbox().mode(), Mode::Park);
}

#[test]
fn stop_when_already_stopped_changes_nothing() {
    let (runner, _, result) = run_session(TcuConfig::default(), "stop\nexit\n");
    result.expect("session ends via exit");
    assert!(!runner.engine().is_running());
}

#[test]
fn start_twice_keeps_the_engine_running() {
    let (runner, _, result) = run_session(TcuConfig::default(), "start\nstart\nexit\n");
    result.expect("session ends via exit");
    assert!(runner.engine().is_running());
}

#[test]
fn unknown_input_is_reported_and_ignored() {
    let (runner, transcript, result) = run_session(TcuConfig::default(), "gibberish\nexit\n");
    result.expect("session ends via exit");

    assert!(transcript.contains("invalid input"));
    assert!(runner.gearbox().is_parked());
    assert!(!runner.engine().is_running());
}

#[test]
fn commands_are_case_insensitive_end_to_end() {
    let (runner, transcript, result) = run_session(TcuConfig::default(), "START\nExIt\n");
    result.expect("session ends via exit");

    assert!(runner.engine().is_running());
    assert!(transcript.contains("exiting vehicle...."));
}

#[test]
fn prompt_is_rendered_every_iteration() {
    let (_, transcript, result) = run_session(TcuConfig::default(), "start\nexit\n");
    result.expect("session ends via exit");

    let prompts = transcript
        .matches("Commands: Start, Stop, Park, Drive, Manual, Neutral, Reverse, Up, Down, Exit")
        .count();
    assert_eq!(prompts, 2);
}
