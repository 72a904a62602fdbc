//! # TCU Console Simulator
//!
//! Interactive automatic/manual transmission simulator. Loads an optional
//! TOML configuration, then enters the console cycle: status line,
//! auto-shift evaluation in Drive, one blocking command read per
//! iteration.
//!
//! Logs go to stderr so they never interleave with the console UI on
//! stdout.

use clap::Parser;
use std::path::PathBuf;
use std::process;
use tcu_control_unit::config::load_config;
use tcu_control_unit::cycle::CycleRunner;
use tracing::{Level, error, info};
use tracing_subscriber::EnvFilter;

/// TCU — transmission control console simulator
#[derive(Parser, Debug)]
#[command(name = "tcu_control_unit")]
#[command(version)]
#[command(about = "Interactive automatic/manual transmission simulator")]
struct Args {
    /// Path to configuration TOML.
    #[arg(default_value = "config/tcu.toml")]
    config: PathBuf,

    /// Enable verbose logging (DEBUG level).
    #[arg(short, long)]
    verbose: bool,

    /// Output logs in JSON format.
    #[arg(long)]
    json: bool,
}

fn main() {
    let args = Args::parse();
    setup_tracing(&args);

    info!("TCU simulator v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(&args) {
        error!("FATAL: {e}");
        process::exit(1);
    }

    info!("TCU simulator shutdown complete");
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(&args.config)?;
    info!(
        "Config OK: allow_unmanned_idle={}, shift thresholds=[{}, {}] rpm",
        config.allow_unmanned_idle, config.downshift_rpm_threshold, config.upshift_rpm_threshold
    );

    let mut runner = CycleRunner::new(&config);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    runner.run(stdin.lock(), stdout.lock())?;

    Ok(())
}

/// Setup tracing subscriber based on CLI arguments.
fn setup_tracing(args: &Args) {
    let level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    if args.json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .compact()
            .init();
    }
}
