//! Wakeful interactive runner entry point.
//!
//! Builds a [`SimulationConfig`] from the command-line flags, hands it to a
//! [`Simulator`], and runs for the requested duration (or until Ctrl-C).
//! The run itself happens on a blocking task; the async side only exists to
//! translate the Ctrl-C signal into the simulator's interrupt event.
//!
//! Exit codes: `0` on success, `1` when `--list-keys` was requested but no
//! key names could be retrieved.

use std::process;
use std::sync::Arc;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use wakeful_cli::args::CliArgs;
use wakeful_core::injection::logging::LoggingInjector;
use wakeful_core::keymap;
use wakeful_core::sync::Event;
use wakeful_core::Simulator;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialise structured logging.  Level is overridden by `RUST_LOG`.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = CliArgs::parse();

    if args.list_keys {
        let keys = keymap::supported_keys();
        if keys.is_empty() {
            eprintln!("No key names could be retrieved.");
            process::exit(1);
        }
        println!("Supported keys:");
        println!("{}", keys.join(", "));
        return Ok(());
    }

    let config = args.to_config();
    info!(
        cpm = config.clicks_per_minute,
        key = %config.key,
        mouse = config.mouse_enabled,
        "starting simulation"
    );

    // The logging injector only traces what would be injected; swap in an OS
    // adapter (SendInput, XTest, CGEvent) for real input synthesis.
    let injector = Arc::new(LoggingInjector::new());
    let mut simulator = Simulator::new(config, injector);

    // Ctrl-C ends both timed and indefinite runs via the interrupt event.
    let interrupt = Arc::new(Event::new());
    let interrupt_handler = Arc::clone(&interrupt);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("interrupt received; shutting down");
            interrupt_handler.set();
        }
    });

    let duration = args.run_duration();
    tokio::task::spawn_blocking(move || simulator.run_for(duration, &interrupt)).await?;

    info!("simulation finished");
    Ok(())
}
