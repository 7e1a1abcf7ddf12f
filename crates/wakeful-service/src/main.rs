//! wakefuld entry point.
//!
//! Lifecycle, in order:
//!
//! 1. Load the JSON config (missing or malformed files fall back to the
//!    defaults; startup is never blocked on configuration).
//! 2. `start()` the simulator and report how many workers are running.
//! 3. Park until a shutdown signal arrives (Ctrl-C, or SIGTERM on unix).
//! 4. `stop()` on the cleanup path; shutdown never propagates an error.
//!
//! The simulator's blocking calls run on `spawn_blocking` tasks so the small
//! async side (signal handling) is never starved.

use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use wakeful_core::config;
use wakeful_core::injection::logging::LoggingInjector;
use wakeful_core::{SimulationConfig, Simulator};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialise structured logging.  Level is overridden by `RUST_LOG`.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("wakefuld starting");

    let config = match wakeful_service::effective_config_path() {
        Some(path) => {
            info!(path = %path.display(), "loading configuration");
            config::load_config(&path)
        }
        None => {
            warn!("could not determine a config path; using defaults");
            SimulationConfig::default()
        }
    };

    // Swap in an OS adapter for real input synthesis; the host only depends
    // on the injector trait.
    let injector = Arc::new(LoggingInjector::new());
    let simulator = Simulator::new(config, injector);

    let (simulator, started) = tokio::task::spawn_blocking(move || {
        let mut simulator = simulator;
        let started = simulator.start();
        (simulator, started)
    })
    .await?;

    if started == 0 {
        warn!("no workers running; check cpm and mouse settings in the config");
    } else {
        info!(workers = started, "simulation running");
    }

    wakeful_service::shutdown_signal().await;
    info!("shutdown signal received; stopping workers");

    // Best-effort shutdown: a panicked join task must not escape the stop path.
    let _ = tokio::task::spawn_blocking(move || {
        let mut simulator = simulator;
        simulator.stop();
    })
    .await;

    info!("wakefuld stopped");
    Ok(())
}
