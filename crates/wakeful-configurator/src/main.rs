//! Wakeful configurator entry point.
//!
//! Wires the shared [`AppState`] and parks until shutdown.  In a full Tauri
//! build, `tauri::Builder::default()` would be invoked here to open the form
//! window and register the `ui_bridge` commands; the headless variant keeps
//! the backend runnable (and its lifecycle testable) without a UI toolkit.

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use wakeful_configurator::ui_bridge::{self, AppState};
use wakeful_core::sync::Event;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialise structured logging.  Level is overridden by `RUST_LOG`.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Wakeful configurator starting");

    // Load the persisted config into the form state.
    let state = AppState::new();

    // Shutdown event set by the Ctrl-C handler.
    let shutdown = Arc::new(Event::new());
    let shutdown_handler = Arc::clone(&shutdown);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("shutdown signal received");
            shutdown_handler.set();
        }
    });

    info!("configurator ready; press Ctrl-C to exit");

    // In a full Tauri build the window event loop would block here instead.
    let parked = Arc::clone(&shutdown);
    tokio::task::spawn_blocking(move || parked.wait()).await?;

    // A run left active from the UI is stopped on the way out.
    let _ = ui_bridge::stop_simulation(&state).await;

    info!("configurator stopped");
    Ok(())
}
