//! wakeful-service library entry point.
//!
//! The host is the unattended front-end: it loads the JSON config, starts
//! the simulator, parks until the process is told to stop, and shuts the
//! workers down.  Registration with an OS service manager (SCM units,
//! systemd units) is deliberately out of scope; the binary is written to be
//! *wrapped by* such a manager, which delivers the stop request as a signal.

use std::ffi::OsString;
use std::path::PathBuf;

use wakeful_core::config;

/// Environment variable overriding the config file location.
pub const CONFIG_ENV_VAR: &str = "WAKEFUL_CONFIG";

/// Resolves the config file path: the `WAKEFUL_CONFIG` override first, then
/// the platform default.  `None` when neither can be determined.
pub fn effective_config_path() -> Option<PathBuf> {
    effective_config_path_from(std::env::var_os(CONFIG_ENV_VAR))
}

/// Resolution itself, with the override passed in rather than read from the
/// environment, so it can be exercised without mutating process-global state.
pub fn effective_config_path_from(override_path: Option<OsString>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(PathBuf::from(path));
    }
    config::default_config_path().ok()
}

/// Resolves when the host should shut down: Ctrl-C everywhere, plus SIGTERM
/// on unix (what service managers send on `stop`).
pub async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut term) => {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {}
                    _ = term.recv() => {}
                }
            }
            Err(e) => {
                tracing::warn!("could not install SIGTERM handler: {e}; Ctrl-C only");
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
