//! Configurator command bridge: exposes simulator lifecycle operations to a
//! UI shell.
//!
//! The command functions here are shaped like Tauri commands: each takes the
//! shared [`AppState`], does one thing, and returns a [`CommandResult`]
//! envelope the frontend can consume without a try/catch around every call.
//! In a Tauri build each function gains a `#[tauri::command]` attribute and
//! is registered with the builder; the headless binary and the tests call
//! them directly.
//!
//! # Data Transfer Objects (DTOs)
//!
//! [`SimulationConfigDto`] mirrors the on-disk JSON field names (`cpm`,
//! `mouse_enable`, ...) so the form, the wire format, and the file all speak
//! the same vocabulary.  Conversions to and from the core
//! [`SimulationConfig`] live next to the DTO.
//!
//! # One simulator per run
//!
//! The config record is immutable per run, so "apply my edits" is expressed
//! as: stop the current simulator (if any), build a fresh one from the
//! current form state, start it.  [`start_simulation`] does exactly that;
//! there is no in-place reconfiguration path.

use std::path::PathBuf;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{info, warn};

use wakeful_core::config::{self, SimulationConfig};
use wakeful_core::keymap;
use wakeful_core::injection::logging::LoggingInjector;
use wakeful_core::injection::InputInjector;
use wakeful_core::Simulator;

// ── Shared application state ──────────────────────────────────────────────────

/// State shared between UI commands.
///
/// Fields are async Tokio mutexes because commands run concurrently on the
/// UI shell's async runtime; the simulator's own blocking joins are pushed
/// onto `spawn_blocking` so they never stall other commands' progress for
/// long.
pub struct AppState {
    /// The simulator of the current run; `None` while stopped.
    simulator: Mutex<Option<Simulator>>,
    /// The current form state; snapshotted into each run's config.
    config: Mutex<SimulationConfig>,
    /// Where `save_config` persists the form state, when resolvable.
    config_path: Option<PathBuf>,
    /// The injection adapter every run uses.
    injector: Arc<dyn InputInjector>,
}

impl AppState {
    /// Initialises state from the persisted configuration, falling back to
    /// defaults when no file exists yet.
    pub fn new() -> Arc<Self> {
        let config_path = config::default_config_path().ok();
        let config = config_path
            .as_deref()
            .map(config::load_config)
            .unwrap_or_default();
        Self::with_parts(config, config_path, Arc::new(LoggingInjector::new()))
    }

    /// Embedding/test constructor with explicit storage path and injector.
    pub fn with_parts(
        config: SimulationConfig,
        config_path: Option<PathBuf>,
        injector: Arc<dyn InputInjector>,
    ) -> Arc<Self> {
        Arc::new(Self {
            simulator: Mutex::new(None),
            config: Mutex::new(config),
            config_path,
            injector,
        })
    }
}

// ── Command envelope ──────────────────────────────────────────────────────────

/// Uniform command response: `{ success, data, error }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandResult<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> CommandResult<T> {
    /// A successful result carrying `data`.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// A failed result carrying an error message.
    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

// ── Data Transfer Objects ─────────────────────────────────────────────────────

/// Form-facing view of [`SimulationConfig`], using the on-disk field names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfigDto {
    pub cpm: u32,
    pub key: String,
    pub mouse_enable: bool,
    pub mouse_interval: f64,
    pub randomize_interval: bool,
}

impl From<&SimulationConfig> for SimulationConfigDto {
    fn from(config: &SimulationConfig) -> Self {
        Self {
            cpm: config.clicks_per_minute,
            key: config.key.clone(),
            mouse_enable: config.mouse_enabled,
            mouse_interval: config.mouse_interval_seconds,
            randomize_interval: config.randomize_interval,
        }
    }
}

impl From<SimulationConfigDto> for SimulationConfig {
    fn from(dto: SimulationConfigDto) -> Self {
        Self {
            clicks_per_minute: dto.cpm,
            key: dto.key,
            mouse_enabled: dto.mouse_enable,
            mouse_interval_seconds: dto.mouse_interval,
            randomize_interval: dto.randomize_interval,
        }
    }
}

// ── Commands ──────────────────────────────────────────────────────────────────

/// Returns the current form state.
pub async fn get_config(state: &AppState) -> CommandResult<SimulationConfigDto> {
    let config = state.config.lock().await;
    CommandResult::ok(SimulationConfigDto::from(&*config))
}

/// Replaces the form state.  Takes effect at the next start; a running
/// simulation keeps the immutable config it was built with.
pub async fn set_config(state: &AppState, dto: SimulationConfigDto) -> CommandResult<bool> {
    if !keymap::is_supported(&dto.key) {
        // Accepted anyway: the injection adapter may know more keys than the
        // advertised table; rejection is its call to make.
        warn!("key {:?} is not in the advertised key table", dto.key);
    }
    *state.config.lock().await = dto.into();
    CommandResult::ok(true)
}

/// Stops any current run and starts a fresh one from the form state.
///
/// The returned number is how many workers are running; `0` means the form
/// disabled everything, which the UI surfaces rather than treating as an
/// error.
pub async fn start_simulation(state: &AppState) -> CommandResult<usize> {
    stop_current(state).await;

    let config = state.config.lock().await.clone();
    info!(cpm = config.clicks_per_minute, "starting simulation from configurator");

    let simulator = Simulator::new(config, Arc::clone(&state.injector));
    let spawned = tokio::task::spawn_blocking(move || {
        let mut simulator = simulator;
        let started = simulator.start();
        (simulator, started)
    })
    .await;

    match spawned {
        Ok((simulator, started)) => {
            *state.simulator.lock().await = Some(simulator);
            CommandResult::ok(started)
        }
        Err(e) => CommandResult::err(format!("start task failed: {e}")),
    }
}

/// Stops the current run, if any.  `data` reports whether one was running.
pub async fn stop_simulation(state: &AppState) -> CommandResult<bool> {
    let was_running = stop_current(state).await;
    CommandResult::ok(was_running)
}

/// Returns whether a run is currently active.
pub async fn is_running(state: &AppState) -> CommandResult<bool> {
    CommandResult::ok(state.simulator.lock().await.is_some())
}

/// Persists the form state to the config file.
pub async fn save_config(state: &AppState) -> CommandResult<bool> {
    let Some(path) = state.config_path.as_deref() else {
        return CommandResult::err("no config path available on this platform");
    };
    let config = state.config.lock().await.clone();
    match config::save_config(path, &config) {
        Ok(()) => {
            info!(path = %path.display(), "configuration saved");
            CommandResult::ok(true)
        }
        Err(e) => CommandResult::err(e.to_string()),
    }
}

/// Takes the current simulator out of the state and stops it off the async
/// threads.  Returns whether there was one.
async fn stop_current(state: &AppState) -> bool {
    let Some(simulator) = state.simulator.lock().await.take() else {
        return false;
    };
    // stop() joins with a bounded timeout and never errors by contract; the
    // spawn_blocking result only fails if the task itself panicked.
    let _ = tokio::task::spawn_blocking(move || {
        let mut simulator = simulator;
        simulator.stop();
    })
    .await;
    true
}

// ── Tests ─────────────────────────────────────────────────────────────────────
