//! wakeful-core library entry point.
//!
//! Re-exports all public modules so that integration tests in `tests/` and
//! the front-end binaries (`wakeful`, `wakefuld`, the configurator) share the
//! same module tree.
//!
//! # What does wakeful-core do?
//!
//! The core keeps a workstation looking active by injecting synthetic input
//! at a configurable cadence.  One run of the simulation is:
//!
//! 1. A [`config::SimulationConfig`] describes the desired cadence: keyboard
//!    presses per minute, the key name, and the mouse-nudge interval.
//! 2. A [`simulator::Simulator`] builds at most two [`worker::TimedWorker`]s
//!    (one keyboard, one mouse), each running its repeating action on its own
//!    named OS thread.
//! 3. Between actions each worker waits on its cancellation signal for a
//!    delay computed by [`timing`], so `stop()` latency is bounded by one
//!    sleep rather than by the full tick period.
//! 4. The actual key press / pointer move goes through the
//!    [`injection::InputInjector`] port; the OS-specific adapter lives
//!    outside this crate.

/// Configuration record and its JSON persistence.
pub mod config;

/// Input-injection port and the bundled mock/logging adapters.
pub mod injection;

/// Symbolic key-name table backing the `--list-keys` front-end path.
pub mod keymap;

/// Orchestration of the per-run worker set.
pub mod simulator;

/// Cancellation/notification primitive shared by workers and front-ends.
pub mod sync;

/// Interval jitter computation.
pub mod timing;

/// Cancellable repeating-action loop on a dedicated thread.
pub mod worker;

pub use config::SimulationConfig;
pub use simulator::Simulator;
