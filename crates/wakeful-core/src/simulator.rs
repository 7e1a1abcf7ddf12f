//! Orchestration of one simulation run.
//!
//! A [`Simulator`] owns the worker set for a single run: at most one
//! keyboard worker and one mouse worker, built from an immutable
//! [`SimulationConfig`] snapshot at `start()`.  The workers are fully
//! independent: they share no mutable state and never coordinate, and the only
//! cross-thread traffic is each worker's own cancellation signal.
//!
//! `start()` begins by stopping any stale workers, so calling it twice is
//! equivalent to stop-then-start.  `stop()` is best-effort by contract: it
//! signals, joins with a bounded timeout, logs any worker that failed to
//! exit, and never propagates an error out of the shutdown path.

use std::sync::Arc;
use std::time::Duration;

use rand::Rng;
use tracing::{debug, error, info, warn};

use crate::config::SimulationConfig;
use crate::injection::InputInjector;
use crate::sync::Event;
use crate::timing;
use crate::worker::TimedWorker;

/// Upper bound on how long `stop()` waits for each worker to exit.
pub const DEFAULT_JOIN_TIMEOUT: Duration = Duration::from_secs(5);

/// Time taken by each half of the mouse nudge (out, then back).
const MOUSE_MOVE_DURATION: Duration = Duration::from_millis(100);

/// Screen size assumed when the injector cannot report one.
const FALLBACK_SCREEN: (u32, u32) = (1920, 1080);

/// Divisor mapping the smaller screen dimension to the nudge amplitude.
const AMPLITUDE_DIVISOR: u32 = 200;

/// Seconds between key presses for a given clicks-per-minute rate.
fn keyboard_period_seconds(clicks_per_minute: u32) -> f64 {
    60.0 / f64::from(clicks_per_minute)
}

/// Converts a non-negative delay in seconds to a `Duration`, saturating for
/// values too large to represent (a config can hold any JSON number).
fn delay_from_seconds(seconds: f64) -> Duration {
    Duration::try_from_secs_f64(seconds).unwrap_or(Duration::MAX)
}

/// Coordinates the active workers of one run as a single unit.
pub struct Simulator {
    config: SimulationConfig,
    injector: Arc<dyn InputInjector>,
    workers: Vec<TimedWorker>,
}

impl Simulator {
    /// Creates a stopped simulator for `config`, injecting through `injector`.
    pub fn new(config: SimulationConfig, injector: Arc<dyn InputInjector>) -> Self {
        Self {
            config,
            injector,
            workers: Vec::new(),
        }
    }

    /// Returns the config this run was constructed with.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Returns how many workers are currently running.
    pub fn running_workers(&self) -> usize {
        self.workers.len()
    }

    /// Returns whether any worker is currently running.
    pub fn is_running(&self) -> bool {
        !self.workers.is_empty()
    }

    /// Builds and starts the workers matching the config.
    ///
    /// Stops any stale workers first, so repeated calls never duplicate a
    /// worker.  Returns the number of workers that are actually running;
    /// `0` means the config disabled everything or every spawn failed, a
    /// state the caller can report instead of an error surfacing from a
    /// background thread.
    pub fn start(&mut self) -> usize {
        self.stop();

        let mut pending = Vec::new();
        if self.config.clicks_per_minute > 0 {
            pending.push(self.keyboard_worker());
        }
        let interval = self.config.mouse_interval_seconds;
        if self.config.mouse_enabled && interval.is_finite() && interval > 0.0 {
            pending.push(self.mouse_worker());
        }

        for mut worker in pending {
            match worker.start() {
                Ok(()) => self.workers.push(worker),
                Err(e) => error!("failed to start worker {}: {e}", worker.name()),
            }
        }

        if self.workers.is_empty() {
            debug!("no workers to run for this config");
        } else {
            info!(workers = self.workers.len(), "simulation started");
        }
        self.workers.len()
    }

    /// Stops all workers, waiting up to [`DEFAULT_JOIN_TIMEOUT`] for each.
    pub fn stop(&mut self) {
        self.stop_with_timeout(DEFAULT_JOIN_TIMEOUT);
    }

    /// Stops all workers, waiting up to `join_timeout` for each to exit.
    ///
    /// Signals every worker before joining any, so the total shutdown
    /// latency is bounded by one in-flight wait, not their sum.  A worker
    /// that fails to exit in time is logged and abandoned; this method never
    /// fails.  Calling it with no workers is a no-op.
    pub fn stop_with_timeout(&mut self, join_timeout: Duration) {
        if self.workers.is_empty() {
            return;
        }

        for worker in &self.workers {
            worker.stop();
        }
        for worker in &mut self.workers {
            if !worker.join(join_timeout) {
                warn!(
                    "worker {} did not exit within {:?}; abandoning its thread",
                    worker.name(),
                    join_timeout
                );
            }
        }
        self.workers.clear();
        debug!("simulation stopped");
    }

    /// Starts the workers, blocks until `duration` elapses (or, when zero,
    /// until `interrupt` is signaled), then stops them.
    ///
    /// The wait itself is interruptible: signaling `interrupt` ends a timed
    /// run early.  `stop()` sits on the straight-line path after the wait,
    /// so cleanup runs no matter how the wait ended.
    pub fn run_for(&mut self, duration: Duration, interrupt: &Event) {
        self.start();
        if duration > Duration::ZERO {
            interrupt.wait_timeout(duration);
        } else {
            interrupt.wait();
        }
        self.stop();
    }

    // ── Worker construction ───────────────────────────────────────────────────

    fn keyboard_worker(&self) -> TimedWorker {
        let injector = Arc::clone(&self.injector);
        let key = self.config.key.clone();
        let base = keyboard_period_seconds(self.config.clicks_per_minute);
        let randomize = self.config.randomize_interval;

        TimedWorker::new(
            "wakeful-keyboard",
            move || {
                if let Err(e) = injector.press_key(&key) {
                    warn!("key press failed: {e}");
                }
            },
            move || delay_from_seconds(timing::jittered_interval(base, randomize)),
        )
    }

    fn mouse_worker(&self) -> TimedWorker {
        let injector = Arc::clone(&self.injector);
        let (width, height) = match injector.screen_size() {
            Ok(size) => size,
            Err(e) => {
                warn!(
                    "screen size query failed: {e}; assuming {}x{}",
                    FALLBACK_SCREEN.0, FALLBACK_SCREEN.1
                );
                FALLBACK_SCREEN
            }
        };
        let amplitude = (width.min(height) / AMPLITUDE_DIVISOR).max(1) as i32;
        let interval = self.config.mouse_interval_seconds;
        let randomize = self.config.randomize_interval;

        TimedWorker::new(
            "wakeful-mouse",
            move || {
                let mut rng = rand::thread_rng();
                let dx = rng.gen_range(-amplitude..=amplitude);
                let dy = rng.gen_range(-amplitude..=amplitude);
                // Out and back in one tick, so the cursor twitches but its
                // net displacement stays zero.
                if let Err(e) = injector.move_pointer_by(dx, dy, MOUSE_MOVE_DURATION) {
                    warn!("pointer move failed: {e}");
                }
                if let Err(e) = injector.move_pointer_by(-dx, -dy, MOUSE_MOVE_DURATION) {
                    warn!("pointer move failed: {e}");
                }
            },
            move || delay_from_seconds(timing::jittered_interval(interval, randomize)),
        )
    }
}

impl Drop for Simulator {
    fn drop(&mut self) {
        self.stop();
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::injection::mock::MockInjector;
    use crate::injection::MockInputInjector;
    use std::time::Instant;

    fn config(cpm: u32, mouse_enabled: bool, mouse_interval: f64) -> SimulationConfig {
        SimulationConfig {
            clicks_per_minute: cpm,
            key: "space".to_string(),
            mouse_enabled,
            mouse_interval_seconds: mouse_interval,
            randomize_interval: false,
        }
    }

    // ── Period computation ────────────────────────────────────────────────────

    #[test]
    fn test_keyboard_period_for_120_cpm_is_half_a_second() {
        assert_eq!(keyboard_period_seconds(120), 0.5);
    }

    #[test]
    fn test_keyboard_period_for_60_cpm_is_one_second() {
        assert_eq!(keyboard_period_seconds(60), 1.0);
    }

    // ── Worker selection ──────────────────────────────────────────────────────

    #[test]
    fn test_all_disabled_config_starts_zero_workers() {
        let mut simulator = Simulator::new(config(0, false, 5.0), Arc::new(MockInjector::new()));
        assert_eq!(simulator.start(), 0);
        assert!(!simulator.is_running());

        // Immediate stop on the empty set must be a prompt no-op.
        let started = Instant::now();
        simulator.stop();
        assert!(started.elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn test_zero_cpm_disables_only_the_keyboard_worker() {
        let mut simulator = Simulator::new(config(0, true, 5.0), Arc::new(MockInjector::new()));
        assert_eq!(simulator.start(), 1);
        simulator.stop();
    }

    #[test]
    fn test_zero_mouse_interval_disables_only_the_mouse_worker() {
        let mut simulator = Simulator::new(config(120, true, 0.0), Arc::new(MockInjector::new()));
        assert_eq!(simulator.start(), 1);
        simulator.stop();
    }

    #[test]
    fn test_full_config_starts_both_workers() {
        let mut simulator = Simulator::new(config(120, true, 5.0), Arc::new(MockInjector::new()));
        assert_eq!(simulator.start(), 2);
        simulator.stop();
        assert_eq!(simulator.running_workers(), 0);
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────────

    #[test]
    fn test_stop_without_start_returns_promptly() {
        let mut simulator = Simulator::new(config(120, true, 5.0), Arc::new(MockInjector::new()));
        let started = Instant::now();
        simulator.stop();
        assert!(started.elapsed() < DEFAULT_JOIN_TIMEOUT);
    }

    #[test]
    fn test_double_start_never_duplicates_workers() {
        let mut simulator = Simulator::new(config(600, false, 5.0), Arc::new(MockInjector::new()));
        assert_eq!(simulator.start(), 1);
        assert_eq!(simulator.start(), 1, "restart must replace, not add");
        simulator.stop();
    }

    #[test]
    fn test_start_after_stop_creates_a_fresh_run() {
        let mut simulator = Simulator::new(config(600, false, 5.0), Arc::new(MockInjector::new()));
        assert_eq!(simulator.start(), 1);
        simulator.stop();
        assert_eq!(simulator.start(), 1);
        simulator.stop();
    }

    #[test]
    fn test_failing_injector_still_starts_and_stops_cleanly() {
        // Injection failures are the adapter's concern; the run itself must
        // keep ticking and shut down normally.
        let mut simulator = Simulator::new(config(600, true, 0.05), Arc::new(MockInjector::failing()));
        assert_eq!(simulator.start(), 2);
        std::thread::sleep(Duration::from_millis(50));
        simulator.stop();
        assert!(!simulator.is_running());
    }

    // ── Injection expectations (mockall) ──────────────────────────────────────

    #[test]
    fn test_keyboard_worker_presses_the_configured_key() {
        let mut mock = MockInputInjector::new();
        mock.expect_press_key()
            .withf(|key| key == "space")
            .returning(|_| Ok(()))
            .times(1..);

        // 600 cpm = one press every 100ms; the first fires immediately.
        let mut simulator = Simulator::new(config(600, false, 5.0), Arc::new(mock));
        assert_eq!(simulator.start(), 1);
        std::thread::sleep(Duration::from_millis(50));
        simulator.stop();
    }

    #[test]
    fn test_mouse_worker_queries_the_screen_once_per_start() {
        let mut mock = MockInputInjector::new();
        mock.expect_screen_size().times(1).returning(|| Ok((800, 600)));
        mock.expect_move_pointer_by().returning(|_, _, _| Ok(()));

        let mut simulator = Simulator::new(config(0, true, 10.0), Arc::new(mock));
        assert_eq!(simulator.start(), 1);
        std::thread::sleep(Duration::from_millis(30));
        simulator.stop();
    }
}
