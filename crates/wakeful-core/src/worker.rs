//! Cancellable repeating-action loop on a dedicated OS thread.
//!
//! A [`TimedWorker`] wraps an arbitrary action into a loop of
//! "act, compute the next delay, wait".  The wait goes through the worker's
//! [`Event`], so a `stop()` request interrupts the current sleep instead of
//! letting it run to completion.  The action itself is expected to be
//! near-instantaneous (a key press, a pointer nudge); stop latency is
//! therefore bounded by a single in-flight wait.
//!
//! Workers are composition, not thread subclassing: the loop body is
//! parameterised by two captured closures (the action and the delay
//! function), and nothing is re-read from shared mutable state once the
//! worker is constructed.
//!
//! A worker is single-shot.  `start()` consumes the captured closures; after
//! `stop()` and `join()` the instance is discarded and a fresh one is built
//! for the next run.

use std::io;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::debug;

use crate::sync::Event;

type Action = Box<dyn FnMut() + Send>;
type DelayFn = Box<dyn FnMut() -> Duration + Send>;

/// One independent repeating action with cooperative cancellation.
pub struct TimedWorker {
    name: String,
    stop: Arc<Event>,
    done: Arc<Event>,
    body: Option<(Action, DelayFn)>,
    handle: Option<JoinHandle<()>>,
}

impl TimedWorker {
    /// Creates a worker in the non-started state.
    ///
    /// `action` runs once per tick; `next_delay` computes the wait before the
    /// following tick.  Both are captured here and never re-read from outside
    /// the worker.
    pub fn new(
        name: impl Into<String>,
        action: impl FnMut() + Send + 'static,
        next_delay: impl FnMut() -> Duration + Send + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            stop: Arc::new(Event::new()),
            done: Arc::new(Event::new()),
            body: Some((Box::new(action), Box::new(next_delay))),
            handle: None,
        }
    }

    /// Returns the worker's human-readable name (also the thread name).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Spawns the worker loop on a named background thread and returns
    /// immediately.
    ///
    /// Calling `start()` a second time is a no-op: the loop body was already
    /// consumed by the first call.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`io::Error`] if the OS refuses to spawn the
    /// thread.  The worker holds no thread in that case and `join` returns
    /// promptly.
    pub fn start(&mut self) -> io::Result<()> {
        let Some((mut action, mut next_delay)) = self.body.take() else {
            return Ok(());
        };

        let stop = Arc::clone(&self.stop);
        let done = Arc::clone(&self.done);
        let name = self.name.clone();

        let handle = thread::Builder::new()
            .name(self.name.clone())
            .spawn(move || {
                debug!("worker {name} running");
                while !stop.is_set() {
                    action();
                    let delay = next_delay();
                    // A signaled wait means stop() arrived mid-sleep: exit
                    // now rather than completing the delay.
                    if stop.wait_timeout(delay) {
                        break;
                    }
                }
                done.set();
                debug!("worker {name} exited");
            })?;

        self.handle = Some(handle);
        Ok(())
    }

    /// Signals cancellation without blocking.
    ///
    /// Safe to call from any thread, before `start()`, and repeatedly.
    pub fn stop(&self) {
        self.stop.set();
    }

    /// Blocks until the worker loop has exited or `timeout` elapses.
    ///
    /// Returns `true` when the loop has exited (or was never started);
    /// `false` means the thread is still running after the timeout, which
    /// the caller should surface as a leak.
    pub fn join(&mut self, timeout: Duration) -> bool {
        if self.handle.is_none() {
            return true;
        }
        if !self.done.wait_timeout(timeout) {
            return false;
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
        true
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Instant;

    fn counting_worker(delay: Duration) -> (TimedWorker, Arc<AtomicUsize>) {
        let ticks = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&ticks);
        let worker = TimedWorker::new(
            "test-worker",
            move || {
                counter.fetch_add(1, Ordering::Relaxed);
            },
            move || delay,
        );
        (worker, ticks)
    }

    #[test]
    fn test_worker_ticks_repeatedly_until_stopped() {
        let (mut worker, ticks) = counting_worker(Duration::from_millis(10));
        worker.start().expect("spawn");
        std::thread::sleep(Duration::from_millis(100));
        worker.stop();
        assert!(worker.join(Duration::from_secs(1)));
        // First tick fires immediately, then roughly every 10ms.
        assert!(ticks.load(Ordering::Relaxed) >= 3);
    }

    #[test]
    fn test_stop_before_start_prevents_any_tick() {
        let (mut worker, ticks) = counting_worker(Duration::from_millis(1));
        worker.stop();
        worker.start().expect("spawn");
        assert!(worker.join(Duration::from_secs(1)));
        assert_eq!(ticks.load(Ordering::Relaxed), 0);
    }

    #[test]
    fn test_stop_interrupts_a_long_sleep() {
        // Arrange: a delay far longer than the join timeout.
        let (mut worker, ticks) = counting_worker(Duration::from_secs(3600));
        worker.start().expect("spawn");
        std::thread::sleep(Duration::from_millis(30));

        // Act
        let stopped_at = Instant::now();
        worker.stop();
        let exited = worker.join(Duration::from_secs(2));

        // Assert: the wait was interrupted, not slept through.
        assert!(exited, "worker must exit well before the hour-long delay");
        assert!(stopped_at.elapsed() < Duration::from_secs(2));
        assert_eq!(ticks.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn test_stop_is_idempotent() {
        let (mut worker, _ticks) = counting_worker(Duration::from_millis(5));
        worker.start().expect("spawn");
        worker.stop();
        worker.stop();
        assert!(worker.join(Duration::from_secs(1)));
    }

    #[test]
    fn test_join_on_never_started_worker_returns_immediately() {
        let (mut worker, _ticks) = counting_worker(Duration::from_millis(5));
        let started = Instant::now();
        assert!(worker.join(Duration::from_secs(10)));
        assert!(started.elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn test_second_start_is_a_no_op() {
        let (mut worker, ticks) = counting_worker(Duration::from_millis(10));
        worker.start().expect("spawn");
        worker.start().expect("second start must not spawn again");
        std::thread::sleep(Duration::from_millis(30));
        worker.stop();
        assert!(worker.join(Duration::from_secs(1)));
        // A duplicate loop would roughly double the tick count; the exact
        // count is timing-dependent, so just require the loop ran at all.
        assert!(ticks.load(Ordering::Relaxed) >= 1);
    }
}
