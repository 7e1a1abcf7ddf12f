//! One-shot notification flag with a cancellation-aware timed wait.
//!
//! [`Event`] is the explicit cancellation token passed between a worker loop
//! and whoever asks it to stop.  It is write-once per run: `stop()` sets it,
//! the worker loop reads it and waits on it.  Front-ends reuse the same type
//! to connect a signal handler to [`crate::Simulator::run_for`].
//!
//! # Why a `Condvar` and not an `AtomicBool`?
//!
//! An atomic flag can only be *polled*; a waiting thread has to wake up on a
//! short timer to notice the flag changed.  A `Condvar` lets the waiter sleep
//! for the full delay and still be woken immediately when the flag is set,
//! which is what bounds the simulator's stop latency to one in-flight wait.

use std::sync::{Condvar, Mutex};
use std::time::Duration;

/// A thread-safe, manually-set, never-cleared notification flag.
#[derive(Debug, Default)]
pub struct Event {
    signaled: Mutex<bool>,
    condvar: Condvar,
}

impl Event {
    /// Creates a new unsignaled event.
    pub fn new() -> Self {
        Self::default()
    }

    /// Signals the event, waking every current and future waiter.
    ///
    /// Idempotent; the event never resets.
    pub fn set(&self) {
        let mut signaled = self.signaled.lock().unwrap();
        *signaled = true;
        self.condvar.notify_all();
    }

    /// Returns whether the event has been signaled.
    pub fn is_set(&self) -> bool {
        *self.signaled.lock().unwrap()
    }

    /// Blocks until the event is signaled or `timeout` elapses.
    ///
    /// Returns `true` if the event was signaled, `false` on timeout.
    pub fn wait_timeout(&self, timeout: Duration) -> bool {
        let guard = self.signaled.lock().unwrap();
        let (guard, _) = self
            .condvar
            .wait_timeout_while(guard, timeout, |signaled| !*signaled)
            .unwrap();
        *guard
    }

    /// Blocks until the event is signaled.
    pub fn wait(&self) {
        let guard = self.signaled.lock().unwrap();
        let _guard = self
            .condvar
            .wait_while(guard, |signaled| !*signaled)
            .unwrap();
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
