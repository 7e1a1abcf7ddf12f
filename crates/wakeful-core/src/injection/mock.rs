//! Mock input injector for unit and integration testing.
//!
//! # Why a mock injector?
//!
//! A real injector makes OS API calls that:
//!
//! - Require a physical desktop session to run.
//! - Actually press keys or move the cursor on the test machine.
//! - Cannot be observed directly from Rust test code.
//!
//! `MockInjector` replaces the OS calls with in-memory recording.  Each
//! injected event is pushed into a `Mutex<Vec<...>>` so test assertions can
//! inspect exactly what was injected and in what order.
//!
//! # `should_fail` flag
//!
//! Construct with `failing()` to make every method return an
//! [`InjectionError::Platform`].  This exercises the workers' error paths
//! without needing a broken OS.

use std::sync::Mutex;
use std::time::Duration;

use super::{InjectionError, InputInjector};

/// An injector that records all calls without touching the OS.
///
/// Record fields are `Mutex<Vec<...>>` so tests can share the injector
/// across threads behind an `Arc`.
#[derive(Debug)]
pub struct MockInjector {
    /// Records each key name passed to `press_key`.
    pub key_presses: Mutex<Vec<String>>,
    /// Records each `(dx, dy)` offset passed to `move_pointer_by`.
    pub pointer_moves: Mutex<Vec<(i32, i32)>>,
    /// The screen size reported by `screen_size`.
    pub screen: (u32, u32),
    /// When `true`, every method immediately returns a `Platform` error.
    pub should_fail: bool,
}

impl Default for MockInjector {
    fn default() -> Self {
        Self {
            key_presses: Mutex::new(Vec::new()),
            pointer_moves: Mutex::new(Vec::new()),
            screen: (1920, 1080),
            should_fail: false,
        }
    }
}

impl MockInjector {
    /// Creates a mock reporting a 1920x1080 screen.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mock reporting the given screen size.
    pub fn with_screen(width: u32, height: u32) -> Self {
        Self {
            screen: (width, height),
            ..Self::default()
        }
    }

    /// Creates a mock whose every call fails.
    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }
}

impl InputInjector for MockInjector {
    /// Records the key press, or fails if `should_fail` is set.
    fn press_key(&self, key: &str) -> Result<(), InjectionError> {
        if self.should_fail {
            return Err(InjectionError::Platform("mock failure".into()));
        }
        self.key_presses.lock().unwrap().push(key.to_string());
        Ok(())
    }

    /// Records the pointer offset, or fails if `should_fail` is set.
    fn move_pointer_by(
        &self,
        dx: i32,
        dy: i32,
        _duration: Duration,
    ) -> Result<(), InjectionError> {
        if self.should_fail {
            return Err(InjectionError::Platform("mock failure".into()));
        }
        self.pointer_moves.lock().unwrap().push((dx, dy));
        Ok(())
    }

    /// Reports the configured screen size, or fails if `should_fail` is set.
    fn screen_size(&self) -> Result<(u32, u32), InjectionError> {
        if self.should_fail {
            return Err(InjectionError::Platform("mock failure".into()));
        }
        Ok(self.screen)
    }
}
