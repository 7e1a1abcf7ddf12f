//! Logging-only input injector.
//!
//! The headless adapter the binaries ship with: every call succeeds and is
//! traced at debug level, but no OS input is synthesised.  Swap in a real
//! adapter (`SendInput`, XTest, CoreGraphics) to drive actual hardware-level
//! events; the simulator only ever sees the [`InputInjector`] trait.

use std::time::Duration;

use tracing::debug;

use super::{InjectionError, InputInjector};

/// Screen size reported when no display can be queried.
const ASSUMED_SCREEN: (u32, u32) = (1920, 1080);

/// An injector that traces calls instead of performing them.
#[derive(Debug, Default)]
pub struct LoggingInjector;

impl LoggingInjector {
    /// Creates a new logging injector.
    pub fn new() -> Self {
        Self
    }
}

impl InputInjector for LoggingInjector {
    fn press_key(&self, key: &str) -> Result<(), InjectionError> {
        debug!("press key {key:?}");
        Ok(())
    }

    fn move_pointer_by(&self, dx: i32, dy: i32, duration: Duration) -> Result<(), InjectionError> {
        debug!("move pointer by ({dx}, {dy}) over {duration:?}");
        Ok(())
    }

    fn screen_size(&self) -> Result<(u32, u32), InjectionError> {
        Ok(ASSUMED_SCREEN)
    }
}
