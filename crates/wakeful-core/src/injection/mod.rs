//! Input-injection port.
//!
//! The simulator never talks to the OS directly.  Everything that actually
//! synthesises input goes through [`InputInjector`], and the OS-specific
//! adapter (`SendInput` on Windows, XTest on Linux, CoreGraphics on macOS)
//! lives outside this crate.  The crate bundles two adapters:
//!
//! - [`mock::MockInjector`] records every call for test assertions.
//! - [`logging::LoggingInjector`] only logs what would be injected; it is the
//!   headless stand-in the binaries ship with.
//!
//! Key names are forwarded to the adapter uninterpreted.  Whether `"space"`
//! or `"sleep"` is a real key is the adapter's concern; the core does not
//! pre-validate beyond passing the string through.

use std::time::Duration;

use thiserror::Error;

pub mod logging;
pub mod mock;

/// Error type for input-injection operations.
#[derive(Debug, Error)]
pub enum InjectionError {
    /// The OS-level injection call failed.
    #[error("platform error: {0}")]
    Platform(String),

    /// The adapter rejected a key identifier it does not understand.
    ///
    /// Neither bundled adapter produces this; it is reserved for OS
    /// adapters that validate key names against their own tables.
    #[error("unsupported key: {0}")]
    UnsupportedKey(String),
}

/// Platform-agnostic input injection trait.
///
/// Implementations must tolerate concurrent calls from the keyboard and
/// mouse workers; the two never coordinate with each other.
#[cfg_attr(test, mockall::automock)]
pub trait InputInjector: Send + Sync {
    /// Presses and releases the key named by `key`.
    fn press_key(&self, key: &str) -> Result<(), InjectionError>;

    /// Moves the pointer by `(dx, dy)` pixels over `duration`.
    fn move_pointer_by(&self, dx: i32, dy: i32, duration: Duration) -> Result<(), InjectionError>;

    /// Returns the primary screen size as `(width, height)` in pixels.
    fn screen_size(&self) -> Result<(u32, u32), InjectionError>;
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_offending_input() {
        assert_eq!(
            InjectionError::UnsupportedKey("warpdrive".into()).to_string(),
            "unsupported key: warpdrive"
        );
        assert_eq!(
            InjectionError::Platform("display gone".into()).to_string(),
            "platform error: display gone"
        );
    }
}
