//! Symbolic key-name table.
//!
//! The names the front-ends advertise for the `--list-keys` path and the
//! configurator's key field.  The table mirrors the common automation key
//! vocabulary (letters, digits, function keys, navigation and modifier
//! keys); an injection adapter may accept more names than listed here.
//!
//! The core deliberately does **not** validate `SimulationConfig::key`
//! against this table; unknown names are forwarded to the adapter, and any
//! rejection is the adapter's to raise.

/// All advertised key names, in ascending byte order.
pub const SUPPORTED_KEYS: &[&str] = &[
    "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", "a", "alt", "b", "backspace", "c",
    "capslock", "ctrl", "d", "delete", "down", "e", "end", "enter", "esc", "f", "f1", "f10",
    "f11", "f12", "f2", "f3", "f4", "f5", "f6", "f7", "f8", "f9", "g", "h", "home", "i",
    "insert", "j", "k", "l", "left", "m", "n", "numlock", "o", "p", "pagedown", "pageup",
    "pause", "printscreen", "q", "r", "right", "s", "scrolllock", "shift", "space", "t", "tab",
    "u", "up", "v", "w", "win", "x", "y", "z",
];

/// Returns the advertised key names, sorted ascending.
pub fn supported_keys() -> &'static [&'static str] {
    SUPPORTED_KEYS
}

/// Returns whether `name` is in the advertised table.
pub fn is_supported(name: &str) -> bool {
    SUPPORTED_KEYS.binary_search(&name).is_ok()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
