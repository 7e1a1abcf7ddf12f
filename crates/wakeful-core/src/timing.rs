//! Interval jitter computation.
//!
//! A worker that fires at exactly its base period produces a perfectly
//! periodic event stream, which is easy for monitoring software to flag as
//! synthetic.  When jitter is enabled, each delay is instead drawn uniformly
//! from `[base - base*ratio, base + base*ratio]`, which keeps the expected
//! rate equal to `base` while breaking up the periodicity.
//!
//! The functions here are pure given their RNG, so tests seed a
//! [`rand::rngs::StdRng`] and get reproducible sequences.

use rand::Rng;

/// Fraction of the base interval used as the jitter window (±10%).
pub const DEFAULT_JITTER_RATIO: f64 = 0.1;

/// Computes the next delay in seconds, drawing from the thread-local RNG.
///
/// Returns `base_seconds` unchanged when `enabled` is false.
pub fn jittered_interval(base_seconds: f64, enabled: bool) -> f64 {
    jittered_interval_with(
        &mut rand::thread_rng(),
        base_seconds,
        enabled,
        DEFAULT_JITTER_RATIO,
    )
}

/// Computes the next delay in seconds using the caller-supplied RNG.
///
/// When `enabled`, the result is uniform over
/// `[base_seconds - base_seconds * ratio, base_seconds + base_seconds * ratio]`
/// and clamped to be non-negative.  When disabled, `base_seconds` is returned
/// exactly.
pub fn jittered_interval_with<R: Rng>(
    rng: &mut R,
    base_seconds: f64,
    enabled: bool,
    ratio: f64,
) -> f64 {
    if !enabled {
        return base_seconds;
    }
    let delta = base_seconds * ratio;
    rng.gen_range(base_seconds - delta..=base_seconds + delta)
        .max(0.0)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
