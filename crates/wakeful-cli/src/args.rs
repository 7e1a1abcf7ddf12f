//! Command-line arguments for the interactive runner.
//!
//! The flags mirror the fields of [`SimulationConfig`] one-to-one, plus the
//! run duration and the `--list-keys` escape hatch that bypasses simulation
//! entirely.  The mouse worker is on by default; `--no-mouse` turns it off
//! and `--mouse-enable` exists so scripts can state the default explicitly.

use std::time::Duration;

use clap::Parser;

use wakeful_core::SimulationConfig;

/// Simulates keyboard and mouse activity so the workstation never looks idle.
#[derive(Parser, Debug, Clone)]
#[command(name = "wakeful", version, about)]
pub struct CliArgs {
    /// Keyboard presses per minute (0 disables the keyboard worker).
    #[arg(long, default_value_t = 120)]
    pub cpm: u32,

    /// Key to press, by symbolic name (see --list-keys).
    #[arg(long, default_value = "space")]
    pub key: String,

    /// Seconds between mouse nudges.
    #[arg(long, default_value_t = 5.0)]
    pub mouse_interval: f64,

    /// Enable the mouse worker (the default).
    #[arg(long, overrides_with = "no_mouse")]
    pub mouse_enable: bool,

    /// Disable the mouse worker.
    #[arg(long, overrides_with = "mouse_enable")]
    pub no_mouse: bool,

    /// Total run time in seconds (0 = run until interrupted).
    #[arg(long, default_value_t = 0.0)]
    pub duration: f64,

    /// Apply ±10% jitter to the intervals between actions.
    #[arg(long)]
    pub randomize_interval: bool,

    /// Print the supported key names and exit.
    #[arg(long)]
    pub list_keys: bool,
}

impl CliArgs {
    /// Whether the mouse worker should run: on unless `--no-mouse` won.
    pub fn mouse_enabled(&self) -> bool {
        !self.no_mouse
    }

    /// The requested run time as a `Duration`; zero means run until
    /// interrupted.
    ///
    /// Clap accepts any `f64` here, so the conversion has to absorb the
    /// whole range: non-finite and negative values degrade to zero, and
    /// values beyond what a `Duration` can hold saturate instead of
    /// panicking in `Duration::from_secs_f64`.
    pub fn run_duration(&self) -> Duration {
        if !self.duration.is_finite() || self.duration <= 0.0 {
            return Duration::ZERO;
        }
        Duration::try_from_secs_f64(self.duration).unwrap_or(Duration::MAX)
    }

    /// Builds the per-run config from the parsed flags.
    pub fn to_config(&self) -> SimulationConfig {
        SimulationConfig {
            clicks_per_minute: self.cpm,
            key: self.key.clone(),
            mouse_enabled: self.mouse_enabled(),
            mouse_interval_seconds: self.mouse_interval,
            randomize_interval: self.randomize_interval,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(argv).expect("argv must parse")
    }

    #[test]
    fn test_no_flags_yields_the_default_config() {
        let config = parse(&["wakeful"]).to_config();
        assert_eq!(config, SimulationConfig::default());
    }

    #[test]
    fn test_all_flags_map_onto_the_config() {
        let config = parse(&[
            "wakeful",
            "--cpm",
            "30",
            "--key",
            "f15",
            "--mouse-interval",
            "2.5",
            "--randomize-interval",
        ])
        .to_config();

        assert_eq!(config.clicks_per_minute, 30);
        assert_eq!(config.key, "f15");
        assert!(config.mouse_enabled);
        assert_eq!(config.mouse_interval_seconds, 2.5);
        assert!(config.randomize_interval);
    }

    #[test]
    fn test_no_mouse_disables_the_mouse_worker() {
        let config = parse(&["wakeful", "--no-mouse"]).to_config();
        assert!(!config.mouse_enabled);
    }

    #[test]
    fn test_mouse_enable_wins_when_it_comes_last() {
        let args = parse(&["wakeful", "--no-mouse", "--mouse-enable"]);
        assert!(args.mouse_enabled());
    }

    #[test]
    fn test_duration_defaults_to_indefinite() {
        let args = parse(&["wakeful"]);
        assert_eq!(args.duration, 0.0);
        assert!(!args.list_keys);
    }

    #[test]
    fn test_list_keys_flag_parses() {
        assert!(parse(&["wakeful", "--list-keys"]).list_keys);
    }

    // ── Duration conversion ───────────────────────────────────────────────────

    #[test]
    fn test_ordinary_duration_converts_exactly() {
        let args = parse(&["wakeful", "--duration", "2.5"]);
        assert_eq!(args.run_duration(), Duration::from_millis(2500));
    }

    #[test]
    fn test_oversized_duration_saturates_instead_of_panicking() {
        // 1e30 seconds is finite but far beyond what a Duration can hold.
        let args = parse(&["wakeful", "--duration", "1e30"]);
        assert_eq!(args.run_duration(), Duration::MAX);
    }

    #[test]
    fn test_negative_and_non_finite_durations_degrade_to_indefinite() {
        assert_eq!(parse(&["wakeful", "--duration=-5"]).run_duration(), Duration::ZERO);
        assert_eq!(parse(&["wakeful", "--duration=inf"]).run_duration(), Duration::ZERO);
        assert_eq!(parse(&["wakeful", "--duration=NaN"]).run_duration(), Duration::ZERO);
    }
}
