//! wakeful-cli library entry point.
//!
//! Holds the argument definitions so the flag-to-config mapping can be unit
//! tested; `main.rs` only wires the parsed arguments to the simulator.

/// Command-line argument definitions and config mapping.
pub mod args;
