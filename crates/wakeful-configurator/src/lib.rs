//! wakeful-configurator library entry point.
//!
//! The configurator is the interactive front-end: a form over the five
//! config fields with Start/Stop buttons and a "save config" action.  The
//! form itself (widgets, layout) is out of scope here; this crate provides
//! the backend the form binds to: shared [`ui_bridge::AppState`], DTOs, and
//! command functions that translate widget callbacks into
//! `Simulator::start()` / `stop()` calls and config persistence.

/// Command bridge between a UI shell and the simulator lifecycle.
pub mod ui_bridge;
