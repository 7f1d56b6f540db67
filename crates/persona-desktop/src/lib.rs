//! persona-desktop library root.
//!
//! Re-exports the intake pipeline, sinks and settings so that integration
//! tests can drive them without the CLI layer.

pub mod browser;
pub mod config;
pub mod derive;
pub mod error;
pub mod generator;
pub mod intake;
pub mod notify;
