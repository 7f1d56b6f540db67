//! persona-core
//!
//! Pure domain types: the styling `Configuration`, DNA profiles and the
//! theme derived from them. No I/O — this is the shared vocabulary of the
//! Persona workspace.

pub mod color;
pub mod error;
pub mod models;
pub mod theme;
