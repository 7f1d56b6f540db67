//! persona-export
//!
//! HTML document generation from a styling configuration, and the sinks a
//! finished document can be rendered into.

pub mod error;
pub mod render;
pub mod sink;
pub mod styles;
