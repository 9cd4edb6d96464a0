//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::Command`]s. It knows
//! nothing about game rules beyond choosing between pause and resume.

pub mod map;

pub use stackfall_types as types;

pub use map::{map_key, pause_command, should_quit, KeyIntent};
