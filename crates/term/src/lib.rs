//! Terminal rendering for stackfall.
//!
//! A small game-oriented rendering layer: a [`GameView`] draws a core
//! `GameState` into a [`FrameBuffer`], and a [`TerminalRenderer`] flushes
//! frames to the terminal through `crossterm`.
//!
//! Goals:
//! - Keep `core` free of any terminal concern
//! - Draw straight from the snapshot's marked cells (current, ghost, locked)
//! - Control the aspect ratio (2 chars wide per field cell by default)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use stackfall_core as core;
pub use stackfall_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::TerminalRenderer;
