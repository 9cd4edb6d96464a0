//! Core game logic - pure, deterministic, and testable
//!
//! This crate owns the playing field, the current and queued pieces, collision,
//! row clearing, scoring and game-over detection. It has **no dependencies** on
//! rendering, input devices, timers or I/O:
//!
//! - **Deterministic**: the random source is injected; same seed, same game
//! - **Immutable snapshots**: every transition returns a new [`GameState`]
//! - **Bounded**: every transition is a finite pass over a fixed-size field
//!
//! # Module Structure
//!
//! - [`catalog`]: figure shapes, rotation matrices and spawn offsets
//! - [`field`]: the grid, piece imprinting and marker cleanup
//! - [`collision`]: the single placement legality check
//! - [`ghost`]: landing preview of the current piece
//! - [`rows`]: full-row removal and compaction
//! - [`queue`]: lookahead queue and spawning
//! - [`scoring`]: row clears to points
//! - [`game_state`]: the snapshot value
//! - [`controller`]: the state machine, pure [`transition`] and [`GameController`]
//! - [`config`]: validated construction-time constants
//!
//! # Rules
//!
//! - Gravity is one row per `Tick`; the caller decides the cadence.
//! - A piece that cannot fall further locks in place on the next tick.
//! - Full rows are removed after each lock; 1-3 rows score one point each, four
//!   rows at once score a flat 5.
//! - If the next piece collides as soon as it spawns, the game is over.
//! - Cells above the ceiling never collide, so pieces may spawn and rotate there.
//!
//! # Example
//!
//! ```
//! use stackfall_core::{GameConfig, GameController};
//! use stackfall_types::{Direction, Phase};
//!
//! let mut game = GameController::new(GameConfig::default(), 12345);
//! game.restart();
//! game.move_current(Direction::Right);
//! game.move_current(Direction::Up);
//!
//! for _ in 0..40 {
//!     game.tick();
//! }
//!
//! let state = game.state();
//! assert_eq!(state.phase(), Phase::Playing);
//! assert!(state.total_pieces_spawned() >= 1);
//! ```

pub mod catalog;
pub mod collision;
pub mod config;
pub mod controller;
pub mod field;
pub mod game_state;
pub mod ghost;
pub mod piece;
pub mod queue;
pub mod rows;
pub mod scoring;

pub use stackfall_types as types;

// Re-export commonly used types for convenience
pub use catalog::{Figure, FigureCatalog, Matrix, MatrixError};
pub use collision::is_colliding;
pub use config::{ConfigError, GameConfig};
pub use controller::{transition, GameController, Observer};
pub use field::{Cell, Field, Markers};
pub use game_state::GameState;
pub use ghost::project;
pub use piece::{Offset, Piece};
pub use queue::PieceQueue;
pub use rows::clear_full_rows;
pub use scoring::score_for;
