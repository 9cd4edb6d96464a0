//! Recording adapter: streams game transitions out as line-delimited JSON.
//!
//! A [`JsonLinesRecorder`] is an [`Observer`](crate::core::Observer) that
//! serializes every new snapshot as one [`StateMessage`] per line. The format
//! is meant for replays and for external tools that follow a game.
//!
//! # Message shape
//!
//! ```text
//! {"seq":3,"command":"left","phase":"playing","score":0,"pieces":1,
//!  "current":{"figure":"T","row":2,"col":3,"matrix":[".#.","###","..."]},
//!  "next":"SZI","field":["..........", ...]}
//! ```
//!
//! `current` is omitted before the first restart. Field rows list figure
//! letters for locked cells and the current piece; the ghost is not recorded.

pub mod protocol;
pub mod recorder;

pub use stackfall_core as core;
pub use stackfall_types as types;

pub use protocol::{PieceSnapshot, StateMessage};
pub use recorder::JsonLinesRecorder;
