//! Stackfall (workspace facade crate).
//!
//! Re-exports the member crates under `crates/` as `stackfall::{core, types, input, term, adapter}`
//! so binaries, integration tests and benches depend on a single package.

pub use stackfall_adapter as adapter;
pub use stackfall_core as core;
pub use stackfall_input as input;
pub use stackfall_term as term;
pub use stackfall_types as types;
