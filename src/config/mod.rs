// src/config/mod.rs

//! Run configuration.
//!
//! Everything a run needs is resolved up front into plain values:
//!
//! - [`model::RunConfig`] carries the relay/detach policy for one run.
//! - [`model::CommandSpec`] is the program plus its argument vector.
//! - [`duration`] parses the human duration strings accepted on the CLI.

pub mod duration;
pub mod model;

pub use duration::parse_duration;
pub use model::{CommandSpec, DEFAULT_CHUNK_SIZE, DEFAULT_DETACH_DELAY, RunConfig};
