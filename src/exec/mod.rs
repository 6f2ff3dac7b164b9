// src/exec/mod.rs

//! Process execution layer.
//!
//! This module runs one command with `tokio::process::Command` and
//! coordinates the tasks that live alongside it:
//!
//! - [`launcher`] spawns the command and owns the per-run record.
//! - [`relay`] streams stdout to the console and/or the retained buffer.
//! - [`detach`] holds the attach/detach flag and the one-shot timer.
//! - [`exit_watcher`] waits for termination and extracts the exit code.
//! - [`console`] is the shared writer everything above prints through.

pub mod console;
pub mod detach;
pub mod exit_watcher;
pub mod launcher;
pub mod relay;

pub use console::Console;
pub use detach::{DetachFlag, spawn_detach_timer};
pub use exit_watcher::{ExitOutcome, ExitWatcher};
pub use launcher::{Launcher, RunRecord, RunReport};
pub use relay::{RelayOutput, Route, relay_output, spawn_relay};
