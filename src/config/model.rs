// src/config/model.rs

use std::fmt;
use std::time::Duration;

use crate::errors::{LaterError, Result};

/// How long output is shown live before the run detaches.
pub const DEFAULT_DETACH_DELAY: Duration = Duration::from_secs(10);

/// Size of the reusable read buffer used by the output relay (1 MiB).
pub const DEFAULT_CHUNK_SIZE: usize = 1024 * 1024;

/// Immutable per-run configuration.
///
/// Passed by value into the launcher; nothing about a run lives in global
/// state, so several runs can coexist in one process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunConfig {
    /// Retain all output for the final report, not just what follows detach.
    pub report_all_output: bool,
    /// Time from launch until the run stops echoing output live.
    pub detach_delay: Duration,
    /// Read buffer size for the output relay.
    pub chunk_size: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            report_all_output: false,
            detach_delay: DEFAULT_DETACH_DELAY,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl RunConfig {
    pub fn with_report_all_output(mut self, report_all_output: bool) -> Self {
        self.report_all_output = report_all_output;
        self
    }

    pub fn with_detach_delay(mut self, detach_delay: Duration) -> Self {
        self.detach_delay = detach_delay;
        self
    }

    /// A zero chunk size would make every read look like end-of-stream, so it
    /// is bumped to a single byte.
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }
}

/// A resolved command: program name plus argument vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandSpec {
    pub fn new(
        program: impl Into<String>,
        args: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Split a raw argv (`cmd arg...`) into program and arguments.
    pub fn from_argv(argv: Vec<String>) -> Result<Self> {
        let mut iter = argv.into_iter();
        let program = iter.next().ok_or(LaterError::NoCommand)?;
        Ok(Self {
            program,
            args: iter.collect(),
        })
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}
