// src/errors.rs

//! Crate-wide error type.
//!
//! Spawn failures surface synchronously from the launcher. Stream, console and
//! wait failures are produced by the background tasks and handed back to the
//! orchestrator, which treats them as fatal for the run.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LaterError {
    #[error("no command given")]
    NoCommand,

    #[error("failed to start '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("reading command output failed: {0}")]
    StreamRead(#[source] std::io::Error),

    #[error("writing to console failed: {0}")]
    ConsoleWrite(#[source] std::io::Error),

    #[error("waiting for command failed: {0}")]
    Wait(String),

    #[error("background task failed: {0}")]
    TaskJoin(String),
}

pub type Result<T> = std::result::Result<T, LaterError>;
