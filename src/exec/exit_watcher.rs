// src/exec/exit_watcher.rs

//! Exit watcher: waits for the child to terminate and publishes the outcome.
//!
//! The outcome is published on a `watch` channel exactly once. Any number of
//! waiters, including ones that arrive after the child has exited, observe
//! the same value.

use std::io;
use std::process::ExitStatus;
use std::sync::Arc;

use tokio::process::Child;
use tokio::sync::watch;
use tracing::{error, info};

/// How the child's life ended, from the watcher's point of view.
#[derive(Debug, Clone)]
pub enum ExitOutcome {
    /// The child terminated and was reaped; the status may be non-zero.
    Exited(ExitStatus),
    /// Waiting on the child failed, so no status is available.
    WaitFailed(Arc<io::Error>),
}

impl ExitOutcome {
    /// Integer exit code for reporting.
    ///
    /// - normal exit: the process's own code;
    /// - killed by a signal: `-1`;
    /// - wait failure or any status that carries neither: `0`.
    pub fn exit_code(&self) -> i32 {
        match self {
            ExitOutcome::WaitFailed(_) => 0,
            ExitOutcome::Exited(status) => match status.code() {
                Some(code) => code,
                None if self.signal().is_some() => -1,
                None => 0,
            },
        }
    }

    /// Signal that terminated the child, if any.
    pub fn signal(&self) -> Option<i32> {
        match self {
            ExitOutcome::Exited(status) => signal_of(status),
            ExitOutcome::WaitFailed(_) => None,
        }
    }
}

#[cfg(unix)]
fn signal_of(status: &ExitStatus) -> Option<i32> {
    use std::os::unix::process::ExitStatusExt;
    status.signal()
}

#[cfg(not(unix))]
fn signal_of(_status: &ExitStatus) -> Option<i32> {
    None
}

/// Handle to the completion signal of one child process.
#[derive(Debug, Clone)]
pub struct ExitWatcher {
    rx: watch::Receiver<Option<ExitOutcome>>,
}

impl ExitWatcher {
    /// Take ownership of `child` and wait for it in a background task.
    pub fn spawn(mut child: Child) -> Self {
        let (tx, rx) = watch::channel(None);
        let pid = child.id();

        tokio::spawn(async move {
            let outcome = match child.wait().await {
                Ok(status) => {
                    info!(
                        ?pid,
                        exit_code = ?status.code(),
                        success = status.success(),
                        "command process exited"
                    );
                    ExitOutcome::Exited(status)
                }
                Err(e) => {
                    error!(?pid, error = %e, "waiting for command process failed");
                    ExitOutcome::WaitFailed(Arc::new(e))
                }
            };

            tx.send_replace(Some(outcome));
        });

        Self::watching(rx)
    }

    /// Wrap a completion channel. Whoever holds the sender publishes the
    /// outcome once; dropping it unpublished counts as a wait failure.
    pub fn watching(rx: watch::Receiver<Option<ExitOutcome>>) -> Self {
        Self { rx }
    }

    /// Non-blocking check whether the outcome has been published.
    pub fn has_exited(&self) -> bool {
        self.rx.borrow().is_some()
    }

    /// Block until the child has terminated and return the outcome.
    ///
    /// If the watcher task goes away without publishing (it panicked), this
    /// resolves to a wait failure rather than blocking forever.
    pub async fn wait(&self) -> ExitOutcome {
        let mut rx = self.rx.clone();
        let published = match rx.wait_for(Option::is_some).await {
            Ok(outcome) => (*outcome).clone(),
            Err(_) => None,
        };

        published.unwrap_or_else(|| {
            ExitOutcome::WaitFailed(Arc::new(io::Error::other(
                "exit watcher stopped before reporting a status",
            )))
        })
    }

    /// Block until the child has terminated and return its exit code, as
    /// described on [`ExitOutcome::exit_code`].
    pub async fn wait_for_exit_code(&self) -> i32 {
        self.wait().await.exit_code()
    }
}
