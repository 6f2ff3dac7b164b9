// src/exec/detach.rs

//! Attached/detached state and the one-shot timer that flips it.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::exec::console::Console;
use crate::report;

/// Shared attach/detach flag.
///
/// Starts attached and can only ever move to detached, exactly once.
#[derive(Debug, Clone, Default)]
pub struct DetachFlag {
    detached: Arc<AtomicBool>,
}

impl DetachFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_detached(&self) -> bool {
        self.detached.load(Ordering::Acquire)
    }

    /// Move to detached. Returns `true` only for the call that performed the
    /// transition.
    pub fn detach(&self) -> bool {
        !self.detached.swap(true, Ordering::AcqRel)
    }
}

/// Spawn the detach timer.
///
/// After `delay` the flag is flipped and a timestamped notice is written to
/// the console. The timer is fire-and-forget: it is never cancelled, and if
/// the command has already finished by the time it fires the flip simply has
/// no effect on output.
pub fn spawn_detach_timer(delay: Duration, flag: DetachFlag, console: Console) -> JoinHandle<()> {
    tokio::spawn(async move {
        sleep(delay).await;

        if flag.detach() {
            info!(delay = ?delay, "detach delay elapsed; output is now retained only");
        } else {
            debug!("detach timer fired but run was already detached");
        }

        if let Err(e) = console.line(&report::detach_notice()).await {
            warn!(error = %e, "failed to write detach notice");
        }
    })
}
