// src/exec/launcher.rs

//! Launcher: spawns the command and wires up relay, detach timer and exit
//! watcher around it.

use std::io;
use std::process::Stdio;
use std::time::{Duration, Instant};

use chrono::{DateTime, Local};
use tokio::process::Command;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::config::{CommandSpec, RunConfig};
use crate::errors::{LaterError, Result};
use crate::exec::console::Console;
use crate::exec::detach::{DetachFlag, spawn_detach_timer};
use crate::exec::exit_watcher::{ExitOutcome, ExitWatcher};
use crate::exec::relay::{RelayOutput, spawn_relay};

/// Starts runs of a command with a fixed configuration and console.
#[derive(Debug, Clone)]
pub struct Launcher {
    config: RunConfig,
    console: Console,
}

impl Launcher {
    pub fn with_console(config: RunConfig, console: Console) -> Self {
        Self { config, console }
    }

    /// Spawn `spec` and start the background tasks for it.
    ///
    /// stdout is piped through the relay; stderr is inherited so it always
    /// reaches the console directly; stdin is the null device. A spawn
    /// failure is returned immediately and nothing else is started.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn start(&self, spec: &CommandSpec) -> Result<RunRecord> {
        let mut cmd = Command::new(&spec.program);
        cmd.args(&spec.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit());

        let started_at = Instant::now();

        let mut child = cmd.spawn().map_err(|source| LaterError::Spawn {
            program: spec.program.clone(),
            source,
        })?;

        let pid = child.id();
        info!(program = %spec.program, args = ?spec.args, ?pid, "command started");

        let stdout = child.stdout.take().ok_or_else(|| {
            LaterError::StreamRead(io::Error::other("stdout pipe was not created"))
        })?;

        let flag = DetachFlag::new();
        let relay = spawn_relay(
            stdout,
            flag.clone(),
            self.config.report_all_output,
            self.console.clone(),
            self.config.chunk_size,
        );
        // Fire-and-forget; dropping the handle leaves the timer running.
        let _ = spawn_detach_timer(
            self.config.detach_delay,
            flag.clone(),
            self.console.clone(),
        );
        let watcher = ExitWatcher::spawn(child);

        Ok(RunRecord {
            spec: spec.clone(),
            started_at,
            pid,
            flag,
            relay,
            watcher,
        })
    }
}

/// One in-flight run of a command.
#[derive(Debug)]
pub struct RunRecord {
    spec: CommandSpec,
    started_at: Instant,
    pid: Option<u32>,
    flag: DetachFlag,
    relay: JoinHandle<Result<RelayOutput>>,
    watcher: ExitWatcher,
}

impl RunRecord {
    pub fn pid(&self) -> Option<u32> {
        self.pid
    }

    /// Completion handle; cloneable, so several callers can wait on it.
    pub fn exit_watcher(&self) -> &ExitWatcher {
        &self.watcher
    }

    /// Block until the command terminates and return its exit code.
    pub async fn wait_for_exit_code(&self) -> i32 {
        self.watcher.wait_for_exit_code().await
    }

    /// Wait for the output stream to end and the command to terminate, then
    /// collect the results.
    ///
    /// A relay failure is returned as soon as the relay stops, without waiting
    /// for the command. A wait failure is returned after the stream has ended.
    pub async fn finish(self) -> Result<RunReport> {
        let relayed = self
            .relay
            .await
            .map_err(|e| LaterError::TaskJoin(e.to_string()))??;

        let outcome = self.watcher.wait().await;
        if let ExitOutcome::WaitFailed(e) = &outcome {
            return Err(LaterError::Wait(e.to_string()));
        }

        let runtime = self.started_at.elapsed();
        let exit_code = outcome.exit_code();
        let detached = self.flag.is_detached();

        debug!(
            program = %self.spec.program,
            exit_code,
            detached,
            retained_bytes = relayed.retained.len(),
            runtime = ?runtime,
            "run finished"
        );

        Ok(RunReport {
            command: self.spec,
            outcome,
            exit_code,
            detached,
            retained: relayed.retained,
            echoed_bytes: relayed.echoed_bytes,
            total_bytes: relayed.total_bytes,
            finished_wall: Local::now(),
            runtime,
        })
    }
}

/// Final results of a run.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub command: CommandSpec,
    pub outcome: ExitOutcome,
    pub exit_code: i32,
    /// Whether the run had detached by the time it finished.
    pub detached: bool,
    pub retained: Vec<u8>,
    pub echoed_bytes: u64,
    pub total_bytes: u64,
    pub finished_wall: DateTime<Local>,
    pub runtime: Duration,
}
