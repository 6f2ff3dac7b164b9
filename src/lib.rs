// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod report;

use anyhow::Result;
use tracing::info;

use crate::cli::CliArgs;
use crate::config::{CommandSpec, RunConfig};
use crate::errors::LaterError;
use crate::exec::{Console, Launcher, RunReport};

/// High-level entry point used by `main.rs`.
///
/// Returns the exit status the host process should terminate with: `0` after
/// any completed run, unless `--propagate-exit-code` asks for the command's.
pub async fn run(args: CliArgs) -> Result<i32> {
    let spec = CommandSpec::from_argv(args.command.clone())?;
    let config = args.run_config();

    let report = execute(&spec, config, Console::stdout()).await?;

    Ok(if args.propagate_exit_code {
        host_exit_code(report.exit_code)
    } else {
        0
    })
}

/// Run `spec` to completion, printing the start line, relayed output, the
/// retained output and the summary line to `console`.
///
/// stderr of the command is inherited and never passes through `console`.
pub async fn execute(
    spec: &CommandSpec,
    config: RunConfig,
    console: Console,
) -> errors::Result<RunReport> {
    console
        .line(&report::start_line(spec))
        .await
        .map_err(LaterError::ConsoleWrite)?;

    let launcher = Launcher::with_console(config, console.clone());
    let record = launcher.start(spec)?;
    info!(
        program = %spec.program,
        pid = ?record.pid(),
        detach_delay = ?config.detach_delay,
        report_all_output = config.report_all_output,
        "run started"
    );

    let report = record.finish().await?;

    console
        .write_all(&report.retained)
        .await
        .map_err(LaterError::ConsoleWrite)?;
    console
        .line(&report::summary_line(&report))
        .await
        .map_err(LaterError::ConsoleWrite)?;

    Ok(report)
}

/// Map a command's exit code onto a valid host exit status.
///
/// Signal deaths (`-1`) and anything else outside `0..=255` become `1`.
pub fn host_exit_code(code: i32) -> i32 {
    if (0..=255).contains(&code) { code } else { 1 }
}
