// src/cli.rs

//! CLI argument parsing using `clap`.

use std::time::Duration;

use clap::{CommandFactory, Parser, ValueEnum};

use crate::config::{RunConfig, parse_duration};

/// Command-line arguments for `later`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "later",
    version,
    about = "Run a command, watch its first output, then detach and report the rest when it exits.",
    override_usage = "later [options] [--] cmd [arg]...",
    long_about = None
)]
pub struct CliArgs {
    /// Report all output after exit, not only what was produced after detaching.
    #[arg(short = 'a', long = "all")]
    pub report_all_output: bool,

    /// Show output live for this long before detaching (e.g. 10s, 1m30s, 250ms).
    ///
    /// Negative values detach immediately.
    #[arg(
        short = 'w',
        long = "wait-before-detach",
        value_name = "DURATION",
        default_value = "10s",
        allow_hyphen_values = true,
        value_parser = parse_duration
    )]
    pub wait_before_detach: Duration,

    /// Exit with the command's exit code instead of 0.
    #[arg(long)]
    pub propagate_exit_code: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `LATER_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Command to run, followed by its arguments.
    #[arg(value_name = "CMD", trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}

impl CliArgs {
    pub fn run_config(&self) -> RunConfig {
        RunConfig::default()
            .with_report_all_output(self.report_all_output)
            .with_detach_delay(self.wait_before_detach)
    }
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}

/// Full usage text, printed when no command is given.
pub fn usage() -> String {
    CliArgs::command().render_help().to_string()
}
