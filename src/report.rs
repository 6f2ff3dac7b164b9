// src/report.rs

//! Human-readable console lines. Not meant to be machine-parsed.

use std::time::Duration;

use chrono::{DateTime, Local};

use crate::config::CommandSpec;
use crate::exec::RunReport;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f %z";

pub fn timestamp(at: DateTime<Local>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// `running: <program> <args...>`
pub fn start_line(spec: &CommandSpec) -> String {
    format!("running: {spec}")
}

/// `<timestamp> detaching`, stamped with the current time.
pub fn detach_notice() -> String {
    format!("{} detaching", timestamp(Local::now()))
}

/// Runtime with millisecond precision, e.g. `1.503s` or `12.000ms`.
pub fn format_runtime(runtime: Duration) -> String {
    format!("{runtime:.3?}")
}

/// `program terminated (exit code N) at <timestamp> (runtime <dur>)`
pub fn summary_line(report: &RunReport) -> String {
    let signal = match report.outcome.signal() {
        Some(sig) => format!(", signal {sig}"),
        None => String::new(),
    };

    format!(
        "program terminated (exit code {}{}) at {} (runtime {})",
        report.exit_code,
        signal,
        timestamp(report.finished_wall),
        format_runtime(report.runtime)
    )
}
