// tests/report_lines.rs

use std::time::Duration;

use later::config::CommandSpec;
use later::host_exit_code;
use later::report::{detach_notice, format_runtime, start_line};

#[test]
fn start_line_lists_program_and_args() {
    let spec = CommandSpec::new("rsync", ["-a", "src/", "dst/"]);
    assert_eq!(start_line(&spec), "running: rsync -a src/ dst/");
    assert_eq!(spec.to_string(), "rsync -a src/ dst/");

    let bare = CommandSpec::new("true", Vec::<String>::new());
    assert_eq!(start_line(&bare), "running: true");
}

#[test]
fn runtime_has_millisecond_precision() {
    assert_eq!(format_runtime(Duration::from_millis(1503)), "1.503s");
    assert_eq!(format_runtime(Duration::from_millis(12)), "12.000ms");
}

#[test]
fn detach_notice_is_timestamped() {
    let notice = detach_notice();
    assert!(notice.ends_with(" detaching"));
    // `YYYY-MM-DD HH:MM:SS.mmm +ZZZZ detaching`
    assert!(notice.chars().next().is_some_and(|c| c.is_ascii_digit()), "got: {notice}");
}

#[test]
fn host_exit_code_is_clamped() {
    assert_eq!(host_exit_code(0), 0);
    assert_eq!(host_exit_code(3), 3);
    assert_eq!(host_exit_code(255), 255);
    assert_eq!(host_exit_code(-1), 1);
    assert_eq!(host_exit_code(300), 1);
}
