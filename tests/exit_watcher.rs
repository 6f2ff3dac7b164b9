// tests/exit_watcher.rs

use std::io;
use std::sync::Arc;

use tokio::sync::watch;

use later::exec::{ExitOutcome, ExitWatcher};
use later_test_utils::{init_tracing, with_timeout};

fn wait_failure(msg: &str) -> ExitOutcome {
    ExitOutcome::WaitFailed(Arc::new(io::Error::other(msg.to_string())))
}

#[test]
fn wait_failure_reports_exit_code_zero() {
    let outcome = wait_failure("no child process");

    assert_eq!(outcome.exit_code(), 0);
    assert_eq!(outcome.signal(), None);
}

#[cfg(unix)]
#[test]
fn raw_statuses_map_to_exit_codes() {
    use std::os::unix::process::ExitStatusExt;
    use std::process::ExitStatus;

    // Exited normally with status 3.
    let exited = ExitOutcome::Exited(ExitStatus::from_raw(3 << 8));
    assert_eq!(exited.exit_code(), 3);
    assert_eq!(exited.signal(), None);

    // Killed by SIGKILL.
    let killed = ExitOutcome::Exited(ExitStatus::from_raw(9));
    assert_eq!(killed.exit_code(), -1);
    assert_eq!(killed.signal(), Some(9));

    let clean = ExitOutcome::Exited(ExitStatus::from_raw(0));
    assert_eq!(clean.exit_code(), 0);
}

#[tokio::test]
async fn dropped_publisher_resolves_to_wait_failure() {
    init_tracing();

    let (tx, rx) = watch::channel(None);
    let watcher = ExitWatcher::watching(rx);

    let waiter = {
        let watcher = watcher.clone();
        tokio::spawn(async move { watcher.wait().await })
    };
    drop(tx);

    let outcome = with_timeout(waiter).await.expect("waiter task");
    assert!(
        matches!(outcome, ExitOutcome::WaitFailed(_)),
        "expected WaitFailed, got: {outcome:?}"
    );
    assert!(!watcher.has_exited());

    // Late callers do not block either.
    assert_eq!(with_timeout(watcher.wait_for_exit_code()).await, 0);
}

#[tokio::test]
async fn published_wait_failure_reaches_every_waiter() {
    init_tracing();

    let (tx, rx) = watch::channel(None);
    let watcher = ExitWatcher::watching(rx);
    let other = watcher.clone();

    tx.send_replace(Some(wait_failure("ECHILD")));
    assert!(watcher.has_exited());

    assert_eq!(with_timeout(watcher.wait_for_exit_code()).await, 0);
    match with_timeout(other.wait()).await {
        ExitOutcome::WaitFailed(e) => assert!(e.to_string().contains("ECHILD")),
        outcome => panic!("expected WaitFailed, got: {outcome:?}"),
    }
    drop(tx);
}
