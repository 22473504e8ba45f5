use super::executor::{normalize, prepare};
use super::{Executor, ProcessExecutor};
use crate::core::types::{ExecResult, RedirectResult, Timeout};
use crate::error::AdbxError;
use std::io::{Read, Seek, SeekFrom, Write};
use std::time::{Duration, Instant};
use tempfile::TempDir;

fn sh(script: &str) -> Vec<String> {
    vec!["sh".to_string(), "-c".to_string(), script.to_string()]
}

#[tokio::test]
async fn test_success_uses_stdout() {
    let executor = ProcessExecutor::new();
    let result = executor.run(&sh("printf out; printf err >&2")).await.unwrap();
    assert_eq!(result, ExecResult::new(0, "out"));
}

#[tokio::test]
async fn test_success_with_empty_stdout_returns_stderr() {
    let executor = ProcessExecutor::new();
    let result = executor
        .run(&sh("printf '/tmp/x: 1 file pushed' >&2"))
        .await
        .unwrap();
    assert_eq!(result, ExecResult::new(0, "/tmp/x: 1 file pushed"));
}

#[tokio::test]
async fn test_failure_returns_status_and_stderr() {
    let executor = ProcessExecutor::new();
    let result = executor
        .run(&sh("printf 'some stdout'; printf 'error X' >&2; exit 1"))
        .await
        .unwrap();
    assert_eq!(result, ExecResult::new(1, "error X"));
}

#[tokio::test]
async fn test_empty_tokens_are_dropped() {
    let executor = ProcessExecutor::new();
    let argv = vec![
        "sh".to_string(),
        String::new(),
        "-c".to_string(),
        "printf ok".to_string(),
        String::new(),
    ];
    let result = executor.run(&argv).await.unwrap();
    assert_eq!(result, ExecResult::new(0, "ok"));
}

#[tokio::test]
async fn test_undecodable_bytes_are_escaped() {
    let executor = ProcessExecutor::new();
    let result = executor.run(&sh("printf '\\377ok'")).await.unwrap();
    assert_eq!(result, ExecResult::new(0, "\\xffok"));
}

#[tokio::test]
async fn test_missing_program_is_launch_error() {
    let executor = ProcessExecutor::new();
    let argv = vec!["/nonexistent/bridge-tool".to_string(), "devices".to_string()];
    let result = executor.run(&argv).await;
    assert!(matches!(result, Err(AdbxError::Launch { program, .. }) if program == "/nonexistent/bridge-tool"));
}

#[test]
fn test_prepare_rejects_blank_command() {
    assert!(prepare(&[String::new(), String::new()]).is_err());
    assert_eq!(
        prepare(&["adb".to_string(), String::new(), "devices".to_string()]).unwrap(),
        vec!["adb", "devices"]
    );
}

#[test]
fn test_normalize() {
    assert_eq!(normalize(0, b"", b"Success"), ExecResult::new(0, "Success"));
    assert_eq!(normalize(0, b"", b""), ExecResult::new(0, ""));
    assert_eq!(normalize(0, b"out", b"err"), ExecResult::new(0, "out"));
    assert_eq!(normalize(1, b"out", b"error X"), ExecResult::new(1, "error X"));
}

#[tokio::test]
async fn test_timed_run_finishes_before_limit() {
    let executor = ProcessExecutor::new();
    let result = executor
        .run_with_timeout(&sh("printf hi; printf warn >&2"), Timeout::from_secs(5).unwrap())
        .await
        .unwrap();

    assert_eq!(result.status, 0);
    assert_eq!(result.stdout, "hi");
    assert_eq!(result.stderr, "warn");
    assert!(!result.timed_out);
    assert!(result.success());
}

#[tokio::test]
async fn test_timed_run_keeps_exit_code() {
    let executor = ProcessExecutor::new();
    let result = executor
        .run_with_timeout(&sh("printf x >&2; exit 3"), Timeout::from_secs(5).unwrap())
        .await
        .unwrap();

    assert_eq!(result.status, 3);
    assert_eq!(result.stderr, "x");
    assert!(!result.timed_out);
}

#[tokio::test]
async fn test_timeout_kills_process() {
    let executor = ProcessExecutor::new();
    let start = Instant::now();
    let result = executor
        .run_with_timeout(&sh("sleep 10"), Timeout::After(Duration::from_secs(1)))
        .await
        .unwrap();

    assert!(start.elapsed() < Duration::from_secs(4));
    assert!(result.timed_out);
    assert_ne!(result.status, 0);
    #[cfg(unix)]
    assert_eq!(result.status, -libc::SIGKILL);
}

#[tokio::test]
async fn test_timeout_kills_descendants() {
    let executor = ProcessExecutor::new().with_kill_tree(true);
    let start = Instant::now();
    let result = executor
        .run_with_timeout(
            &sh("printf started; sleep 10; printf finished"),
            Timeout::After(Duration::from_secs(1)),
        )
        .await
        .unwrap();

    assert!(start.elapsed() < Duration::from_secs(4));
    assert!(result.timed_out);
    assert_eq!(result.stdout, "started");
}

#[tokio::test]
async fn test_timeout_without_tree_kill_still_returns() {
    let executor = ProcessExecutor::new().with_kill_tree(false);
    let start = Instant::now();
    let result = executor
        .run_with_timeout(&sh("sleep 5; printf finished"), Timeout::After(Duration::from_secs(1)))
        .await
        .unwrap();

    assert!(start.elapsed() < Duration::from_secs(4));
    assert!(result.timed_out);
    assert!(!result.stdout.contains("finished"));
}

#[tokio::test]
async fn test_background_descendant_cannot_outlast_timeout() {
    // sh exits at once, the backgrounded sleep keeps both pipes open
    let executor = ProcessExecutor::new();
    let start = Instant::now();
    let result = executor
        .run_with_timeout(&sh("sleep 8 & printf hi"), Timeout::After(Duration::from_secs(1)))
        .await
        .unwrap();

    assert!(start.elapsed() < Duration::from_secs(3));
    assert!(result.timed_out);
    assert_eq!(result.status, -9);
    assert_eq!(result.stdout, "hi");
}

#[tokio::test]
async fn test_background_descendant_without_tree_kill_is_bounded() {
    let executor = ProcessExecutor::new().with_kill_tree(false);
    let start = Instant::now();
    let result = executor
        .run_with_timeout(&sh("sleep 8 & printf hi"), Timeout::After(Duration::from_secs(1)))
        .await
        .unwrap();

    assert!(start.elapsed() < Duration::from_secs(3));
    assert!(result.timed_out);
    assert!(!result.success());
}

#[test]
fn test_own_process_group_only_with_armed_timeout() {
    let executor = ProcessExecutor::new();
    assert!(!executor.isolates_group(Timeout::Disabled));
    assert_eq!(
        executor.isolates_group(Timeout::After(Duration::from_secs(1))),
        cfg!(unix)
    );
    assert!(!ProcessExecutor::new()
        .with_kill_tree(false)
        .isolates_group(Timeout::After(Duration::from_secs(1))));
}

#[tokio::test]
async fn test_disabled_timeout_runs_to_completion() {
    let executor = ProcessExecutor::new();
    let result = executor
        .run_with_timeout(&sh("sleep 1; printf done"), Timeout::Disabled)
        .await
        .unwrap();

    assert_eq!(result.status, 0);
    assert_eq!(result.stdout, "done");
    assert!(!result.timed_out);
}

#[tokio::test]
async fn test_run_to_file_success_writes_stdout() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("report.txt");
    let file = std::fs::File::create(&path).unwrap();

    let executor = ProcessExecutor::new();
    let result = executor
        .run_to_file(&sh("printf 'dumpsys output'"), file)
        .await
        .unwrap();

    assert!(matches!(result, RedirectResult::Written { status: 0 }));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "dumpsys output");
}

#[tokio::test]
async fn test_run_to_file_failure_hands_back_open_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("report.txt");
    let file = std::fs::OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(true)
        .open(&path)
        .unwrap();

    let executor = ProcessExecutor::new();
    let result = executor
        .run_to_file(&sh("printf partial; printf boom >&2; exit 2"), file)
        .await
        .unwrap();

    assert_eq!(result.status(), 2);
    match result {
        RedirectResult::Failed {
            status,
            stderr,
            mut file,
        } => {
            assert_eq!(status, 2);
            assert_eq!(stderr, "boom");

            // caller still owns a usable handle
            file.write_all(b"-tail").unwrap();
            file.seek(SeekFrom::Start(0)).unwrap();
            let mut contents = String::new();
            file.read_to_string(&mut contents).unwrap();
            assert_eq!(contents, "partial-tail");
        }
        other => panic!("unexpected: {:?}", other),
    }
}
