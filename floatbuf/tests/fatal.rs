//! Fail-fast wrappers
//!
//! The failure path exits the process, so it runs in a child copy of this
//! test binary selected through an environment variable.

use floatbuf::fatal::{load_or_exit, store_or_exit};
use floatbuf::OrExit;
use std::process::Command;
use tempfile::TempDir;

const EXIT_CHILD_PATH: &str = "FLOATBUF_EXIT_CHILD_PATH";

#[test]
fn test_or_exit_passes_values_through() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ok.bin");

    store_or_exit(&path, &[0.25f32, 0.5]);

    let mut buffer = [0.0f32; 2];
    load_or_exit(&path, &mut buffer);
    assert_eq!(buffer, [0.25, 0.5]);

    assert_eq!(floatbuf::element_count(&path).or_exit(), 2);
}

#[test]
fn test_load_or_exit_reports_and_exits() {
    if let Some(path) = std::env::var_os(EXIT_CHILD_PATH) {
        let mut buffer = [0.0f32; 2];
        load_or_exit(&path, &mut buffer);
        unreachable!("load_or_exit returned for a missing file");
    }

    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.bin");

    let output = Command::new(std::env::current_exe().unwrap())
        .args(["test_load_or_exit_reports_and_exits", "--exact", "--nocapture"])
        .env(EXIT_CHILD_PATH, &missing)
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(
        stderr.trim_end(),
        format!("Failed to open file for reading: {}", missing.display())
    );
}
