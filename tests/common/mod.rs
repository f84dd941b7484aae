// tests/common/mod.rs
// Shared test utilities for integration tests
#![allow(dead_code)]

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};
use tempfile::NamedTempFile;

const BINARY_PATH: &str = env!("CARGO_BIN_EXE_logstat");

/// Run logstat with the given arguments (file paths included)
pub fn run_logstat(args: &[&str]) -> (String, String, i32) {
    let output = Command::new(BINARY_PATH)
        .args(args)
        .stdin(Stdio::null())
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to execute logstat");

    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
        output.status.code().unwrap_or(-1),
    )
}

/// Run logstat against a temporary file holding `file_content`
pub fn run_logstat_with_file(args: &[&str], file_content: &str) -> (String, String, i32) {
    let temp_file = write_temp_file(file_content.as_bytes());
    run_logstat_with_path(args, temp_file.path())
}

/// Run logstat against an existing path, appended after the other arguments
pub fn run_logstat_with_path(args: &[&str], path: &Path) -> (String, String, i32) {
    let mut full_args = args.to_vec();
    let path_str = path.to_str().expect("temp path should be valid UTF-8");
    full_args.push(path_str);
    run_logstat(&full_args)
}

pub fn write_temp_file(content: &[u8]) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
    temp_file
        .write_all(content)
        .expect("Failed to write to temp file");
    temp_file.flush().expect("Failed to flush temp file");
    temp_file
}

/// Pull the integer value of a `Label: N` report line
pub fn extract_metric(stdout: &str, label: &str) -> Option<u64> {
    let prefix = format!("{}: ", label);
    stdout
        .lines()
        .find_map(|line| line.strip_prefix(prefix.as_str()))
        .and_then(|value| value.trim().parse().ok())
}

/// Pull the rendered status code map from the text report
pub fn extract_status_codes(stdout: &str) -> Option<String> {
    stdout
        .lines()
        .find_map(|line| line.strip_prefix("Status Codes: "))
        .map(|value| value.to_string())
}

/// Sample access log used across tests
pub const SCENARIO_LOG: &str = "10.0.0.1 GET /x [ERROR] 500
10.0.0.2 GET /y 200
10.0.0.1 GET /z [WARNING] 200
";
