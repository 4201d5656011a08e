//! Test helpers for behavioral specifications.
//!
//! Provides high-level DSL for testing roster CLI behavior.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

use std::path::{Path, PathBuf};
use std::process::Output;

// Aggressive timeouts for fast tests.
const ROSTER_POLL_MS: &str = "10";
const ROSTER_TIMEOUT_HTTP_MS: &str = "2000";

/// Nothing listens here; boundary calls fail fast.
pub const UNREACHABLE_API_URL: &str = "http://127.0.0.1:9/api";

/// Returns the path to a binary, checking llvm-cov target directory first.
/// Falls back to resolving relative to the test binary itself when
/// CARGO_MANIFEST_DIR is stale.
fn binary_path(name: &str) -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));

    let llvm_cov_path = manifest_dir.join("target/llvm-cov-target/debug").join(name);
    if llvm_cov_path.exists() {
        return llvm_cov_path;
    }

    let standard = manifest_dir.join("target/debug").join(name);
    if standard.exists() {
        return standard;
    }

    // The test binary lives at target/debug/deps/specs-<hash>, so its
    // grandparent is target/debug/ where roster is built.
    if let Ok(exe) = std::env::current_exe() {
        if let Some(debug_dir) = exe.parent().and_then(|d| d.parent()) {
            let fallback = debug_dir.join(name);
            if fallback.exists() {
                return fallback;
            }
        }
    }

    standard
}

/// Returns the path to the roster binary.
fn roster_binary() -> PathBuf {
    binary_path("roster")
}

/// Create a CLI builder for roster commands
pub fn cli() -> CliBuilder {
    CliBuilder::new()
}

/// High-level CLI builder for fluent test assertions
pub struct CliBuilder {
    args: Vec<String>,
    dir: Option<PathBuf>,
    envs: Vec<(String, String)>,
    stdin: Option<String>,
}

impl CliBuilder {
    fn new() -> Self {
        Self {
            args: Vec::new(),
            dir: None,
            envs: vec![
                ("ROSTER_API_URL".into(), UNREACHABLE_API_URL.into()),
                ("ROSTER_POLL_MS".into(), ROSTER_POLL_MS.into()),
                ("ROSTER_TIMEOUT_HTTP_MS".into(), ROSTER_TIMEOUT_HTTP_MS.into()),
                ("NO_COLOR".into(), "1".into()),
            ],
            stdin: None,
        }
    }

    /// Add CLI arguments
    pub fn args(mut self, args: &[&str]) -> Self {
        self.args.extend(args.iter().map(|s| s.to_string()));
        self
    }

    /// Set working directory
    pub fn pwd(mut self, path: impl Into<PathBuf>) -> Self {
        self.dir = Some(path.into());
        self
    }

    /// Set environment variable (later values win)
    pub fn env(mut self, key: &str, value: impl Into<String>) -> Self {
        self.envs.push((key.to_string(), value.into()));
        self
    }

    /// Point the CLI at a mock boundary
    pub fn api(self, url: impl Into<String>) -> Self {
        self.env("ROSTER_API_URL", url)
    }

    /// Feed text on stdin
    pub fn stdin(mut self, input: &str) -> Self {
        self.stdin = Some(input.to_string());
        self
    }

    /// Build the command without running it
    pub fn command(self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::Command::new(roster_binary());
        cmd.args(&self.args);

        if let Some(dir) = self.dir {
            cmd.current_dir(dir);
        }

        // Keep the developer's settings out of the run
        for var in ["ROSTER_LOG", "ROSTER_API_TOKEN", "COLOR"] {
            cmd.env_remove(var);
        }

        for (key, value) in self.envs {
            cmd.env(key, value);
        }

        cmd.write_stdin(self.stdin.unwrap_or_default());
        cmd
    }

    fn output(self) -> Output {
        self.command().output().expect("command should run")
    }

    /// Run and expect success (exit code 0)
    pub fn passes(self) -> RunAssert {
        let output = self.output();
        assert!(
            output.status.success(),
            "expected command to pass, got exit code {:?}\nstdout: {}\nstderr: {}",
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        RunAssert { output }
    }

    /// Run and expect failure (non-zero exit code)
    pub fn fails(self) -> RunAssert {
        let output = self.output();
        assert!(
            !output.status.success(),
            "expected command to fail, but it passed\nstdout: {}\nstderr: {}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        RunAssert { output }
    }

    /// Run and expect a specific exit code
    pub fn exits_with(self, code: i32) -> RunAssert {
        let output = self.output();
        assert_eq!(
            output.status.code(),
            Some(code),
            "unexpected exit code\nstdout: {}\nstderr: {}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        RunAssert { output }
    }
}

/// Result of a CLI run for chaining assertions
pub struct RunAssert {
    output: Output,
}

impl RunAssert {
    /// Get stdout as string
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    /// Get stderr as string
    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    /// Parse stdout as JSON
    pub fn stdout_json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout()).expect("stdout should be JSON")
    }

    /// Assert stdout equals expected exactly (with diff on failure).
    /// **Prefer this for format specs** - catches format regressions.
    pub fn stdout_eq(self, expected: &str) -> Self {
        let stdout = self.stdout();
        similar_asserts::assert_eq!(stdout, expected);
        self
    }

    /// Assert stderr equals expected exactly (with diff on failure).
    pub fn stderr_eq(self, expected: &str) -> Self {
        let stderr = self.stderr();
        similar_asserts::assert_eq!(stderr, expected);
        self
    }

    /// Assert stdout contains substring.
    pub fn stdout_has(self, expected: &str) -> Self {
        let stdout = self.stdout();
        assert!(
            stdout.contains(expected),
            "stdout does not contain '{}'\nstdout: {}",
            expected,
            stdout
        );
        self
    }

    /// Assert stdout does not contain substring.
    pub fn stdout_lacks(self, unexpected: &str) -> Self {
        let stdout = self.stdout();
        assert!(
            !stdout.contains(unexpected),
            "stdout should not contain '{}'\nstdout: {}",
            unexpected,
            stdout
        );
        self
    }

    /// Assert stderr contains substring.
    pub fn stderr_has(self, expected: &str) -> Self {
        let stderr = self.stderr();
        assert!(
            stderr.contains(expected),
            "stderr does not contain '{}'\nstderr: {}",
            expected,
            stderr
        );
        self
    }

    /// Assert stderr does not contain substring.
    pub fn stderr_lacks(self, unexpected: &str) -> Self {
        let stderr = self.stderr();
        assert!(
            !stderr.contains(unexpected),
            "stderr should not contain '{}'\nstderr: {}",
            unexpected,
            stderr
        );
        self
    }
}

// =============================================================================
// Project
// =============================================================================

/// Temporary directory holding matrix files for a test.
pub struct Project {
    dir: tempfile::TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file at the given path (parent directories created automatically)
    pub fn file(&self, path: impl AsRef<Path>, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path.as_ref());
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&full_path, content).unwrap();
        full_path
    }

    /// CLI builder running inside the project directory
    pub fn roster(&self) -> CliBuilder {
        cli().pwd(self.path())
    }
}

// =============================================================================
// Fixtures
// =============================================================================

/// One room, two workers; only Ana may use the room.
pub const STANDUP_MATRIX: &str = r#"
title = "Standup"

[settings]
start_time = "2025-01-01T09:00:00Z"
end_time = "2025-01-01T10:00:00Z"
meeting_duration = 25

[[rooms]]
name = "Room 1"

[[workers]]
name = "Ana"
eligible = ["Room 1"]

[[workers]]
name = "Ben"
unavailable_hours = [9]
"#;

/// Stored request: one room with two consecutive shifts.
pub const STORED_REQUEST_JSON: &str = r#"{"worker_rostering_instance":{"shifts":[{"uid":"s1","room":"Room 1","start_time":"2025-01-01T09:00:00","end_time":"2025-01-01T09:25:00"},{"uid":"s2","room":"Room 1","start_time":"2025-01-01T09:25:00","end_time":"2025-01-01T09:50:00"}],"workers":[{"uid":"w1","name":"Ana"},{"uid":"w2","name":"Ben"}],"rooms":[{"name":"Room 1"}]}}"#;

/// Ana in the first shift, the second left empty.
pub const STORED_SOLUTION_JSON: &str = r#"{"workers_at_shifts":{"s1":["w1"],"s2":[]}}"#;

/// History entry as the store returns it.
pub fn history_entry(id: u64, task_id: &str, title: &str, status: &str) -> serde_json::Value {
    let solution = if status == "Completed" {
        serde_json::Value::from(STORED_SOLUTION_JSON)
    } else {
        serde_json::Value::Null
    };
    serde_json::json!({
        "id": id,
        "task_id": task_id,
        "title": title,
        "status": status,
        "date_created": "2025-01-01T08:00:00",
        "request_json": STORED_REQUEST_JSON,
        "solution": solution,
    })
}
