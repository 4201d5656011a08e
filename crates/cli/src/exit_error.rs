// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::fmt;

/// Job failed on the solver side.
pub const JOB_FAILED: i32 = 2;
/// The solver no longer knows the task.
pub const JOB_LOST: i32 = 3;
/// Interrupted while waiting.
pub const INTERRUPTED: i32 = 130;

/// An error that carries the process exit code.
///
/// An empty message exits silently.
#[derive(Debug)]
pub struct ExitError {
    pub code: i32,
    pub message: String,
}

impl ExitError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for ExitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ExitError {}
