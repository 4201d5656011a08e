// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the adapters crate.

use std::time::Duration;

/// Boundary base URL used when `ROSTER_API_URL` is unset.
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";

fn parse_duration_ms(var: &str) -> Option<Duration> {
    std::env::var(var)
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .map(Duration::from_millis)
}

fn non_empty(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|s| !s.trim().is_empty())
}

/// Solver/history base URL (default: `http://localhost:8000/api`).
pub fn api_url() -> String {
    non_empty("ROSTER_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string())
}

/// Bearer token issued by the external auth provider, if any.
pub fn api_token() -> Option<String> {
    non_empty("ROSTER_API_TOKEN")
}

/// Per-request HTTP timeout (default: 10000ms).
pub fn http_timeout() -> Duration {
    parse_duration_ms("ROSTER_TIMEOUT_HTTP_MS").unwrap_or(Duration::from_secs(10))
}
