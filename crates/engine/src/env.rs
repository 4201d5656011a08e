// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the engine crate.

use std::time::Duration;

/// Delay between status checks when `ROSTER_POLL_MS` is unset.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(2);

fn parse_duration_ms(var: &str) -> Option<Duration> {
    std::env::var(var)
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .filter(|ms| *ms > 0)
        .map(Duration::from_millis)
}

/// Polling cadence (default: 2000ms). Zero is ignored.
pub fn poll_interval() -> Duration {
    parse_duration_ms("ROSTER_POLL_MS").unwrap_or(DEFAULT_POLL_INTERVAL)
}
