// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Timestamp parsing and clock labels.

use chrono::{DateTime, NaiveDateTime, Utc};

/// Parse a timestamp as sent by the solver or history store.
///
/// Accepts RFC 3339 (`2025-01-01T09:00:00Z`, with offset or fractional
/// seconds) and naive ISO forms without an offset, which are read as UTC.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// `HH:MM` wall-clock time.
pub fn format_clock(dt: &DateTime<Utc>) -> String {
    dt.format("%H:%M").to_string()
}

/// Time-slot label such as `"09:00 - 09:25"`.
///
/// Unparseable bounds are shown verbatim.
pub fn format_slot(start: &str, end: &str) -> String {
    let show = |s: &str| parse_timestamp(s).map_or_else(|| s.to_string(), |dt| format_clock(&dt));
    format!("{} - {}", show(start), show(end))
}

#[cfg(test)]
#[path = "time_fmt_tests.rs"]
mod tests;
