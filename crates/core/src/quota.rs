// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Daily submission quota.

use crate::time_fmt::parse_timestamp;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Quota window length.
pub const RESET_PERIOD_HOURS: i64 = 24;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quota {
    pub quota_remaining: u32,
    #[serde(default)]
    pub last_reset_date: Option<String>,
}

impl Quota {
    pub fn is_exhausted(&self) -> bool {
        self.quota_remaining == 0
    }

    /// When submissions become available again.
    ///
    /// Only known while the quota is exhausted and the last reset parses.
    pub fn next_reset(&self) -> Option<DateTime<Utc>> {
        if !self.is_exhausted() {
            return None;
        }
        let last = parse_timestamp(self.last_reset_date.as_deref()?)?;
        Some(last + Duration::hours(RESET_PERIOD_HOURS))
    }
}

#[cfg(test)]
#[path = "quota_tests.rs"]
mod tests;
