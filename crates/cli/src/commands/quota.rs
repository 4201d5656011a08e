// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `roster quota` - Remaining submissions

use std::io::Write;

use anyhow::Result;
use roster_adapters::SolverApi;
use roster_core::Quota;
use roster_engine::JobClient;
use serde::Serialize;

use crate::output::{print_json, OutputFormat};

#[derive(Serialize)]
struct QuotaView {
    quota_remaining: Option<u32>,
    last_reset_date: Option<String>,
    next_reset: Option<String>,
}

impl QuotaView {
    fn new(quota: Option<&Quota>) -> Self {
        Self {
            quota_remaining: quota.map(|q| q.quota_remaining),
            last_reset_date: quota.and_then(|q| q.last_reset_date.clone()),
            next_reset: quota.and_then(Quota::next_reset).map(|t| t.to_rfc3339()),
        }
    }
}

pub async fn handle<A: SolverApi>(api: A, format: OutputFormat) -> Result<()> {
    let quota = JobClient::new(api).fetch_quota().await;
    match format {
        OutputFormat::Text => format_quota(&mut std::io::stdout(), quota.as_ref()),
        OutputFormat::Json => print_json(&QuotaView::new(quota.as_ref()))?,
    }
    Ok(())
}

/// A failed lookup shows as "unknown" rather than an error.
pub(crate) fn format_quota(out: &mut impl Write, quota: Option<&Quota>) {
    let Some(quota) = quota else {
        let _ = writeln!(out, "Remaining submissions: unknown");
        return;
    };
    let _ = writeln!(out, "Remaining submissions: {}", quota.quota_remaining);
    if let Some(next) = quota.next_reset() {
        let _ = writeln!(out, "Next reset: {}", next.format("%Y-%m-%d %H:%M UTC"));
    }
}

#[cfg(test)]
#[path = "quota_tests.rs"]
mod tests;
