// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Roster job-lifecycle engine

mod client;
pub mod env;
mod error;
mod history;
mod orchestrator;
mod workbench;

pub use client::JobClient;
pub use error::{HistoryError, PollError, SubmitError};
pub use history::HistoryStore;
pub use orchestrator::PollingOrchestrator;
pub use workbench::Workbench;
