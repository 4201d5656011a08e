// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod history;
pub mod matrix;
pub mod quota;
pub mod status;
pub mod submit;
