// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! ANSI styling for terminal output. Status labels are colored by tone.

use roster_core::{StatusLabel, Tone};
use std::io::IsTerminal;

pub mod codes {
    /// 256-color index for headers (steel blue)
    pub const HEADER: u8 = 74;
    /// 256-color index for secondary text (dark grey)
    pub const MUTED: u8 = 240;

    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const GREEN: &str = "\x1b[32m";
    pub const RED: &str = "\x1b[31m";

    #[cfg(test)]
    pub const HEADER_START: &str = "\x1b[38;5;74m";
    #[cfg(test)]
    pub const MUTED_START: &str = "\x1b[38;5;240m";
    #[cfg(test)]
    pub const RESET: &str = "\x1b[0m";
}

const RESET: &str = "\x1b[0m";

const LABELS: [StatusLabel; 5] = [
    StatusLabel::Submitted,
    StatusLabel::Running,
    StatusLabel::Completed,
    StatusLabel::Failed,
    StatusLabel::Unknown,
];

/// `NO_COLOR=1` wins over `COLOR=1`; otherwise color only on a terminal.
pub fn should_colorize() -> bool {
    if crate::env::no_color() {
        return false;
    }
    crate::env::force_color() || std::io::stdout().is_terminal()
}

fn when_enabled(text: &str, apply: fn(&str) -> String) -> String {
    if should_colorize() {
        apply(text)
    } else {
        text.to_string()
    }
}

fn paint(text: &str, start: &str) -> String {
    format!("{start}{text}{RESET}")
}

pub fn header(text: &str) -> String {
    when_enabled(text, apply_header)
}

pub fn muted(text: &str) -> String {
    when_enabled(text, apply_muted)
}

pub fn status(text: &str) -> String {
    when_enabled(text, apply_status)
}

pub(crate) fn apply_header(text: &str) -> String {
    paint(text, &format!("\x1b[38;5;{}m", codes::HEADER))
}

pub(crate) fn apply_muted(text: &str) -> String {
    paint(text, &format!("\x1b[38;5;{}m", codes::MUTED))
}

/// Color text that starts with a status label, ignoring case and padding.
/// Anything else comes back unchanged.
pub(crate) fn apply_status(text: &str) -> String {
    match leading_label(text) {
        Some(label) => apply_tone(text, label.tone()),
        None => text.to_string(),
    }
}

fn leading_label(text: &str) -> Option<StatusLabel> {
    let word = text.split_whitespace().next()?;
    LABELS
        .into_iter()
        .find(|label| label.text().eq_ignore_ascii_case(word))
}

pub(crate) fn apply_tone(text: &str, tone: Tone) -> String {
    let start = match tone {
        Tone::Pending => codes::YELLOW,
        Tone::Active => codes::BLUE,
        Tone::Success => codes::GREEN,
        Tone::Failure => codes::RED,
        Tone::Neutral => return apply_muted(text),
    };
    paint(text, start)
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
