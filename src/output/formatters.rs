//! Formatting utilities for terminal output

use crate::core::{Feedback, Mark, Preset, Sequence};
use colored::{ColoredString, Colorize};
use std::time::Duration;

/// Colour a single feedback symbol
#[must_use]
pub fn colored_symbol(mark: Mark) -> ColoredString {
    let symbol = mark.symbol().to_string();
    match mark {
        Mark::Exact => symbol.bright_green().bold(),
        Mark::Partial => symbol.bright_yellow().bold(),
        Mark::Absent => symbol.bright_black(),
    }
}

/// Feedback symbols, one right-aligned column per position
#[must_use]
pub fn feedback_row(feedback: &Feedback, preset: Preset) -> String {
    let width = preset.column_width();
    feedback
        .marks()
        .iter()
        .map(|&m| {
            // Pad before colouring so escape codes don't count toward the width
            let padding = " ".repeat(width.saturating_sub(1));
            format!("{padding}{} ", colored_symbol(m))
        })
        .collect()
}

/// Guess values aligned under [`feedback_row`]
#[must_use]
pub fn values_row(sequence: &Sequence, preset: Preset) -> String {
    let width = preset.column_width() + 1;
    sequence
        .values()
        .iter()
        .map(|v| format!("{v:>width$}"))
        .collect()
}

/// Human-readable duration: `"42.3s"`, `"3m 07.5s"`, `"1h 02m 03s"`
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    let total = duration.as_secs();
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = duration.as_secs_f64() - (hours * 3600 + minutes * 60) as f64;

    if hours > 0 {
        format!("{hours}h {minutes:02}m {:02}s", total % 60)
    } else if minutes > 0 {
        format!("{minutes}m {seconds:04.1}s")
    } else {
        format!("{seconds:.1}s")
    }
}

/// [`format_duration`] for an optional time, `"-"` when unset
#[must_use]
pub fn format_optional_duration(duration: Option<Duration>) -> String {
    duration.map_or_else(|| "-".to_string(), format_duration)
}

/// Average guesses with a placeholder before any game was played
#[must_use]
pub fn format_average(average: Option<f64>) -> String {
    average.map_or_else(|| "-".to_string(), |avg| format!("{avg:.2}"))
}
