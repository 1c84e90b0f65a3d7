//! Terminal output formatting
//!
//! Display utilities for the line-mode game and the statistics report.

pub mod display;
pub mod formatters;

pub use display::{write_history, write_statistics, write_win};
