//! Mastermind
//!
//! A terminal code-breaking game: crack a hidden digit sequence using
//! per-position exact/partial feedback, with statistics kept across sessions.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind::core::{Feedback, Sequence};
//!
//! let hidden = Sequence::new([1, 7, 9, 9, 2]).unwrap();
//! let guess = Sequence::new([1, 1, 9, 8, 1]).unwrap();
//!
//! let feedback = Feedback::calculate(&guess, &hidden).unwrap();
//! assert_eq!(feedback.to_symbols(), "!x!xx");
//! assert!(!feedback.is_win());
//! ```

// Core domain types
pub mod core;

// Game flow
pub mod game;

// Statistics aggregation and persistence
pub mod stats;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
