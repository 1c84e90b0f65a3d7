//! Core domain types for Mastermind
//!
//! Sequences, feedback scoring and game configuration. Everything here is
//! pure and deterministic; randomness and I/O live in the outer modules.

mod config;
mod feedback;
mod sequence;

pub use config::{ConfigError, GameConfig, Preset, SUPPORTED_LENGTHS};
pub use feedback::{Feedback, Mark};
pub use sequence::{MAX_LENGTH, Sequence, SequenceError};
