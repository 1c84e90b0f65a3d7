//! Guess input parsing
//!
//! Turns one line of player text into either a guess or a quit request.

use crate::core::{GameConfig, Sequence};
use std::fmt;

/// A successfully parsed line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessInput {
    Quit,
    Guess(Sequence),
}

/// Why a line was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    WrongCount { expected: usize, got: usize },
    NotANumber(String),
    OutOfRange { value: u8, min: u8, max: u8 },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongCount { expected, got } => write!(
                f,
                "Please enter {expected} numbers separated by spaces (got {got})"
            ),
            Self::NotANumber(token) => write!(f, "Not a number ({token}) - Try again"),
            Self::OutOfRange { value, min, max } => write!(
                f,
                "{value} is out of range - values go from {min} to {}",
                max - 1
            ),
        }
    }
}

impl std::error::Error for InputError {}

impl GuessInput {
    /// Parse one line of input against the session configuration
    ///
    /// `q`/`quit` in any case requests a quit. Anything else must be exactly
    /// `config.length()` whitespace-separated integers within the configured range.
    ///
    /// # Errors
    /// Returns an `InputError` describing the first problem found.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::GameConfig;
    /// use mastermind::game::GuessInput;
    ///
    /// let config = GameConfig::default();
    /// assert_eq!(GuessInput::parse(" Quit ", &config), Ok(GuessInput::Quit));
    /// assert!(matches!(GuessInput::parse("0 1 2 3 4", &config), Ok(GuessInput::Guess(_))));
    /// assert!(GuessInput::parse("0 1 2", &config).is_err());
    /// ```
    pub fn parse(line: &str, config: &GameConfig) -> Result<Self, InputError> {
        let line = line.trim();
        if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
            return Ok(Self::Quit);
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        let wrong_count = InputError::WrongCount {
            expected: config.length(),
            got: tokens.len(),
        };
        if tokens.len() != config.length() {
            return Err(wrong_count);
        }

        let mut values = Vec::with_capacity(tokens.len());
        for token in tokens {
            let value: u8 = token
                .parse()
                .map_err(|_| InputError::NotANumber(token.to_string()))?;
            if !config.contains(value) {
                return Err(InputError::OutOfRange {
                    value,
                    min: config.min(),
                    max: config.max(),
                });
            }
            values.push(value);
        }

        Sequence::new(values)
            .map(Self::Guess)
            .map_err(|_| wrong_count)
    }
}
