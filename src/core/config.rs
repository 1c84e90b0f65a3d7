//! Game configuration presets
//!
//! The player picks one of a small fixed set of options before a session
//! starts: the sequence length and the value range preset.

use std::fmt;

/// Supported sequence lengths
pub const SUPPORTED_LENGTHS: [usize; 2] = [4, 5];

/// Value range preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Preset {
    /// Single digits, values 0-8
    #[default]
    Classic,
    /// Values 0-24
    DoubleDigits,
}

impl Preset {
    /// Inclusive lower bound of the value range
    #[must_use]
    pub const fn min(self) -> u8 {
        0
    }

    /// Exclusive upper bound of the value range
    #[must_use]
    pub const fn max(self) -> u8 {
        match self {
            Self::Classic => 9,
            Self::DoubleDigits => 25,
        }
    }

    /// Column width used when printing feedback and values
    #[must_use]
    pub const fn column_width(self) -> usize {
        match self {
            Self::Classic => 3,
            Self::DoubleDigits => 4,
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Classic => f.write_str("classic"),
            Self::DoubleDigits => f.write_str("double-digits"),
        }
    }
}

/// Error type for unsupported configurations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    UnsupportedLength(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedLength(len) => {
                write!(f, "Sequence length must be 4 or 5, got {len}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Options fixed for the lifetime of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    length: usize,
    preset: Preset,
}

impl GameConfig {
    /// Create a configuration
    ///
    /// # Errors
    /// Returns `ConfigError::UnsupportedLength` unless `length` is 4 or 5.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{GameConfig, Preset};
    ///
    /// let config = GameConfig::new(4, Preset::DoubleDigits).unwrap();
    /// assert_eq!(config.max(), 25);
    /// assert!(GameConfig::new(6, Preset::Classic).is_err());
    /// ```
    pub fn new(length: usize, preset: Preset) -> Result<Self, ConfigError> {
        if !SUPPORTED_LENGTHS.contains(&length) {
            return Err(ConfigError::UnsupportedLength(length));
        }
        Ok(Self { length, preset })
    }

    #[inline]
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    #[inline]
    #[must_use]
    pub const fn preset(&self) -> Preset {
        self.preset
    }

    #[inline]
    #[must_use]
    pub const fn min(&self) -> u8 {
        self.preset.min()
    }

    #[inline]
    #[must_use]
    pub const fn max(&self) -> u8 {
        self.preset.max()
    }

    /// Check whether `value` lies in `[min, max)`
    #[inline]
    #[must_use]
    pub const fn contains(&self, value: u8) -> bool {
        value >= self.min() && value < self.max()
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            length: 5,
            preset: Preset::Classic,
        }
    }
}

impl fmt::Display for GameConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} values from {} to {}",
            self.length,
            self.min(),
            self.max() - 1
        )
    }
}
