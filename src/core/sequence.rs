//! Digit sequence representation
//!
//! A Sequence is either the hidden code or one submitted guess. Both are
//! immutable once constructed.

use std::fmt;

/// Longest sequence accepted by [`Sequence::new`]
pub const MAX_LENGTH: usize = 16;

/// An ordered, immutable list of digit values
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sequence {
    values: Vec<u8>,
}

/// Error type for invalid sequences and mismatched comparisons
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    /// Sequence has no values or more than [`MAX_LENGTH`]
    InvalidLength(usize),
    /// Guess and hidden sequence differ in length
    LengthMismatch { guess: usize, hidden: usize },
}

impl fmt::Display for SequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Sequence must hold 1 to {MAX_LENGTH} values, got {len}")
            }
            Self::LengthMismatch { guess, hidden } => write!(
                f,
                "Guess has {guess} values but the hidden sequence has {hidden}"
            ),
        }
    }
}

impl std::error::Error for SequenceError {}

impl Sequence {
    /// Create a new Sequence from its values
    ///
    /// # Errors
    /// Returns `SequenceError::InvalidLength` if `values` is empty or longer
    /// than [`MAX_LENGTH`]. Range checks belong to the caller (see
    /// [`GameConfig::contains`](super::GameConfig::contains)).
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Sequence;
    ///
    /// let code = Sequence::new(vec![1, 7, 9, 9, 2]).unwrap();
    /// assert_eq!(code.len(), 5);
    ///
    /// assert!(Sequence::new(Vec::new()).is_err());
    /// ```
    pub fn new(values: impl Into<Vec<u8>>) -> Result<Self, SequenceError> {
        let values = values.into();

        if values.is_empty() || values.len() > MAX_LENGTH {
            return Err(SequenceError::InvalidLength(values.len()));
        }

        Ok(Self { values })
    }

    /// Get the values as a slice
    #[inline]
    #[must_use]
    pub fn values(&self) -> &[u8] {
        &self.values
    }

    /// Number of positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false: construction rejects empty sequences
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}
