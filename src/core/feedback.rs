//! Guess feedback calculation and representation
//!
//! Each guess position receives one of three marks:
//! - `Exact`   = value and position match (shown as `!`)
//! - `Partial` = value occurs at another, unclaimed hidden position (shown as `^`)
//! - `Absent`  = value unmatched or already fully claimed (shown as `x`)

use super::{Sequence, SequenceError};
use std::fmt;

/// Classification of a single guess position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Absent,
    Partial,
    Exact,
}

impl Mark {
    /// Single-character symbol used by the terminal renderers
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Exact => '!',
            Self::Partial => '^',
            Self::Absent => 'x',
        }
    }
}

/// Per-position feedback for one guess
///
/// Produced fresh for every guess and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<Mark>);

impl Feedback {
    /// Calculate the feedback when `guess` is compared against `hidden`
    ///
    /// Duplicate values are handled by claiming hidden positions: each hidden
    /// slot contributes to at most one mark.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and claim those hidden positions
    /// 2. Second pass: for every remaining guess position, claim the first
    ///    unclaimed hidden position (lowest index) holding the same value
    ///
    /// # Errors
    /// Returns `SequenceError::LengthMismatch` if the sequences differ in length.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Feedback, Mark, Sequence};
    ///
    /// let hidden = Sequence::new([3, 2, 1, 1, 1]).unwrap();
    /// let guess = Sequence::new([1, 1, 1, 2, 1]).unwrap();
    /// let feedback = Feedback::calculate(&guess, &hidden).unwrap();
    ///
    /// assert_eq!(feedback.to_symbols(), "^x!^!");
    /// assert_eq!(feedback.count(Mark::Exact), 2);
    /// ```
    pub fn calculate(guess: &Sequence, hidden: &Sequence) -> Result<Self, SequenceError> {
        if guess.len() != hidden.len() {
            return Err(SequenceError::LengthMismatch {
                guess: guess.len(),
                hidden: hidden.len(),
            });
        }

        let guess = guess.values();
        let hidden = hidden.values();
        let mut marks = vec![Mark::Absent; guess.len()];
        let mut claimed = vec![false; hidden.len()];

        // First pass: exact matches
        for (i, (g, h)) in guess.iter().zip(hidden).enumerate() {
            if g == h {
                marks[i] = Mark::Exact;
                claimed[i] = true;
            }
        }

        // Second pass: first unclaimed match, ascending hidden index
        for (i, &value) in guess.iter().enumerate() {
            if marks[i] == Mark::Exact {
                continue;
            }
            let slot = hidden
                .iter()
                .enumerate()
                .position(|(j, &h)| !claimed[j] && h == value);
            if let Some(j) = slot {
                claimed[j] = true;
                marks[i] = Mark::Partial;
            }
        }

        Ok(Self(marks))
    }

    /// Marks in guess-position order
    #[inline]
    #[must_use]
    pub fn marks(&self) -> &[Mark] {
        &self.0
    }

    /// Check whether the guess cracked the code (every position `Exact`)
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.0.iter().all(|&m| m == Mark::Exact)
    }

    /// Count positions carrying `mark`
    #[must_use]
    pub fn count(&self, mark: Mark) -> usize {
        self.0.iter().filter(|&&m| m == mark).count()
    }

    /// Convert to a compact symbol string such as `"!x^xx"`
    #[must_use]
    pub fn to_symbols(&self) -> String {
        self.0.iter().map(|m| m.symbol()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_symbols())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Mark::{Absent, Exact, Partial};

    fn score(guess: &[u8], hidden: &[u8]) -> Vec<Mark> {
        let guess = Sequence::new(guess).unwrap();
        let hidden = Sequence::new(hidden).unwrap();
        Feedback::calculate(&guess, &hidden).unwrap().0
    }

    #[test]
    fn exact_only_for_matching_positions() {
        assert_eq!(
            score(&[1, 1, 9, 8, 1], &[1, 7, 9, 9, 2]),
            vec![Exact, Absent, Exact, Absent, Absent]
        );
    }

    #[test]
    fn duplicate_guess_values_claim_each_slot_once() {
        assert_eq!(
            score(&[1, 1, 1, 2, 1], &[3, 2, 1, 1, 1]),
            vec![Partial, Absent, Exact, Partial, Exact]
        );
    }

    #[test]
    fn extra_duplicate_in_guess_is_absent() {
        assert_eq!(
            score(&[1, 1, 1, 2, 1], &[1, 1, 1, 1, 1]),
            vec![Exact, Exact, Exact, Absent, Exact]
        );
    }

    #[test]
    fn one_exact_rest_partial() {
        assert_eq!(
            score(&[1, 1, 3, 1, 2], &[3, 2, 1, 1, 1]),
            vec![Partial, Partial, Partial, Exact, Partial]
        );
    }

    #[test]
    fn permutation_is_all_partial() {
        assert_eq!(
            score(&[1, 4, 3, 1, 2], &[3, 2, 1, 4, 1]),
            vec![Partial; 5]
        );
    }

    #[test]
    fn no_shared_values_is_all_absent() {
        assert_eq!(score(&[5, 5, 5, 5, 5], &[3, 2, 1, 1, 1]), vec![Absent; 5]);
        assert_eq!(score(&[0, 1, 2, 3, 4], &[5, 5, 5, 5, 5]), vec![Absent; 5]);
    }

    #[test]
    fn near_win() {
        assert_eq!(
            score(&[5, 7, 5, 1, 4], &[5, 7, 5, 1, 5]),
            vec![Exact, Exact, Exact, Exact, Absent]
        );
    }

    #[test]
    fn single_shared_value_claimed_by_first_guess_position() {
        assert_eq!(
            score(&[1, 1, 1, 2, 1], &[5, 7, 5, 1, 5]),
            vec![Partial, Absent, Absent, Absent, Absent]
        );
    }

    #[test]
    fn four_position_sequences() {
        assert_eq!(
            score(&[2, 2, 0, 0], &[0, 2, 2, 3]),
            vec![Partial, Exact, Partial, Absent]
        );
    }

    #[test]
    fn length_mismatch_is_an_error() {
        let guess = Sequence::new([1, 2, 3, 4]).unwrap();
        let hidden = Sequence::new([1, 2, 3, 4, 5]).unwrap();
        assert_eq!(
            Feedback::calculate(&guess, &hidden),
            Err(SequenceError::LengthMismatch { guess: 4, hidden: 5 })
        );
    }

    #[test]
    fn win_requires_every_position_exact() {
        let hidden = Sequence::new([4, 4, 0, 8]).unwrap();
        assert!(Feedback::calculate(&hidden, &hidden).unwrap().is_win());

        let guess = Sequence::new([4, 4, 8, 0]).unwrap();
        assert!(!Feedback::calculate(&guess, &hidden).unwrap().is_win());
    }

    #[test]
    fn symbols_and_counts() {
        let guess = Sequence::new([1, 1, 1, 2, 1]).unwrap();
        let hidden = Sequence::new([3, 2, 1, 1, 1]).unwrap();
        let feedback = Feedback::calculate(&guess, &hidden).unwrap();

        assert_eq!(feedback.to_symbols(), "^x!^!");
        assert_eq!(feedback.to_string(), "^x!^!");
        assert_eq!(feedback.count(Exact), 2);
        assert_eq!(feedback.count(Partial), 2);
        assert_eq!(feedback.count(Absent), 1);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn pair() -> impl Strategy<Value = (Vec<u8>, Vec<u8>)> {
            (1usize..=6).prop_flat_map(|len| {
                (
                    prop::collection::vec(0u8..6, len),
                    prop::collection::vec(0u8..6, len),
                )
            })
        }

        proptest! {
            #[test]
            fn exact_count_equals_positional_matches((guess, hidden) in pair()) {
                let matches = guess.iter().zip(&hidden).filter(|(g, h)| g == h).count();
                let marks = score(&guess, &hidden);
                prop_assert_eq!(marks.iter().filter(|&&m| m == Exact).count(), matches);
            }

            #[test]
            fn self_match_is_a_win(hidden in prop::collection::vec(0u8..25, 1..=6)) {
                let seq = Sequence::new(hidden).unwrap();
                let feedback = Feedback::calculate(&seq, &seq).unwrap();
                prop_assert!(feedback.is_win());
                prop_assert_eq!(feedback.count(Exact), seq.len());
            }

            #[test]
            fn hits_never_exceed_shared_multiplicity((guess, hidden) in pair()) {
                let g = Sequence::new(guess).unwrap();
                let h = Sequence::new(hidden).unwrap();
                let feedback = Feedback::calculate(&g, &h).unwrap();

                let occurrences = |seq: &Sequence, value: u8| {
                    seq.values().iter().filter(|&&v| v == value).count()
                };
                for value in 0u8..6 {
                    let hits = g
                        .values()
                        .iter()
                        .zip(feedback.marks())
                        .filter(|&(&v, &m)| v == value && m != Absent)
                        .count();
                    prop_assert_eq!(hits, occurrences(&g, value).min(occurrences(&h, value)));
                }
            }
        }
    }
}
