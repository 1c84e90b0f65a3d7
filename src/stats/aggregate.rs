//! Cross-session statistics
//!
//! A finished game produces one [`GameOutcome`], which is folded into the
//! running [`AggregateStatistics`] exactly once.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Result of one completed or abandoned game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOutcome {
    pub guess_count: u32,
    pub elapsed: Duration,
    pub quit: bool,
}

impl GameOutcome {
    /// Outcome of a game the player cracked after `guess_count` guesses
    #[must_use]
    pub const fn won(guess_count: u32, elapsed: Duration) -> Self {
        Self {
            guess_count,
            elapsed,
            quit: false,
        }
    }

    /// Outcome of a game the player abandoned after `guess_count` guesses
    #[must_use]
    pub const fn quit(guess_count: u32, elapsed: Duration) -> Self {
        Self {
            guess_count,
            elapsed,
            quit: true,
        }
    }
}

/// Running totals across every game folded so far
///
/// Missing fields deserialize to their zero value so older records still load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregateStatistics {
    pub total_time: Duration,
    pub fastest: Option<Duration>,
    pub longest: Option<Duration>,
    pub streak: u32,
    pub best_streak: u32,
    pub played: u32,
    pub quit: u32,
    pub total_guesses: u32,
    pub first_guess_wins: u32,
}

impl AggregateStatistics {
    /// Fold one game outcome into the totals
    ///
    /// Quits count toward `played` and reset the streak but add nothing to
    /// `total_guesses`. A win on the first guess also counts toward
    /// `first_guess_wins`. Counters saturate instead of overflowing.
    ///
    /// # Examples
    /// ```
    /// use mastermind::stats::{AggregateStatistics, GameOutcome};
    /// use std::time::Duration;
    ///
    /// let stats = AggregateStatistics::default()
    ///     .fold(&GameOutcome::won(3, Duration::from_secs(10)))
    ///     .fold(&GameOutcome::quit(2, Duration::from_secs(5)));
    ///
    /// assert_eq!(stats.played, 2);
    /// assert_eq!(stats.quit, 1);
    /// assert_eq!(stats.streak, 0);
    /// assert_eq!(stats.total_guesses, 3);
    /// assert_eq!(stats.total_time, Duration::from_secs(15));
    /// ```
    #[must_use]
    pub fn fold(mut self, outcome: &GameOutcome) -> Self {
        self.record(outcome);
        self
    }

    /// In-place variant of [`fold`](Self::fold)
    pub fn record(&mut self, outcome: &GameOutcome) {
        let elapsed = outcome.elapsed;

        self.fastest = Some(self.fastest.map_or(elapsed, |t| t.min(elapsed)));
        self.longest = Some(self.longest.map_or(elapsed, |t| t.max(elapsed)));

        if outcome.quit {
            self.quit = self.quit.saturating_add(1);
            self.streak = 0;
        } else {
            self.streak = self.streak.saturating_add(1);
            self.best_streak = self.best_streak.max(self.streak);
            self.total_guesses = self.total_guesses.saturating_add(outcome.guess_count);
            if outcome.guess_count == 1 {
                self.first_guess_wins = self.first_guess_wins.saturating_add(1);
            }
        }

        self.played = self.played.saturating_add(1);
        self.total_time = self.total_time.saturating_add(elapsed);
    }

    /// Games that ended in a win
    #[must_use]
    pub const fn wins(&self) -> u32 {
        self.played.saturating_sub(self.quit)
    }

    /// Average guesses per game played, `None` before the first game
    #[must_use]
    pub fn average_guesses(&self) -> Option<f64> {
        (self.played > 0).then(|| f64::from(self.total_guesses) / f64::from(self.played))
    }
}
