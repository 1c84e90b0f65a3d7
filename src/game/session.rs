//! A single game from sequence generation to win or quit

use super::generate;
use crate::core::{Feedback, GameConfig, Sequence, SequenceError};
use crate::stats::GameOutcome;
use rand::Rng;
use std::time::{Duration, Instant};

/// One scored guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub guess: Sequence,
    pub feedback: Feedback,
}

/// State of the game in progress
#[derive(Debug, Clone)]
pub struct Session {
    config: GameConfig,
    hidden: Sequence,
    history: Vec<Turn>,
    started: Instant,
}

impl Session {
    /// Start a game against a freshly generated hidden sequence
    pub fn start<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Self {
        let hidden = generate(&config, rng);
        log::debug!("new {} game started", config.preset());
        Self::new(config, hidden)
    }

    /// Start a game against a known hidden sequence
    #[must_use]
    pub fn new(config: GameConfig, hidden: Sequence) -> Self {
        Self {
            config,
            hidden,
            history: Vec::new(),
            started: Instant::now(),
        }
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub const fn hidden(&self) -> &Sequence {
        &self.hidden
    }

    /// Every turn so far, oldest first
    #[must_use]
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    #[must_use]
    pub fn guess_count(&self) -> u32 {
        self.history.len() as u32
    }

    /// True once the latest guess scored all `Exact`
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.history.last().is_some_and(|turn| turn.feedback.is_win())
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Score `guess` and append it to the history
    ///
    /// # Errors
    /// Returns `SequenceError::LengthMismatch` if the guess has the wrong length;
    /// the history is left untouched.
    pub fn submit(&mut self, guess: Sequence) -> Result<&Turn, SequenceError> {
        let feedback = Feedback::calculate(&guess, &self.hidden)?;
        log::debug!("guess {} scored {feedback}", self.history.len() + 1);
        self.history.push(Turn { guess, feedback });
        Ok(&self.history[self.history.len() - 1])
    }

    /// Outcome of this game, timed from the start of the session until now
    #[must_use]
    pub fn outcome(&self, quit: bool) -> GameOutcome {
        self.outcome_with(quit, self.elapsed())
    }

    /// Outcome of this game with an explicit elapsed time
    #[must_use]
    pub fn outcome_with(&self, quit: bool, elapsed: Duration) -> GameOutcome {
        if quit {
            GameOutcome::quit(self.guess_count(), elapsed)
        } else {
            GameOutcome::won(self.guess_count(), elapsed)
        }
    }
}
