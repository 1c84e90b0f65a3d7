//! Simple interactive CLI mode
//!
//! Line-based game loop: read a guess, score it, print the history, and on
//! win or quit fold the outcome into the saved statistics.

use crate::core::{GameConfig, Preset};
use crate::game::{GuessInput, Session};
use crate::output::{write_history, write_statistics, write_win};
use crate::stats::{AggregateStatistics, StatsStore};
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{BufRead, Write};

/// Run the line-mode game until the player quits or declines another round
///
/// When `config` is `None` the player is asked to choose the options first.
/// Returns the aggregate statistics as last saved.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails. Failing to save
/// statistics is only reported as a warning.
pub fn run_simple<R, W, S, G>(
    input: &mut R,
    out: &mut W,
    store: &S,
    rng: &mut G,
    config: Option<GameConfig>,
) -> Result<AggregateStatistics>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
    S: StatsStore + ?Sized,
    G: Rng + ?Sized,
{
    let mut stats = store.load();

    writeln!(out, "\n{}", "═".repeat(60).bright_cyan())?;
    writeln!(out, "{}", "                    M A S T E R M I N D".bright_cyan().bold())?;
    writeln!(out, "{}\n", "═".repeat(60).bright_cyan())?;

    let config = match config {
        Some(config) => config,
        None => prompt_config(input, out)?,
    };

    writeln!(out, "Crack the hidden code: {config}.")?;
    writeln!(
        out,
        "Feedback: {} right place, {} wrong place, {} not in the code.",
        "!".bright_green().bold(),
        "^".bright_yellow().bold(),
        "x".bright_black()
    )?;
    writeln!(out, "Type 'q' or 'quit' to give up.\n")?;

    loop {
        let mut session = Session::start(config, rng);

        let outcome = loop {
            write!(out, "Please enter your guess:> ")?;
            out.flush()?;

            let Some(line) = read_line(input)? else {
                // End of input
                break session.outcome(true);
            };

            match GuessInput::parse(&line, &config) {
                Err(e) => writeln!(out, "{}", e.to_string().red())?,
                Ok(GuessInput::Quit) => break session.outcome(true),
                Ok(GuessInput::Guess(guess)) => {
                    session.submit(guess)?;
                    write_history(out, session.history(), config.preset())?;
                    if session.is_won() {
                        break session.outcome(false);
                    }
                }
            }
        };

        stats.record(&outcome);
        log::info!(
            "game over: quit={} guesses={} elapsed={:?}",
            outcome.quit,
            outcome.guess_count,
            outcome.elapsed
        );

        if outcome.quit {
            writeln!(out, "\nThe code was: {}", session.hidden().to_string().bold())?;
            write_statistics(out, &stats)?;
            save_or_warn(store, &stats, out)?;
            writeln!(out, "Thanks for playing.")?;
            return Ok(stats);
        }

        write_win(out, &outcome)?;
        write_statistics(out, &stats)?;
        save_or_warn(store, &stats, out)?;

        write!(out, "Play again? ")?;
        if !ask_yes_no(input, out)? {
            writeln!(out, "Thanks for playing.")?;
            return Ok(stats);
        }
    }
}

/// Ask the two option questions and build the configuration
fn prompt_config<R, W>(input: &mut R, out: &mut W) -> Result<GameConfig>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    write!(out, "Double Digits (Up to 25)? ")?;
    let preset = if ask_yes_no(input, out)? {
        Preset::DoubleDigits
    } else {
        Preset::Classic
    };

    write!(out, "Four numbers? ")?;
    let length = if ask_yes_no(input, out)? { 4 } else { 5 };

    Ok(GameConfig::new(length, preset)?)
}

/// Yes only for an explicit `y`/`yes`; end of input counts as no
fn ask_yes_no<R, W>(input: &mut R, out: &mut W) -> Result<bool>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    write!(out, "Enter y/N:> ")?;
    out.flush()?;

    Ok(read_line(input)?.is_some_and(|answer| {
        let answer = answer.trim();
        answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
    }))
}

fn save_or_warn<S, W>(store: &S, stats: &AggregateStatistics, out: &mut W) -> Result<()>
where
    S: StatsStore + ?Sized,
    W: Write + ?Sized,
{
    if let Err(e) = store.save(stats) {
        log::warn!("could not save statistics: {e:#}");
        writeln!(
            out,
            "{}",
            format!("Warning: statistics were not saved ({e:#})").yellow()
        )?;
    }
    Ok(())
}

/// Read one line, `None` at end of input
///
/// Invalid UTF-8 is replaced rather than treated as an error, so a garbled
/// line reaches the parser and is rejected like any other bad guess.
fn read_line<R: BufRead + ?Sized>(input: &mut R) -> Result<Option<String>> {
    let mut bytes = Vec::new();
    if input.read_until(b'\n', &mut bytes)? == 0 {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(&bytes).trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Sequence;
    use crate::game::generate;
    use crate::stats::{GameOutcome, JsonFileStore};
    use rand::{SeedableRng, rngs::StdRng};
    use std::io::Cursor;
    use std::time::Duration;

    const SEED: u64 = 2024;

    struct Harness {
        _dir: tempfile::TempDir,
        store: JsonFileStore,
    }

    impl Harness {
        fn new() -> Self {
            let dir = tempfile::tempdir().unwrap();
            let store = JsonFileStore::new(dir.path().join("stats.json"));
            Self { _dir: dir, store }
        }

        fn play(&self, config: Option<GameConfig>, script: &str) -> (AggregateStatistics, String) {
            colored::control::set_override(false);
            let mut input = Cursor::new(script.to_string());
            let mut out = Vec::new();
            let mut rng = StdRng::seed_from_u64(SEED);
            let stats = run_simple(&mut input, &mut out, &self.store, &mut rng, config).unwrap();
            (stats, String::from_utf8(out).unwrap())
        }
    }

    /// Hidden sequences the seeded generator produces, in game order
    fn hidden_codes(config: &GameConfig, games: usize) -> Vec<Sequence> {
        let mut rng = StdRng::seed_from_u64(SEED);
        (0..games).map(|_| generate(config, &mut rng)).collect()
    }

    #[test]
    fn first_guess_win_then_stop() {
        let config = GameConfig::default();
        let hidden = &hidden_codes(&config, 1)[0];
        let harness = Harness::new();

        let (stats, text) = harness.play(Some(config), &format!("{hidden}\nn\n"));

        assert!(text.contains("You did it!"));
        assert!(text.contains("Thanks for playing."));
        assert_eq!(stats.played, 1);
        assert_eq!(stats.first_guess_wins, 1);
        assert_eq!(stats.total_guesses, 1);
        assert_eq!(stats.streak, 1);
        assert_eq!(harness.store.load(), stats);
    }

    #[test]
    fn malformed_guesses_are_rejected_without_side_effects() {
        let harness = Harness::new();
        let (stats, text) = harness.play(Some(GameConfig::default()), "1 2\n1 2 x 3 4\nq\n");

        assert!(text.contains("Please enter 5 numbers separated by spaces (got 2)"));
        assert!(text.contains("Not a number (x) - Try again"));
        assert!(text.contains("The code was:"));
        assert_eq!(stats.played, 1);
        assert_eq!(stats.quit, 1);
        assert_eq!(stats.total_guesses, 0);
    }

    #[test]
    fn invalid_utf8_guess_is_rejected_and_game_continues() {
        let harness = Harness::new();
        colored::control::set_override(false);
        let mut input = Cursor::new(b"1 2 \xff 3 4\nq\n".to_vec());
        let mut out = Vec::new();
        let mut rng = StdRng::seed_from_u64(SEED);

        let stats = run_simple(
            &mut input,
            &mut out,
            &harness.store,
            &mut rng,
            Some(GameConfig::default()),
        )
        .unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Not a number"));
        assert!(text.contains("The code was:"));
        assert_eq!(stats.quit, 1);
        assert_eq!(stats.total_guesses, 0);
        assert_eq!(harness.store.load().played, 1);
    }

    #[test]
    fn wrong_guess_prints_history() {
        let config = GameConfig::default();
        let hidden = &hidden_codes(&config, 1)[0];
        let wrong: Vec<String> = hidden
            .values()
            .iter()
            .map(|v| ((v + 1) % config.max()).to_string())
            .collect();
        let harness = Harness::new();

        let (stats, text) = harness.play(Some(config), &format!("{}\nquit\n", wrong.join(" ")));

        assert!(text.contains("────"));
        assert_eq!(stats.quit, 1);
        assert_eq!(stats.streak, 0);
    }

    #[test]
    fn end_of_input_counts_as_quit() {
        let harness = Harness::new();
        let (stats, text) = harness.play(Some(GameConfig::default()), "");

        assert!(text.contains("Thanks for playing."));
        assert_eq!(stats.quit, 1);
        assert_eq!(harness.store.load().played, 1);
    }

    #[test]
    fn play_again_then_quit() {
        let config = GameConfig::new(4, Preset::Classic).unwrap();
        let codes = hidden_codes(&config, 1);
        let harness = Harness::new();

        let (stats, _) = harness.play(Some(config), &format!("{}\ny\nq\n", codes[0]));

        assert_eq!(stats.played, 2);
        assert_eq!(stats.quit, 1);
        assert_eq!(stats.streak, 0);
        assert_eq!(stats.best_streak, 1);
        assert_eq!(stats.total_guesses, 1);
    }

    #[test]
    fn options_are_asked_when_not_given() {
        let harness = Harness::new();
        let (_, text) = harness.play(None, "y\ny\n1 2\nq\n");

        assert!(text.contains("Double Digits (Up to 25)?"));
        assert!(text.contains("Four numbers?"));
        assert!(text.contains("4 values from 0 to 24"));
        assert!(text.contains("Please enter 4 numbers"));
    }

    #[test]
    fn existing_statistics_are_extended() {
        let harness = Harness::new();
        let previous =
            AggregateStatistics::default().fold(&GameOutcome::won(4, Duration::from_secs(30)));
        harness.store.save(&previous).unwrap();

        let (stats, _) = harness.play(Some(GameConfig::default()), "q\n");

        assert_eq!(stats.played, 2);
        assert_eq!(stats.total_guesses, 4);
        assert_eq!(harness.store.load(), stats);
    }

    #[test]
    fn save_failure_is_only_a_warning() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("missing").join("stats.json"));
        colored::control::set_override(false);
        let mut input = Cursor::new("q\n");
        let mut out = Vec::new();
        let mut rng = StdRng::seed_from_u64(SEED);

        let stats = run_simple(&mut input, &mut out, &store, &mut rng, None).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Warning: statistics were not saved"));
        assert!(text.contains("Thanks for playing."));
        assert_eq!(stats.played, 1);
    }
}
