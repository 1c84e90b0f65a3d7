//! Display functions for game progress and statistics

use super::formatters::{
    feedback_row, format_average, format_duration, format_optional_duration, values_row,
};
use crate::core::Preset;
use crate::game::Turn;
use crate::stats::{AggregateStatistics, GameOutcome};
use colored::Colorize;
use std::io::{self, Write};

/// Print every turn so far: feedback symbols above the guessed values
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn write_history<W: Write + ?Sized>(
    out: &mut W,
    history: &[Turn],
    preset: Preset,
) -> io::Result<()> {
    for turn in history {
        writeln!(out, "{}", feedback_row(&turn.feedback, preset))?;
        writeln!(out, "{}", values_row(&turn.guess, preset))?;
        writeln!(out, "{}", "─".repeat(12).bright_black())?;
    }
    Ok(())
}

/// Print the summary of a won game
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn write_win<W: Write + ?Sized>(out: &mut W, outcome: &GameOutcome) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(40).bright_cyan())?;
    writeln!(out, "{}", "  🎉 You did it!".bright_green().bold())?;
    writeln!(out, "\t\tGuesses: {}", outcome.guess_count)?;
    writeln!(out, "\t\tTime: {}", format_duration(outcome.elapsed))?;
    writeln!(out, "{}\n", "═".repeat(40).bright_cyan())
}

/// Print the aggregate statistics block
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn write_statistics<W: Write + ?Sized>(
    out: &mut W,
    stats: &AggregateStatistics,
) -> io::Result<()> {
    writeln!(out, "{}", "Time:".bright_cyan().bold())?;
    writeln!(
        out,
        "\t\tTotal time played: {}",
        format_duration(stats.total_time)
    )?;
    writeln!(
        out,
        "\t\tFastest game: {}",
        format_optional_duration(stats.fastest)
    )?;
    writeln!(
        out,
        "\t\tLongest game: {}",
        format_optional_duration(stats.longest)
    )?;

    writeln!(out, "{}", "Game stats:".bright_cyan().bold())?;
    writeln!(out, "\t\tGames played: {}", stats.played)?;
    writeln!(out, "\t\tTimes quit: {}", stats.quit)?;
    writeln!(out, "\t\tCurrent streak: {}", stats.streak)?;
    writeln!(out, "\t\tLongest streak: {}", stats.best_streak)?;

    writeln!(out, "{}", "Guessing:".bright_cyan().bold())?;
    writeln!(
        out,
        "\t\tAverage guesses: {}",
        format_average(stats.average_guesses())
    )?;
    writeln!(out, "\t\tFirst guess wins: {}", stats.first_guess_wins)?;
    writeln!(out, "\t\tTotal guesses: {}", stats.total_guesses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Feedback, Sequence};
    use std::time::Duration;

    fn render<F: FnOnce(&mut Vec<u8>) -> io::Result<()>>(f: F) -> String {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn history_lists_every_turn() {
        let hidden = Sequence::new([1, 7, 8, 8, 2]).unwrap();
        let history: Vec<Turn> = [[1u8, 1, 8, 0, 1], [1, 7, 8, 8, 2]]
            .into_iter()
            .map(|values| {
                let guess = Sequence::new(values).unwrap();
                let feedback = Feedback::calculate(&guess, &hidden).unwrap();
                Turn { guess, feedback }
            })
            .collect();

        let text = render(|out| write_history(out, &history, Preset::Classic));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "  !   x   !   x   x ");
        assert_eq!(lines[1], "   1   1   8   0   1");
        assert_eq!(lines[3], "  !   !   !   !   ! ");
    }

    #[test]
    fn win_summary() {
        let outcome = GameOutcome::won(4, Duration::from_secs(75));
        let text = render(|out| write_win(out, &outcome));

        assert!(text.contains("You did it!"));
        assert!(text.contains("Guesses: 4"));
        assert!(text.contains("Time: 1m 15.0s"));
    }

    #[test]
    fn statistics_before_first_game() {
        let text = render(|out| write_statistics(out, &AggregateStatistics::default()));

        assert!(text.contains("Games played: 0"));
        assert!(text.contains("Average guesses: -"));
        assert!(text.contains("Fastest game: -"));
    }

    #[test]
    fn statistics_after_games() {
        let stats = AggregateStatistics::default()
            .fold(&GameOutcome::won(3, Duration::from_secs(10)))
            .fold(&GameOutcome::quit(0, Duration::from_secs(5)));
        let text = render(|out| write_statistics(out, &stats));

        assert!(text.contains("Games played: 2"));
        assert!(text.contains("Times quit: 1"));
        assert!(text.contains("Current streak: 0"));
        assert!(text.contains("Longest streak: 1"));
        assert!(text.contains("Average guesses: 1.50"));
        assert!(text.contains("Total guesses: 3"));
        assert!(text.contains("Total time played: 15.0s"));
    }
}
