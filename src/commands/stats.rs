//! Saved statistics commands

use crate::output::write_statistics;
use crate::stats::{AggregateStatistics, StatsStore};
use anyhow::Result;
use std::io::Write;

/// Print the saved statistics
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn show_statistics<S, W>(store: &S, out: &mut W) -> Result<AggregateStatistics>
where
    S: StatsStore + ?Sized,
    W: Write + ?Sized,
{
    let stats = store.load();
    write_statistics(out, &stats)?;
    Ok(stats)
}

/// Overwrite the saved statistics with an empty record
///
/// # Errors
///
/// Returns an error if the store cannot be written.
pub fn reset_statistics<S, W>(store: &S, out: &mut W) -> Result<()>
where
    S: StatsStore + ?Sized,
    W: Write + ?Sized,
{
    store.save(&AggregateStatistics::default())?;
    log::info!("statistics reset");
    writeln!(out, "Statistics reset.")?;
    Ok(())
}
