//! Session statistics
//!
//! Aggregation of game outcomes and persistence of the aggregate record.

mod aggregate;
mod store;

pub use aggregate::{AggregateStatistics, GameOutcome};
pub use store::{DEFAULT_FILE_NAME, JsonFileStore, StatsStore};
