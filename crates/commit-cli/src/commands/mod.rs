pub mod config;
pub mod day;
pub mod goal;
pub mod skip;
pub mod stats;
pub mod task;
pub mod today;

use chrono::NaiveDate;
use commit_core::{Config, GoalTracker, SqliteStore};
use serde::Serialize;

pub type CmdResult = Result<(), Box<dyn std::error::Error>>;

/// Tracker over the on-disk store, using the configured skip policy.
pub fn open_tracker() -> Result<GoalTracker<SqliteStore>, Box<dyn std::error::Error>> {
    let config = Config::load()?;
    Ok(GoalTracker::new(SqliteStore::open()?, config.engine()))
}

/// clap value parser for `YYYY-MM-DD` or ISO datetimes.
pub fn parse_date(s: &str) -> Result<NaiveDate, String> {
    commit_core::dates::parse_calendar_date(s).map_err(|e| e.to_string())
}

/// `--today` override, or the local date.
pub fn today_or(overridden: Option<NaiveDate>) -> NaiveDate {
    overridden.unwrap_or_else(commit_core::dates::today)
}

pub fn print_json<T: Serialize>(value: &T) -> CmdResult {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
