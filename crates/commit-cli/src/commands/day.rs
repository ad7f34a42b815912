use chrono::NaiveDate;
use clap::Subcommand;
use commit_core::MAX_VIRTUAL_DAY;

use super::{open_tracker, parse_date, print_json, today_or, CmdResult};

#[derive(Subcommand)]
pub enum DayAction {
    /// Replace every task of a day with the given titles
    Set {
        /// Goal ID
        goal_id: String,
        /// Day number (1-based)
        #[arg(value_parser = clap::value_parser!(u32).range(1..=MAX_VIRTUAL_DAY as i64))]
        day: u32,
        /// New task titles; none clears the day
        titles: Vec<String>,
        /// Evaluate the streak as of this date instead of today
        #[arg(long, value_parser = parse_date)]
        today: Option<NaiveDate>,
    },
}

pub fn run(action: DayAction) -> CmdResult {
    let tracker = open_tracker()?;

    match action {
        DayAction::Set {
            goal_id,
            day,
            titles,
            today,
        } => {
            let goal = tracker.set_day_tasks(&goal_id, day, &titles, today_or(today))?;
            print_json(&goal)?;
        }
    }
    Ok(())
}
