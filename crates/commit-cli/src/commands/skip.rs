use chrono::NaiveDate;
use clap::Subcommand;
use commit_core::skips_remaining;
use serde_json::json;

use super::{open_tracker, parse_date, print_json, today_or, CmdResult};

#[derive(Subcommand)]
pub enum SkipAction {
    /// Mark a date as a rest day
    Add {
        /// Goal ID
        goal_id: String,
        /// Date to rest, YYYY-MM-DD
        #[arg(value_parser = parse_date)]
        date: NaiveDate,
        /// Evaluate the streak as of this date instead of today
        #[arg(long, value_parser = parse_date)]
        today: Option<NaiveDate>,
    },
    /// Rest days left under the goal's allowance
    Remaining {
        /// Goal ID
        goal_id: String,
    },
}

pub fn run(action: SkipAction) -> CmdResult {
    let tracker = open_tracker()?;

    match action {
        SkipAction::Add {
            goal_id,
            date,
            today,
        } => {
            let (stats, added) = tracker.skip_day(&goal_id, date, today_or(today))?;
            if !added {
                println!("already a rest day");
            }
            print_json(&stats)?;
        }
        SkipAction::Remaining { goal_id } => {
            let goal = tracker.goal(&goal_id)?;
            print_json(&json!({
                "allowed": goal.total_skips_allowed,
                "used": goal.skipped_dates.len(),
                "remaining": skips_remaining(&goal),
            }))?;
        }
    }
    Ok(())
}
