use chrono::NaiveDate;
use clap::Args;
use commit_core::dates::format_date;
use serde::Serialize;

use super::{open_tracker, parse_date, print_json, today_or, CmdResult};

#[derive(Args)]
pub struct StatsArgs {
    /// Goal ID
    goal_id: String,
    /// Evaluate as of this date instead of today
    #[arg(long, value_parser = parse_date)]
    today: Option<NaiveDate>,
}

#[derive(Serialize)]
struct StatsReport {
    streak: u32,
    progress: u8,
    completed: bool,
    completed_dates: Vec<String>,
}

pub fn run(args: StatsArgs) -> CmdResult {
    let tracker = open_tracker()?;
    let today = today_or(args.today);
    let goal = tracker.refresh(&args.goal_id, today)?;
    let mapping = tracker
        .engine()
        .map_calendar(goal.start_date, &goal.skipped_dates, &goal.tasks);

    print_json(&StatsReport {
        streak: goal.streak,
        progress: goal.progress,
        completed: goal.completed,
        completed_dates: mapping.completed_dates.into_iter().map(format_date).collect(),
    })
}
