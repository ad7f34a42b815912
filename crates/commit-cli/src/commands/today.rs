use chrono::NaiveDate;
use clap::Args;
use commit_core::todays_actions;

use super::{open_tracker, parse_date, print_json, today_or, CmdResult};

#[derive(Args)]
pub struct TodayArgs {
    /// Plan for this date instead of today
    #[arg(long, value_parser = parse_date)]
    today: Option<NaiveDate>,
}

pub fn run(args: TodayArgs) -> CmdResult {
    let tracker = open_tracker()?;
    let goals = tracker.goals()?;
    print_json(&todays_actions(&goals, today_or(args.today)))
}
