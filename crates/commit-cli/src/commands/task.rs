//! Task completion commands for CLI.

use chrono::NaiveDate;
use clap::Subcommand;

use super::{open_tracker, parse_date, print_json, today_or, CmdResult};

#[derive(Subcommand)]
pub enum TaskAction {
    /// Flip a task between done and not done
    Toggle {
        /// Goal ID
        goal_id: String,
        /// Task ID
        task_id: String,
        /// Evaluate the streak as of this date instead of today
        #[arg(long, value_parser = parse_date)]
        today: Option<NaiveDate>,
    },
}

pub fn run(action: TaskAction) -> CmdResult {
    let tracker = open_tracker()?;

    match action {
        TaskAction::Toggle {
            goal_id,
            task_id,
            today,
        } => {
            let outcome = tracker.toggle_task(&goal_id, &task_id, today_or(today))?;
            if outcome.just_completed {
                println!("Goal completed!");
            }
            print_json(&outcome)?;
        }
    }
    Ok(())
}
