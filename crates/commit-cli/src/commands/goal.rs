//! Goal management commands for CLI.

use chrono::NaiveDate;
use clap::Subcommand;
use commit_core::{Config, Goal, Task};

use super::{open_tracker, parse_date, print_json, today_or, CmdResult};

#[derive(Subcommand)]
pub enum GoalAction {
    /// Create a new goal
    Create {
        /// Goal title
        title: String,
        /// Category tag (default from config)
        #[arg(long)]
        domain: Option<String>,
        /// Start date, YYYY-MM-DD (default: today)
        #[arg(long, value_parser = parse_date)]
        start: Option<NaiveDate>,
        /// Rest days allowed (default from config)
        #[arg(long)]
        skips: Option<u32>,
        /// Setup task titles, added as "Setup: <text>"
        #[arg(long = "setup")]
        setup: Vec<String>,
    },
    /// List goals
    List,
    /// Show one goal
    Show {
        /// Goal ID
        id: String,
    },
    /// Delete a goal
    Delete {
        /// Goal ID
        id: String,
    },
    /// Add the starter goal when there are no goals yet
    Seed,
}

pub fn run(action: GoalAction) -> CmdResult {
    let tracker = open_tracker()?;
    let today = today_or(None);

    match action {
        GoalAction::Create {
            title,
            domain,
            start,
            skips,
            setup,
        } => {
            let config = Config::load()?;
            let domain = domain.unwrap_or(config.goals.default_domain);
            let goal = Goal::new(title, domain, start.unwrap_or(today))
                .with_skips_allowed(skips.unwrap_or(config.goals.default_skips_allowed))
                .with_tasks(
                    setup
                        .iter()
                        .map(|s| Task::new(format!("Setup: {}", s.trim())))
                        .collect(),
                );
            let goal = tracker.create_goal(goal, today)?;
            println!("Goal created: {}", goal.id);
            print_json(&goal)?;
        }
        GoalAction::List => {
            print_json(&tracker.goals()?)?;
        }
        GoalAction::Show { id } => {
            print_json(&tracker.goal(&id)?)?;
        }
        GoalAction::Delete { id } => {
            tracker.delete_goal(&id)?;
            println!("Goal deleted: {id}");
        }
        GoalAction::Seed => {
            if tracker.seed_if_empty(today)? {
                println!("seeded");
            } else {
                println!("goals already present");
            }
        }
    }
    Ok(())
}
