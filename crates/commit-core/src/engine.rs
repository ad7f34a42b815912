//! Goal progress and streak engine.
//!
//! Tasks are grouped by virtual day, the virtual days are laid onto the
//! calendar starting at the goal's start date (rest days consume a calendar
//! date but not a virtual day), and the streak is counted backwards from
//! today over the resulting set of completed dates.
//!
//! Everything here is a pure function of `{tasks, start_date,
//! skipped_dates, today}`.
//!
//! # Usage
//! ```rust,ignore
//! use commit_core::{SkipPolicy, StreakEngine};
//!
//! let engine = StreakEngine::with_policy(SkipPolicy::Transparent);
//! let stats = engine.compute_stats(&goal, &goal.tasks, today);
//! goal.apply_stats(stats);
//! ```

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::goal::{Goal, Task};

/// Extra virtual days walked past the highest day found in task titles.
pub const LOOKAHEAD_DAYS: u32 = 10;

/// How a rest day is treated when the streak is counted backwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipPolicy {
    /// A rest day is not a completed date, so it ends the streak.
    #[default]
    Breaks,
    /// Rest days are stepped over: they neither count nor end the streak.
    Transparent,
}

/// Derived statistics for one goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GoalStats {
    pub streak: u32,
    /// 0..=100
    pub progress: u8,
    pub completed: bool,
}

/// Where virtual days landed on the calendar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalendarMapping {
    /// Calendar date for every virtual day that has tasks.
    pub day_dates: BTreeMap<u32, NaiveDate>,
    /// Calendar dates whose virtual day is fully completed.
    pub completed_dates: BTreeSet<NaiveDate>,
    /// Number of virtual days laid out.
    pub days_walked: u32,
}

impl CalendarMapping {
    pub fn date_of(&self, day: u32) -> Option<NaiveDate> {
        self.day_dates.get(&day).copied()
    }

    pub fn is_completed(&self, date: NaiveDate) -> bool {
        self.completed_dates.contains(&date)
    }
}

#[derive(Debug, Default, Clone, Copy)]
struct DayTally {
    total: usize,
    done: usize,
}

impl DayTally {
    fn is_complete(&self) -> bool {
        self.total > 0 && self.done == self.total
    }
}

/// Tasks sharing a day number land in the same group.
fn group_by_day(tasks: &[Task]) -> BTreeMap<u32, DayTally> {
    let mut groups: BTreeMap<u32, DayTally> = BTreeMap::new();
    for task in tasks {
        if let Some(day) = task.day() {
            let tally = groups.entry(day).or_default();
            tally.total += 1;
            if task.completed {
                tally.done += 1;
            }
        }
    }
    groups
}

/// Percentage of completed tasks, rounded half up.
///
/// Only a fully completed list reaches 100; 199 of 200 reports 99.
pub fn progress_percent(tasks: &[Task]) -> u8 {
    let total = tasks.len() as u64;
    if total == 0 {
        return 0;
    }
    let done = tasks.iter().filter(|t| t.completed).count() as u64;
    let rounded = (200 * done + total) / (2 * total);
    let capped = if done < total { rounded.min(99) } else { rounded };
    capped as u8
}

/// Stateless calculator for goal statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreakEngine {
    policy: SkipPolicy,
}

impl StreakEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: SkipPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> SkipPolicy {
        self.policy
    }

    /// Lay the goal's virtual days onto the calendar.
    ///
    /// The walk stops once `LOOKAHEAD_DAYS` virtual days past the highest
    /// task day have been placed, or when the calendar runs out.
    pub fn map_calendar(
        &self,
        start_date: NaiveDate,
        skipped_dates: &BTreeSet<NaiveDate>,
        tasks: &[Task],
    ) -> CalendarMapping {
        let groups = group_by_day(tasks);
        let max_day = groups.keys().next_back().copied().unwrap_or(0);
        let horizon = max_day.saturating_add(LOOKAHEAD_DAYS);

        let mut mapping = CalendarMapping::default();
        let mut day = 1u32;
        let mut cursor = Some(start_date);

        while day <= horizon {
            let Some(date) = cursor else { break };
            cursor = date.succ_opt();

            if skipped_dates.contains(&date) {
                continue;
            }

            if let Some(tally) = groups.get(&day) {
                mapping.day_dates.insert(day, date);
                if tally.is_complete() {
                    mapping.completed_dates.insert(date);
                }
            }
            mapping.days_walked = day;
            day += 1;
        }

        mapping
    }

    /// Consecutive completed dates ending today, or yesterday when today
    /// has not been completed yet.
    pub fn streak(
        &self,
        completed_dates: &BTreeSet<NaiveDate>,
        skipped_dates: &BTreeSet<NaiveDate>,
        today: NaiveDate,
    ) -> u32 {
        let mut cursor = if completed_dates.contains(&today) {
            Some(today)
        } else {
            today.pred_opt()
        };

        let mut streak = 0;
        while let Some(date) = cursor {
            if completed_dates.contains(&date) {
                streak += 1;
            } else if self.policy == SkipPolicy::Transparent && skipped_dates.contains(&date) {
                // rest day
            } else {
                break;
            }
            cursor = date.pred_opt();
        }
        streak
    }

    /// Derive `{streak, progress, completed}` for `goal` as if its task list
    /// were `tasks`.
    ///
    /// `tasks` is passed separately so callers can evaluate an edited task
    /// list before writing it back onto the goal.
    pub fn compute_stats(&self, goal: &Goal, tasks: &[Task], today: NaiveDate) -> GoalStats {
        let mapping = self.map_calendar(goal.start_date, &goal.skipped_dates, tasks);
        let streak = self.streak(&mapping.completed_dates, &goal.skipped_dates, today);
        let progress = progress_percent(tasks);

        GoalStats {
            streak,
            progress,
            completed: progress == 100,
        }
    }

    /// [`compute_stats`](Self::compute_stats) against the local clock.
    pub fn compute_stats_now(&self, goal: &Goal, tasks: &[Task]) -> GoalStats {
        self.compute_stats(goal, tasks, crate::dates::today())
    }
}
