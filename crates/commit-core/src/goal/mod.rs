//! Goals: a start date, a task list and the user's rest days.
//!
//! `progress`, `streak` and `completed` are a cache of what the streak
//! engine derives from `tasks`, `start_date` and `skipped_dates`. Anything
//! that changes one of those three must call [`Goal::refresh`] (or
//! [`Goal::apply_stats`] with fresh stats) before the goal is persisted.

mod task;

pub use task::{is_virtual_day, parse_day_prefix, Task, MAX_VIRTUAL_DAY};

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::engine::{GoalStats, StreakEngine};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub title: String,
    /// Category tag such as "Fitness" or "Habits".
    pub domain: String,
    #[serde(with = "crate::dates::calendar_date")]
    pub start_date: NaiveDate,
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default, with = "crate::dates::date_set")]
    pub skipped_dates: BTreeSet<NaiveDate>,
    #[serde(default)]
    pub total_skips_allowed: u32,
    #[serde(default)]
    pub progress: u8,
    #[serde(default)]
    pub streak: u32,
    #[serde(default)]
    pub completed: bool,
}

impl Goal {
    pub fn new(title: impl Into<String>, domain: impl Into<String>, start_date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            domain: domain.into(),
            start_date,
            tasks: Vec::new(),
            skipped_dates: BTreeSet::new(),
            total_skips_allowed: 0,
            progress: 0,
            streak: 0,
            completed: false,
        }
    }

    pub fn with_tasks(mut self, tasks: Vec<Task>) -> Self {
        self.tasks = tasks;
        self
    }

    pub fn with_skips_allowed(mut self, skips: u32) -> Self {
        self.total_skips_allowed = skips;
        self
    }

    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn task_mut(&mut self, id: &str) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    pub fn is_skipped(&self, date: NaiveDate) -> bool {
        self.skipped_dates.contains(&date)
    }

    /// Record `date` as a rest day. Returns `false` if it already was one.
    ///
    /// Cached stats are left untouched.
    pub fn mark_skipped(&mut self, date: NaiveDate) -> bool {
        self.skipped_dates.insert(date)
    }

    /// The cached stats as last written.
    pub fn stats(&self) -> GoalStats {
        GoalStats {
            streak: self.streak,
            progress: self.progress,
            completed: self.completed,
        }
    }

    pub fn apply_stats(&mut self, stats: GoalStats) {
        self.streak = stats.streak;
        self.progress = stats.progress;
        self.completed = stats.completed;
    }

    /// Recompute the cached stats from the goal's own tasks.
    pub fn refresh(&mut self, engine: &StreakEngine, today: NaiveDate) -> GoalStats {
        let stats = engine.compute_stats(self, &self.tasks, today);
        self.apply_stats(stats);
        stats
    }
}
