//! The persisted application document.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::goal::{Goal, Task};

pub const STATE_VERSION: u32 = 2;

/// Everything the goal store persists, as one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub goals: Vec<Goal>,
}

fn default_version() -> u32 {
    STATE_VERSION
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            version: STATE_VERSION,
            goals: Vec::new(),
        }
    }
}

impl AppState {
    /// A starter goal for an empty store.
    pub fn seeded(today: NaiveDate) -> Self {
        let mut walk = Goal::new("Walk 10,000 Steps Daily", "Fitness", today)
            .with_skips_allowed(1)
            .with_tasks(vec![
                Task::new("Setup: Pick a walking route"),
                Task::for_day(1, "Morning walk"),
                Task::for_day(2, "Morning walk"),
                Task::for_day(3, "Evening walk"),
            ]);
        walk.id = "1".to_string();
        Self {
            version: STATE_VERSION,
            goals: vec![walk],
        }
    }

    pub fn goal(&self, id: &str) -> Option<&Goal> {
        self.goals.iter().find(|g| g.id == id)
    }

    pub fn goal_mut(&mut self, id: &str) -> Result<&mut Goal> {
        self.goals
            .iter_mut()
            .find(|g| g.id == id)
            .ok_or_else(|| CoreError::goal_not_found(id))
    }

    /// Newest goals are listed first.
    pub fn add_goal(&mut self, goal: Goal) {
        self.goals.insert(0, goal);
    }

    /// Replace the stored goal with the same id.
    pub fn update_goal(&mut self, goal: Goal) -> Result<()> {
        let slot = self.goal_mut(&goal.id)?;
        *slot = goal;
        Ok(())
    }

    /// Returns whether a goal was removed.
    pub fn delete_goal(&mut self, id: &str) -> bool {
        let before = self.goals.len();
        self.goals.retain(|g| g.id != id);
        self.goals.len() != before
    }
}
