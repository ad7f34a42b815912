//! Goal mutations that keep the cached stats current.
//!
//! The free functions edit a goal in memory and recompute its stats.
//! [`GoalTracker`] wraps them in a load → mutate → save cycle over a
//! [`GoalStore`].

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, info};

use crate::editor::replace_day_tasks;
use crate::engine::{GoalStats, StreakEngine};
use crate::error::{CoreError, Result, ValidationError};
use crate::goal::{is_virtual_day, Goal};
use crate::storage::{AppState, GoalStore};

/// Result of flipping one task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToggleOutcome {
    /// The task's new completion flag.
    pub task_completed: bool,
    pub stats: GoalStats,
    /// The goal went from not completed to completed with this toggle.
    pub just_completed: bool,
}

/// Flip a task's completion flag and recompute the goal's stats.
pub fn toggle_task(
    goal: &mut Goal,
    task_id: &str,
    engine: &StreakEngine,
    today: NaiveDate,
) -> Result<ToggleOutcome> {
    let was_completed = goal.completed;
    let task = goal
        .task_mut(task_id)
        .ok_or_else(|| CoreError::task_not_found(task_id))?;
    let task_completed = task.toggle();

    let stats = goal.refresh(engine, today);
    Ok(ToggleOutcome {
        task_completed,
        stats,
        just_completed: stats.completed && !was_completed,
    })
}

/// Replace one day's tasks and recompute the goal's stats.
///
/// # Errors
/// Day numbers outside `1..=MAX_VIRTUAL_DAY` and blank titles are rejected.
pub fn set_day_tasks<S: AsRef<str>>(
    goal: &mut Goal,
    day: u32,
    titles: &[S],
    engine: &StreakEngine,
    today: NaiveDate,
) -> Result<GoalStats> {
    if !is_virtual_day(day) {
        return Err(ValidationError::InvalidDay { day }.into());
    }
    if titles.iter().any(|t| t.as_ref().trim().is_empty()) {
        return Err(ValidationError::EmptyTitle.into());
    }
    goal.tasks = replace_day_tasks(goal, day, titles.iter().map(|t| t.as_ref().trim()));
    Ok(goal.refresh(engine, today))
}

/// Record a rest day and recompute the goal's stats.
///
/// Returns the fresh stats and whether the date was newly added.
pub fn skip_day(
    goal: &mut Goal,
    date: NaiveDate,
    engine: &StreakEngine,
    today: NaiveDate,
) -> (GoalStats, bool) {
    let added = goal.mark_skipped(date);
    (goal.refresh(engine, today), added)
}

/// Applies goal mutations against a store.
pub struct GoalTracker<S> {
    store: S,
    engine: StreakEngine,
}

impl<S: GoalStore> GoalTracker<S> {
    pub fn new(store: S, engine: StreakEngine) -> Self {
        Self { store, engine }
    }

    pub fn engine(&self) -> &StreakEngine {
        &self.engine
    }

    pub fn goals(&self) -> Result<Vec<Goal>> {
        Ok(self.store.load()?.goals)
    }

    pub fn goal(&self, id: &str) -> Result<Goal> {
        self.store
            .load()?
            .goal(id)
            .cloned()
            .ok_or_else(|| CoreError::goal_not_found(id))
    }

    /// Store a new goal with fresh stats.
    pub fn create_goal(&self, mut goal: Goal, today: NaiveDate) -> Result<Goal> {
        goal.refresh(&self.engine, today);
        self.modify(|state| {
            state.add_goal(goal.clone());
            Ok(())
        })?;
        info!(goal_id = %goal.id, title = %goal.title, "goal created");
        Ok(goal)
    }

    pub fn delete_goal(&self, id: &str) -> Result<()> {
        self.modify(|state| {
            if state.delete_goal(id) {
                Ok(())
            } else {
                Err(CoreError::goal_not_found(id))
            }
        })?;
        info!(goal_id = %id, "goal deleted");
        Ok(())
    }

    /// Seed the store when it holds no goals. Returns whether it seeded.
    pub fn seed_if_empty(&self, today: NaiveDate) -> Result<bool> {
        let mut state = self.store.load()?;
        if !state.goals.is_empty() {
            return Ok(false);
        }
        let mut seeded = AppState::seeded(today);
        for goal in &mut seeded.goals {
            goal.refresh(&self.engine, today);
        }
        state.goals = seeded.goals;
        self.store.save(&state)?;
        info!("seeded empty store");
        Ok(true)
    }

    pub fn toggle_task(&self, goal_id: &str, task_id: &str, today: NaiveDate) -> Result<ToggleOutcome> {
        let engine = self.engine;
        let outcome = self.modify_goal(goal_id, |goal| toggle_task(goal, task_id, &engine, today))?;
        debug!(
            goal_id,
            task_id,
            streak = outcome.stats.streak,
            progress = outcome.stats.progress,
            "task toggled"
        );
        if outcome.just_completed {
            info!(goal_id, "goal completed");
        }
        Ok(outcome)
    }

    pub fn set_day_tasks<T: AsRef<str>>(
        &self,
        goal_id: &str,
        day: u32,
        titles: &[T],
        today: NaiveDate,
    ) -> Result<Goal> {
        let engine = self.engine;
        let goal = self.modify_goal(goal_id, |goal| {
            set_day_tasks(goal, day, titles, &engine, today)?;
            Ok(goal.clone())
        })?;
        debug!(goal_id, day, count = titles.len(), "day tasks replaced");
        Ok(goal)
    }

    pub fn skip_day(&self, goal_id: &str, date: NaiveDate, today: NaiveDate) -> Result<(GoalStats, bool)> {
        let engine = self.engine;
        let result = self.modify_goal(goal_id, |goal| Ok(skip_day(goal, date, &engine, today)))?;
        debug!(goal_id, %date, added = result.1, "rest day recorded");
        Ok(result)
    }

    /// Recompute a goal's cached stats as of `today` and persist them.
    pub fn refresh(&self, goal_id: &str, today: NaiveDate) -> Result<Goal> {
        let engine = self.engine;
        self.modify_goal(goal_id, |goal| {
            goal.refresh(&engine, today);
            Ok(goal.clone())
        })
    }

    fn modify<T>(&self, f: impl FnOnce(&mut AppState) -> Result<T>) -> Result<T> {
        let mut state = self.store.load()?;
        let out = f(&mut state)?;
        self.store.save(&state)?;
        Ok(out)
    }

    fn modify_goal<T>(&self, goal_id: &str, f: impl FnOnce(&mut Goal) -> Result<T>) -> Result<T> {
        self.modify(|state| f(state.goal_mut(goal_id)?))
    }
}
