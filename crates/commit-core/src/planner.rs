//! Picks the one task a goal wants the user to act on today.
//!
//! Open setup tasks come first regardless of date. Otherwise the goal's
//! virtual day for today is worked out the same way the streak engine lays
//! days onto the calendar, and the first open task of that day is offered.

use chrono::NaiveDate;
use serde::Serialize;

use crate::dates::days_between;
use crate::goal::{Goal, Task};
use crate::skip::skips_before;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "day", rename_all = "snake_case")]
pub enum ActionKind {
    Setup,
    Day(u32),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TodayAction {
    pub goal_id: String,
    pub goal_title: String,
    pub kind: ActionKind,
    pub task: Task,
}

/// Virtual day that falls on `today`.
///
/// `None` before the goal starts and on rest days.
pub fn effective_day(goal: &Goal, today: NaiveDate) -> Option<u32> {
    if today < goal.start_date || goal.is_skipped(today) {
        return None;
    }
    let raw = days_between(goal.start_date, today) + 1;
    let skips = i64::try_from(skips_before(goal, today)).ok()?;
    u32::try_from(raw - skips).ok()
}

pub fn todays_action(goal: &Goal, today: NaiveDate) -> Option<TodayAction> {
    let action = |kind, task: &Task| TodayAction {
        goal_id: goal.id.clone(),
        goal_title: goal.title.clone(),
        kind,
        task: task.clone(),
    };

    if let Some(setup) = goal.tasks.iter().find(|t| t.is_setup() && !t.completed) {
        return Some(action(ActionKind::Setup, setup));
    }

    let day = effective_day(goal, today)?;
    goal.tasks
        .iter()
        .find(|t| !t.completed && t.day() == Some(day))
        .map(|t| action(ActionKind::Day(day), t))
}

/// Today's action for every goal that has one, in goal order.
pub fn todays_actions<'a, I>(goals: I, today: NaiveDate) -> Vec<TodayAction>
where
    I: IntoIterator<Item = &'a Goal>,
{
    goals
        .into_iter()
        .filter_map(|g| todays_action(g, today))
        .collect()
}
