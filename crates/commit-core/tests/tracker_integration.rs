//! Integration tests for the goal tracker over the SQLite store.
//!
//! Exercises the full toggle → recompute → persist cycle and checks that a
//! reopened store sees the cached stats the tracker wrote.

use chrono::NaiveDate;
use commit_core::{
    todays_action, ActionKind, Goal, GoalStore, GoalTracker, SkipPolicy, SqliteStore,
    StreakEngine, Task,
};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn running_goal() -> Goal {
    let mut goal = Goal::new("Couch to 5k", "Fitness", d(2026, 1, 1))
        .with_skips_allowed(2)
        .with_tasks(vec![
            Task::new("Setup: Buy running shoes"),
            Task::for_day(1, "Walk 20 minutes"),
            Task::for_day(2, "Jog 5 minutes"),
            Task::for_day(2, "Stretch"),
            Task::for_day(3, "Jog 10 minutes"),
        ]);
    goal.id = "c25k".to_string();
    goal
}

fn task_id(goal: &Goal, title: &str) -> String {
    goal.tasks
        .iter()
        .find(|t| t.title == title)
        .map(|t| t.id.clone())
        .unwrap()
}

#[test]
fn test_full_week_workflow() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("commit.db");
    let tracker = GoalTracker::new(SqliteStore::open_at(&path).unwrap(), StreakEngine::new());
    let goal = tracker.create_goal(running_goal(), d(2026, 1, 1)).unwrap();

    let setup = task_id(&goal, "Setup: Buy running shoes");
    let action = todays_action(&goal, d(2026, 1, 1)).unwrap();
    assert_eq!(action.kind, ActionKind::Setup);
    assert_eq!(action.task.id, setup);

    tracker.toggle_task("c25k", &setup, d(2026, 1, 1)).unwrap();
    let day1 = task_id(&goal, "Day 1: Walk 20 minutes");
    let outcome = tracker.toggle_task("c25k", &day1, d(2026, 1, 1)).unwrap();
    assert_eq!(outcome.stats.streak, 1);
    assert_eq!(outcome.stats.progress, 40);
    assert!(!outcome.just_completed);

    // Jan 2 is a rest day, so Day 2 happens on Jan 3.
    let (stats, added) = tracker.skip_day("c25k", d(2026, 1, 2), d(2026, 1, 2)).unwrap();
    assert!(added);
    assert_eq!(stats.streak, 1);

    let goal = tracker.goal("c25k").unwrap();
    let action = todays_action(&goal, d(2026, 1, 3)).unwrap();
    assert_eq!(action.kind, ActionKind::Day(2));

    for title in ["Day 2: Jog 5 minutes", "Day 2: Stretch"] {
        tracker.toggle_task("c25k", &task_id(&goal, title), d(2026, 1, 3)).unwrap();
    }
    let day3 = task_id(&goal, "Day 3: Jog 10 minutes");
    let outcome = tracker.toggle_task("c25k", &day3, d(2026, 1, 4)).unwrap();
    assert!(outcome.just_completed);
    assert_eq!(outcome.stats.progress, 100);
    // Rest day on Jan 2 ends the count under the default policy.
    assert_eq!(outcome.stats.streak, 2);

    drop(tracker);
    let reopened = SqliteStore::open_at(&path).unwrap();
    let stored = reopened.load().unwrap();
    let goal = stored.goal("c25k").unwrap();
    assert!(goal.completed);
    assert_eq!(goal.streak, 2);
    assert_eq!(goal.skipped_dates.len(), 1);

    let transparent = GoalTracker::new(reopened, StreakEngine::with_policy(SkipPolicy::Transparent));
    assert_eq!(transparent.refresh("c25k", d(2026, 1, 4)).unwrap().streak, 3);
}

#[test]
fn test_reslot_day_then_toggle() {
    let tracker = GoalTracker::new(SqliteStore::open_memory().unwrap(), StreakEngine::new());
    tracker.create_goal(running_goal(), d(2026, 1, 1)).unwrap();

    let goal = tracker
        .set_day_tasks("c25k", 2, &["Intervals", "Cool down"], d(2026, 1, 1))
        .unwrap();
    let day2: Vec<_> = goal.tasks.iter().filter(|t| t.day() == Some(2)).collect();
    assert_eq!(day2.len(), 2);
    assert_eq!(day2[0].title, "Day 2: Intervals");
    assert_eq!(goal.tasks.len(), 5);
    assert_eq!(goal.progress, 0);

    let stored = tracker.goal("c25k").unwrap();
    assert_eq!(stored, goal);
}

#[test]
fn test_delete_goal() {
    let tracker = GoalTracker::new(SqliteStore::open_memory().unwrap(), StreakEngine::new());
    tracker.create_goal(running_goal(), d(2026, 1, 1)).unwrap();
    tracker.delete_goal("c25k").unwrap();
    assert!(tracker.goals().unwrap().is_empty());
    assert!(tracker.delete_goal("c25k").is_err());
}
