//! Integration tests for the streak engine.
//!
//! Covers calendar mapping across rest days, the grace day, both skip
//! policies, bounded lookahead and day re-slotting through the public API.

use chrono::NaiveDate;
use commit_core::{
    mark_skipped, replace_day_tasks, Goal, SkipPolicy, StreakEngine, Task, LOOKAHEAD_DAYS,
};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn task(title: &str, completed: bool) -> Task {
    Task {
        id: title.to_string(),
        title: title.to_string(),
        completed,
        virtual_day: None,
    }
}

fn three_day_goal() -> Goal {
    Goal::new("Run", "Fitness", d(2026, 1, 1)).with_tasks(vec![
        task("Day 1: Walk", true),
        task("Day 2: Jog", true),
        task("Day 3: Run", true),
        task("Day 4: Rest walk", false),
    ])
}

#[test]
fn test_same_inputs_same_stats() {
    let goal = three_day_goal();
    let engine = StreakEngine::new();
    let first = engine.compute_stats(&goal, &goal.tasks, d(2026, 1, 3));
    let second = engine.compute_stats(&goal, &goal.tasks, d(2026, 1, 3));
    assert_eq!(first, second);
}

#[test]
fn test_streak_counts_through_today() {
    let goal = three_day_goal();
    let stats = StreakEngine::new().compute_stats(&goal, &goal.tasks, d(2026, 1, 3));
    assert_eq!(stats.streak, 3);
    assert_eq!(stats.progress, 75);
    assert!(!stats.completed);
}

#[test]
fn test_grace_day_keeps_streak_alive() {
    let goal = three_day_goal();
    let stats = StreakEngine::new().compute_stats(&goal, &goal.tasks, d(2026, 1, 4));
    assert_eq!(stats.streak, 3);
}

#[test]
fn test_second_missed_day_ends_streak() {
    let goal = three_day_goal();
    let stats = StreakEngine::new().compute_stats(&goal, &goal.tasks, d(2026, 1, 5));
    assert_eq!(stats.streak, 0);
}

#[test]
fn test_streak_before_start_is_zero() {
    let goal = three_day_goal();
    let stats = StreakEngine::new().compute_stats(&goal, &goal.tasks, d(2025, 12, 1));
    assert_eq!(stats.streak, 0);
}

#[test]
fn test_evaluates_the_passed_task_list() {
    let goal = three_day_goal();
    let mut edited = goal.tasks.clone();
    edited[3].completed = true;
    let stats = StreakEngine::new().compute_stats(&goal, &edited, d(2026, 1, 4));
    assert_eq!(stats.streak, 4);
    assert!(stats.completed);
    // The goal's own list is untouched.
    assert!(!goal.tasks[3].completed);
}

#[test]
fn test_skipped_date_is_never_completed() {
    let mut goal = three_day_goal();
    goal.skipped_dates = mark_skipped(&goal, d(2026, 1, 2));
    let mapping = StreakEngine::new().map_calendar(goal.start_date, &goal.skipped_dates, &goal.tasks);
    assert!(!mapping.is_completed(d(2026, 1, 2)));
    assert_eq!(mapping.date_of(2), Some(d(2026, 1, 3)));
    assert_eq!(mapping.date_of(3), Some(d(2026, 1, 4)));
}

#[test]
fn test_skip_on_start_date_moves_day_one() {
    let mut goal = Goal::new("Read", "Learning", d(2026, 1, 1))
        .with_tasks(vec![task("Day 1: Chapter one", true)]);
    goal.mark_skipped(d(2026, 1, 1));

    let mapping = StreakEngine::new().map_calendar(goal.start_date, &goal.skipped_dates, &goal.tasks);
    let first_open_date = d(2026, 1, 2);
    assert_eq!(mapping.date_of(1), Some(first_open_date));
    assert_eq!(mapping.completed_dates.iter().copied().collect::<Vec<_>>(), vec![first_open_date]);

    let stats = StreakEngine::new().compute_stats(&goal, &goal.tasks, first_open_date);
    assert_eq!(stats.streak, 1);
}

#[test]
fn test_skip_policy_breaks_streak_at_rest_day() {
    let mut goal = three_day_goal();
    goal.mark_skipped(d(2026, 1, 2));
    // Day 1 -> Jan 1, rest Jan 2, Day 2 -> Jan 3, Day 3 -> Jan 4
    let stats = StreakEngine::with_policy(SkipPolicy::Breaks).compute_stats(&goal, &goal.tasks, d(2026, 1, 4));
    assert_eq!(stats.streak, 2);
}

#[test]
fn test_skip_policy_transparent_spans_rest_day() {
    let mut goal = three_day_goal();
    goal.mark_skipped(d(2026, 1, 2));
    let stats = StreakEngine::with_policy(SkipPolicy::Transparent)
        .compute_stats(&goal, &goal.tasks, d(2026, 1, 4));
    assert_eq!(stats.streak, 3);
}

#[test]
fn test_transparent_rest_day_as_grace_day() {
    let mut goal = three_day_goal();
    // Day 4 lands on Jan 5 once Jan 4 is a rest day.
    goal.mark_skipped(d(2026, 1, 4));
    let engine = StreakEngine::with_policy(SkipPolicy::Transparent);
    assert_eq!(engine.compute_stats(&goal, &goal.tasks, d(2026, 1, 5)).streak, 3);
    let engine = StreakEngine::with_policy(SkipPolicy::Breaks);
    assert_eq!(engine.compute_stats(&goal, &goal.tasks, d(2026, 1, 5)).streak, 0);
}

#[test]
fn test_oversized_day_number_does_not_stretch_walk() {
    let goal = Goal::new("Typo", "Habits", d(2026, 1, 1)).with_tasks(vec![
        task("Day 1: Walk", true),
        task("Day 4000000000: x", false),
    ]);
    let engine = StreakEngine::new();

    let mapping = engine.map_calendar(goal.start_date, &goal.skipped_dates, &goal.tasks);
    assert_eq!(mapping.days_walked, 1 + LOOKAHEAD_DAYS);

    let stats = engine.compute_stats(&goal, &goal.tasks, d(2026, 1, 1));
    assert_eq!(stats.streak, 1);
    assert_eq!(stats.progress, 50);
}

#[test]
fn test_distant_day_terminates_within_lookahead() {
    let goal = Goal::new("Marathon", "Fitness", d(2026, 1, 1))
        .with_tasks(vec![task("Day 500: Race day", false)]);
    let engine = StreakEngine::new();

    let mapping = engine.map_calendar(goal.start_date, &goal.skipped_dates, &goal.tasks);
    assert_eq!(mapping.days_walked, 500 + LOOKAHEAD_DAYS);
    assert_eq!(mapping.date_of(500), Some(d(2026, 1, 1) + chrono::Days::new(499)));
    assert!(mapping.completed_dates.is_empty());

    let stats = engine.compute_stats(&goal, &goal.tasks, d(2027, 6, 1));
    assert_eq!(stats.streak, 0);
    assert_eq!(stats.progress, 0);
}

#[test]
fn test_no_day_tasks_still_walks_lookahead() {
    let goal = Goal::new("Journal", "Habits", d(2026, 1, 1))
        .with_tasks(vec![task("Setup: Buy a notebook", true)]);
    let mapping = StreakEngine::new().map_calendar(goal.start_date, &goal.skipped_dates, &goal.tasks);
    assert_eq!(mapping.days_walked, LOOKAHEAD_DAYS);
    assert!(mapping.day_dates.is_empty());
}

#[test]
fn test_replace_day_two_only() {
    let goal = Goal::new("Run", "Fitness", d(2026, 1, 1)).with_tasks(vec![
        task("Day 1: Walk", true),
        task("Day 2: Jog", true),
        task("Day 2 Stretch", true),
        task("Day 22: Long run", false),
        task("Setup: Shoes", true),
    ]);

    let tasks = replace_day_tasks(&goal, 2, ["A", "B"]);

    let kept: Vec<_> = tasks.iter().take(3).map(|t| t.title.as_str()).collect();
    assert_eq!(kept, vec!["Day 1: Walk", "Day 22: Long run", "Setup: Shoes"]);
    let added: Vec<_> = tasks[3..].iter().map(|t| (t.title.as_str(), t.completed)).collect();
    assert_eq!(added, vec![("Day 2: A", false), ("Day 2: B", false)]);
}

#[test]
fn test_replaced_day_is_reopened_for_streak() {
    let mut goal = three_day_goal();
    goal.tasks = replace_day_tasks(&goal, 2, ["Hill sprints"]);
    let stats = StreakEngine::new().compute_stats(&goal, &goal.tasks, d(2026, 1, 3));
    // Day 2 is open again, so only Day 3 counts.
    assert_eq!(stats.streak, 1);
}
