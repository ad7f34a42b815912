//! # Commit Core Library
//!
//! Core logic for the Commit habit tracker: users commit to goals, work
//! through day-by-day tasks, and build streaks. The CLI is a thin layer over
//! this crate.
//!
//! ## Architecture
//!
//! - **Streak Engine**: pure derivation of streak, progress and completion
//!   from a goal's tasks, start date and rest days
//! - **Editor / Skip**: day re-slotting and rest-day registration
//! - **Planner**: which task a goal wants done today
//! - **Storage**: a `GoalStore` seam with SQLite and in-memory backends, plus
//!   TOML configuration
//!
//! ## Key Components
//!
//! - [`StreakEngine`]: stats calculator
//! - [`Goal`] / [`Task`]: the persisted records
//! - [`GoalTracker`]: load, mutate, recompute, save
//! - [`Config`]: application configuration

pub mod dates;
pub mod editor;
pub mod engine;
pub mod error;
pub mod goal;
pub mod planner;
pub mod skip;
pub mod storage;
pub mod tracker;

pub use editor::replace_day_tasks;
pub use engine::{CalendarMapping, GoalStats, SkipPolicy, StreakEngine, LOOKAHEAD_DAYS};
pub use error::{ConfigError, CoreError, StoreError, ValidationError};
pub use goal::{Goal, Task, MAX_VIRTUAL_DAY};
pub use planner::{todays_action, todays_actions, ActionKind, TodayAction};
pub use skip::{mark_skipped, skips_remaining};
pub use storage::{AppState, Config, GoalStore, MemoryStore, SqliteStore};
pub use tracker::{GoalTracker, ToggleOutcome};
