//! Rest-day registration.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::goal::Goal;

/// The goal's skip set with `date` added.
///
/// Inserting a date that is already present is a no-op. The date is not
/// checked against the goal's active window.
pub fn mark_skipped(goal: &Goal, date: NaiveDate) -> BTreeSet<NaiveDate> {
    let mut dates = goal.skipped_dates.clone();
    dates.insert(date);
    dates
}

/// Rest days still available under `total_skips_allowed`.
pub fn skips_remaining(goal: &Goal) -> u32 {
    let used = u32::try_from(goal.skipped_dates.len()).unwrap_or(u32::MAX);
    goal.total_skips_allowed.saturating_sub(used)
}

/// Rest days that fall on or after the start date and strictly before `date`.
pub fn skips_before(goal: &Goal, date: NaiveDate) -> usize {
    if date <= goal.start_date {
        return 0;
    }
    goal.skipped_dates.range(goal.start_date..date).count()
}
