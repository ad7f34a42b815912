//! Re-slotting one virtual day's tasks.

use crate::goal::{Goal, Task};

/// Replace the tasks of virtual day `day` with one fresh task per title.
///
/// Removes every task titled `"Day <day>:..."` or `"Day <day> ..."` (and any
/// task explicitly assigned to `day`), keeps the remaining tasks in their
/// original order, then appends the new ones as `"Day <day>: <text>"`, all
/// incomplete. Stats are not recomputed here.
pub fn replace_day_tasks<I, S>(goal: &Goal, day: u32, new_titles: I) -> Vec<Task>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut tasks: Vec<Task> = goal
        .tasks
        .iter()
        .filter(|t| !belongs_to_day(t, day))
        .cloned()
        .collect();

    tasks.extend(
        new_titles
            .into_iter()
            .map(|text| Task::for_day(day, text.as_ref())),
    );
    tasks
}

fn belongs_to_day(task: &Task, day: u32) -> bool {
    task.has_day_prefix(day) || task.virtual_day == Some(day)
}
