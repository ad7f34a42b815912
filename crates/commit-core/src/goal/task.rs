//! Goal tasks and the `"Day <N>"` title convention.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

const DAY_PREFIX: &str = "Day ";
const SETUP_PREFIX: &str = "Setup:";

/// Highest virtual day a task may name, one hundred years of daily entries.
///
/// Larger numbers are treated as ordinary text so one malformed title cannot
/// stretch the calendar walk across the whole representable date range.
pub const MAX_VIRTUAL_DAY: u32 = 36_500;

/// A single checkable task belonging to a goal.
///
/// Day-based tasks carry their day in `virtual_day`. Records written before
/// that field existed only encode it in the title (`"Day 3: Run 2 miles"`),
/// so [`Task::day`] falls back to parsing the title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub virtual_day: Option<u32>,
}

impl Task {
    /// New incomplete task with a fresh id.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            completed: false,
            virtual_day: None,
        }
    }

    /// New incomplete task titled `"Day <day>: <text>"`.
    pub fn for_day(day: u32, text: &str) -> Self {
        Self {
            virtual_day: Some(day),
            ..Self::new(format!("{DAY_PREFIX}{day}: {text}"))
        }
    }

    /// Virtual day this task belongs to, if any.
    pub fn day(&self) -> Option<u32> {
        self.virtual_day
            .filter(|day| is_virtual_day(*day))
            .or_else(|| parse_day_prefix(&self.title))
    }

    /// Whether the title starts with `"Day <day>:"` or `"Day <day> "`.
    pub fn has_day_prefix(&self, day: u32) -> bool {
        let prefix = format!("{DAY_PREFIX}{day}");
        match self.title.strip_prefix(&prefix) {
            Some(rest) => rest.starts_with(':') || rest.starts_with(' '),
            None => false,
        }
    }

    pub fn is_setup(&self) -> bool {
        self.title.starts_with(SETUP_PREFIX)
    }

    pub fn toggle(&mut self) -> bool {
        self.completed = !self.completed;
        self.completed
    }
}

/// Whether `day` lies in `1..=MAX_VIRTUAL_DAY`.
pub fn is_virtual_day(day: u32) -> bool {
    (1..=MAX_VIRTUAL_DAY).contains(&day)
}

/// Parse the day number out of a `"Day <N>"` title prefix.
///
/// The number must be followed by `:`, whitespace, or the end of the title.
/// Day 0 and days past [`MAX_VIRTUAL_DAY`] are not days.
pub fn parse_day_prefix(title: &str) -> Option<u32> {
    let rest = title.strip_prefix(DAY_PREFIX)?;
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }
    let (digits, tail) = rest.split_at(digits_end);
    let terminated = tail.is_empty()
        || tail.starts_with(':')
        || tail.starts_with(char::is_whitespace);
    if !terminated {
        return None;
    }
    digits.parse::<u32>().ok().filter(|day| is_virtual_day(*day))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titled(title: &str) -> Task {
        Task {
            id: "t".to_string(),
            title: title.to_string(),
            completed: false,
            virtual_day: None,
        }
    }

    #[test]
    fn parses_colon_and_space_forms() {
        assert_eq!(parse_day_prefix("Day 3: Run 2 miles"), Some(3));
        assert_eq!(parse_day_prefix("Day 12 stretch"), Some(12));
        assert_eq!(parse_day_prefix("Day 7"), Some(7));
    }

    #[test]
    fn ignores_non_day_titles() {
        assert_eq!(parse_day_prefix("Setup: buy shoes"), None);
        assert_eq!(parse_day_prefix("day 3: lowercase"), None);
        assert_eq!(parse_day_prefix("Day x: nope"), None);
        assert_eq!(parse_day_prefix("Day 3x"), None);
        assert_eq!(parse_day_prefix("Day 0: zero"), None);
        assert_eq!(parse_day_prefix("Morning Walk"), None);
        assert_eq!(parse_day_prefix("Day 99999999999: overflow"), None);
    }

    #[test]
    fn day_numbers_past_the_cap_are_text() {
        assert_eq!(parse_day_prefix("Day 36500: last"), Some(MAX_VIRTUAL_DAY));
        assert_eq!(parse_day_prefix("Day 36501: too far"), None);
        assert_eq!(parse_day_prefix("Day 4000000000: x"), None);

        let mut task = titled("Day 2: Jog");
        task.virtual_day = Some(4_000_000_000);
        assert_eq!(task.day(), Some(2));
    }

    #[test]
    fn explicit_day_wins_over_title() {
        let mut task = titled("Day 3: Run");
        task.virtual_day = Some(5);
        assert_eq!(task.day(), Some(5));

        task.virtual_day = Some(0);
        assert_eq!(task.day(), Some(3));
    }

    #[test]
    fn prefix_match_does_not_bleed_into_longer_numbers() {
        assert!(titled("Day 2: A").has_day_prefix(2));
        assert!(titled("Day 2 A").has_day_prefix(2));
        assert!(!titled("Day 20: A").has_day_prefix(2));
        assert!(!titled("Day 2").has_day_prefix(2));
    }

    #[test]
    fn for_day_formats_title() {
        let task = Task::for_day(4, "Swim");
        assert_eq!(task.title, "Day 4: Swim");
        assert_eq!(task.virtual_day, Some(4));
        assert!(!task.completed);
        assert!(!task.id.is_empty());
    }

    #[test]
    fn legacy_record_without_virtual_day_still_loads() {
        let task: Task =
            serde_json::from_str(r#"{"id":"t1","title":"Day 1: Walk","completed":true}"#).unwrap();
        assert_eq!(task.virtual_day, None);
        assert_eq!(task.day(), Some(1));

        let json = serde_json::to_string(&task).unwrap();
        assert!(!json.contains("virtualDay"));
    }
}
