use crate::icons::CLOCK;
use chrono::{DateTime, Local};

/// `<clock> Mon Jan 02 15:04` style fragment for the tick's wall-clock time.
pub fn render(now: DateTime<Local>, format: &str) -> String {
    format!("{CLOCK} {}", now.format(format))
}
