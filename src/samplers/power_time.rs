// Time until the battery is empty (or full) as reported by `acpi -b`.

use crate::command::CommandRunner;
use crate::error::SourceError;
use regex::Regex;
use std::sync::LazyLock;

static CLOCK_TIME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]{2}:[0-9]{2}):[0-9]{2}").expect("clock time pattern is valid")
});

pub async fn sample(runner: &impl CommandRunner, argv: &[String]) -> Result<String, SourceError> {
    let output = runner.run(argv).await?;
    parse(&output).map(str::to_string)
}

pub fn fallback() -> String {
    "unknown".to_string()
}

/// `HH:MM` of the first line carrying an `HH:MM:SS` time, using the last
/// such time on that line.
///
/// ```text
/// Battery 0: Discharging, 85%, 02:31:45 remaining
/// ```
pub fn parse(output: &str) -> Result<&str, SourceError> {
    output
        .lines()
        .find_map(|line| CLOCK_TIME.captures_iter(line).last())
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .ok_or(SourceError::NoMatch {
            command: "acpi",
            what: "remaining time",
        })
}
