// Failure reasons for data sources (files under /proc and /sys, external commands).

use std::path::PathBuf;
use std::time::Duration;

/// Why a sampler (or the publisher) could not produce its value this tick.
///
/// Every variant ends up as the sampler's static fallback fragment; the reason
/// is only ever logged.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// A file or directory could not be opened or read.
    #[error("failed to read {path}: {source}")]
    Unavailable {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Content was present but did not have the expected shape.
    #[error("failed to parse {what}: {detail}")]
    Parse { what: &'static str, detail: String },

    /// A scan ended before every required field was seen.
    #[error("incomplete {what}: missing {missing}")]
    Incomplete {
        what: &'static str,
        missing: String,
    },

    /// No battery reported a non-zero full capacity.
    #[error("no readable battery")]
    NoBattery,

    #[error("empty command line")]
    EmptyCommand,

    #[error("failed to spawn {command}: {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },

    #[error("{command} exited with status {code:?}")]
    ExitStatus { command: String, code: Option<i32> },

    #[error("{command} timed out after {after:?}")]
    Timeout { command: String, after: Duration },

    /// Command output did not contain the expected pattern.
    #[error("no {what} in output of {command}")]
    NoMatch {
        command: &'static str,
        what: &'static str,
    },
}

impl SourceError {
    pub(crate) fn unavailable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Unavailable {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn parse(what: &'static str, detail: impl Into<String>) -> Self {
        Self::Parse {
            what,
            detail: detail.into(),
        }
    }
}
