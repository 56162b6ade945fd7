// Memory used by applications, from /proc/meminfo.

use super::linux::read_file;
use crate::error::SourceError;
use crate::icons::MEMORY;
use std::path::Path;

const TOTAL: u8 = 1 << 0;
const FREE: u8 = 1 << 1;
const BUFFERS: u8 = 1 << 2;
const CACHED: u8 = 1 << 3;
const ALL: u8 = TOTAL | FREE | BUFFERS | CACHED;

const KIB_PER_GIB: f64 = 1024.0 * 1024.0;

/// Memory figures in kB as reported by the kernel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MemoryUsage {
    /// `MemTotal - MemFree - Buffers - Cached`
    pub used_kb: f64,
    pub total_kb: f64,
}

impl MemoryUsage {
    pub fn used_gb(&self) -> f64 {
        self.used_kb / KIB_PER_GIB
    }

    pub fn total_gb(&self) -> f64 {
        self.total_kb / KIB_PER_GIB
    }
}

pub fn sample(meminfo: &Path) -> Result<String, SourceError> {
    let content = read_file(meminfo)?;
    let usage = parse(&content)?;
    Ok(format!(
        "{MEMORY} {:.2}/{:.2}GB",
        usage.used_gb(),
        usage.total_gb()
    ))
}

pub fn fallback() -> String {
    format!("{MEMORY}ERR")
}

/// Scans `<name> <number> [unit]` lines until the four fields are seen.
/// Every line scanned must have that shape.
pub fn parse(content: &str) -> Result<MemoryUsage, SourceError> {
    let mut seen = 0u8;
    let mut used = 0.0;
    let mut total = 0.0;

    for line in content.lines() {
        if seen == ALL {
            break;
        }
        let mut tokens = line.split_whitespace();
        let (Some(name), Some(value)) = (tokens.next(), tokens.next()) else {
            return Err(SourceError::parse("meminfo", format!("{line:?}")));
        };
        let value: f64 = value
            .parse()
            .map_err(|e| SourceError::parse("meminfo", format!("{line:?}: {e}")))?;

        match name {
            "MemTotal:" => {
                total = value;
                used += value;
                seen |= TOTAL;
            }
            "MemFree:" => {
                used -= value;
                seen |= FREE;
            }
            "Buffers:" => {
                used -= value;
                seen |= BUFFERS;
            }
            "Cached:" => {
                used -= value;
                seen |= CACHED;
            }
            _ => {}
        }
    }

    if seen != ALL {
        return Err(SourceError::Incomplete {
            what: "meminfo",
            missing: missing_fields(seen),
        });
    }
    Ok(MemoryUsage {
        used_kb: used,
        total_kb: total,
    })
}

fn missing_fields(seen: u8) -> String {
    [
        (TOTAL, "MemTotal"),
        (FREE, "MemFree"),
        (BUFFERS, "Buffers"),
        (CACHED, "Cached"),
    ]
    .into_iter()
    .filter(|(bit, _)| seen & *bit == 0)
    .map(|(_, name)| name)
    .collect::<Vec<_>>()
    .join(", ")
}
