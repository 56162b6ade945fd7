// CPU load (1 minute load average scaled to the core count) and temperature.

use super::linux::{last_line, read_file};
use crate::error::SourceError;
use crate::icons::{CPU, CPU_TEMP};
use std::path::Path;
use sysinfo::System;

/// Logical cores, used to turn the load average into a percentage. Never zero.
pub fn core_count() -> usize {
    let mut sys = System::new();
    sys.refresh_cpu_all();
    sys.cpus().len().max(1)
}

pub fn sample_load(loadavg: &Path, cores: usize) -> Result<String, SourceError> {
    let content = read_file(loadavg)?;
    let percentage = load_percentage(&content, cores)?;
    Ok(format!("{CPU}{percentage:>3}%"))
}

pub fn load_fallback() -> String {
    format!("{CPU}ERR")
}

/// First field of /proc/loadavg times 100 per core, truncated. Not clamped:
/// an overloaded system reads above 100.
pub fn load_percentage(loadavg: &str, cores: usize) -> Result<i64, SourceError> {
    let first = loadavg
        .split_whitespace()
        .next()
        .ok_or_else(|| SourceError::parse("loadavg", "empty"))?;
    let load: f64 = first
        .parse()
        .map_err(|e| SourceError::parse("loadavg", format!("{first:?}: {e}")))?;
    Ok((load * 100.0 / cores.max(1) as f64) as i64)
}

pub fn sample_temperature(thermal_zone: &Path) -> Result<String, SourceError> {
    let content = read_file(thermal_zone)?;
    let celsius = parse_temperature(&content)?;
    Ok(format!("{CPU_TEMP} {celsius}°C"))
}

pub fn temperature_fallback() -> String {
    format!("{CPU_TEMP} ERR")
}

/// Whole degrees from a millidegree reading.
pub fn parse_temperature(content: &str) -> Result<i64, SourceError> {
    let line = last_line(content).unwrap_or_default().trim();
    let millidegrees: i64 = line
        .parse()
        .map_err(|e| SourceError::parse("temperature", format!("{line:?}: {e}")))?;
    Ok(millidegrees / 1000)
}
