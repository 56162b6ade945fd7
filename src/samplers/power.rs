// Battery charge and AC plug state from /sys/class/power_supply.

use super::linux::{read_file, read_sysfs_u64};
use crate::error::SourceError;
use crate::icons::{
    BATTERY_10, BATTERY_25, BATTERY_50, BATTERY_75, BATTERY_100, BATTERY_ALERT, PLUGGED,
};
use std::path::Path;

/// Above this percentage a battery on AC counts as charged.
const CHARGED_THRESHOLD: u64 = 98;

/// Summed capacity of every `BAT*` supply, in the supply's own unit
/// (µWh for `energy_*`, µAh for `charge_*`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Capacity {
    pub full: u64,
    pub now: u64,
}

impl Capacity {
    /// Integer charge percentage; `None` when no battery reported a full capacity.
    pub fn percentage(&self) -> Option<u64> {
        (self.full > 0).then(|| self.now.saturating_mul(100) / self.full)
    }
}

pub fn sample(power_supply: &Path) -> Result<String, SourceError> {
    let online = read_file(&power_supply.join("AC").join("online"))?;
    let plugged = online.trim() == "1";

    let capacity = read_capacity(power_supply)?;
    let percentage = capacity.percentage().ok_or(SourceError::NoBattery)?;
    Ok(render(percentage, plugged))
}

pub fn fallback() -> String {
    "|ERR".to_string()
}

/// Sums `full`/`now` over all `BAT*` entries, preferring `energy_*` files
/// and falling back to `charge_*`.
pub fn read_capacity(power_supply: &Path) -> Result<Capacity, SourceError> {
    let entries =
        std::fs::read_dir(power_supply).map_err(|e| SourceError::unavailable(power_supply, e))?;

    let mut capacity = Capacity::default();
    for entry in entries.flatten() {
        if !entry.file_name().to_string_lossy().starts_with("BAT") {
            continue;
        }
        let battery = entry.path();
        capacity.full = capacity.full.saturating_add(read_value(&battery, "full"));
        capacity.now = capacity.now.saturating_add(read_value(&battery, "now"));
    }
    Ok(capacity)
}

fn read_value(battery: &Path, field: &str) -> u64 {
    read_sysfs_u64(&battery.join(format!("energy_{field}")))
        .or_else(|| read_sysfs_u64(&battery.join(format!("charge_{field}"))))
        .unwrap_or(0)
}

/// `<icon><alert><percentage:3>%`
pub fn render(percentage: u64, plugged: bool) -> String {
    let (icon, alert) = icons(percentage, plugged);
    format!("{icon}{alert}{percentage:>3}%")
}

fn icons(percentage: u64, plugged: bool) -> (&'static str, &'static str) {
    if plugged {
        let alert = if percentage <= CHARGED_THRESHOLD {
            ""
        } else {
            BATTERY_ALERT
        };
        return (PLUGGED, alert);
    }
    match percentage {
        0..=10 => (BATTERY_10, BATTERY_ALERT),
        11..=25 => (BATTERY_25, BATTERY_ALERT),
        26..=50 => (BATTERY_50, BATTERY_ALERT),
        51..=75 => (BATTERY_75, BATTERY_ALERT),
        76..=100 => (BATTERY_100, ""),
        _ => (BATTERY_100, BATTERY_ALERT),
    }
}
