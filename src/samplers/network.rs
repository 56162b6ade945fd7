// Network throughput from /proc/net/dev, plus the externally measured average ping.

use super::linux::read_file;
use crate::error::SourceError;
use crate::icons::{NET_RECEIVED, NET_TRANSMITTED, PING};
use crate::models::NetworkCounters;
use crate::rate::format_rate;
use std::path::Path;

/// Field index of received and transmitted bytes in a /proc/net/dev line
/// (the interface name is field 0).
const RX_BYTES_FIELD: usize = 1;
const TX_BYTES_FIELD: usize = 9;

/// Samples interface totals and renders the rates since `counters`, which is
/// then advanced to the new totals.
pub fn sample(
    net_dev: &Path,
    avg_ping: &Path,
    devices: &[String],
    counters: &mut NetworkCounters,
    separator: char,
) -> Result<String, SourceError> {
    let content = read_file(net_dev)?;
    let now = parse_totals(&content, devices);
    let (rx, tx) = now.delta(counters);
    *counters = now;

    Ok(format!(
        "{} {}{}",
        format_rate(NET_RECEIVED, rx, separator),
        format_rate(NET_TRANSMITTED, tx, separator),
        latency(avg_ping)
    ))
}

pub fn fallback() -> String {
    format!("{NET_RECEIVED} ERR {NET_TRANSMITTED} ERR")
}

/// Sums the byte counters of the listed devices. Lines that are not
/// `<dev>: <counters...>` (headers, truncated lines) are skipped.
pub fn parse_totals(content: &str, devices: &[String]) -> NetworkCounters {
    content
        .lines()
        .filter_map(parse_line)
        .filter(|(dev, _, _)| devices.iter().any(|d| d == dev))
        .fold(NetworkCounters::default(), |acc, (_, rx, tx)| NetworkCounters {
            received: acc.received.saturating_add(rx),
            transmitted: acc.transmitted.saturating_add(tx),
        })
}

fn parse_line(line: &str) -> Option<(&str, u64, u64)> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let dev = fields.first()?.strip_suffix(':')?;
    let rx = fields.get(RX_BYTES_FIELD)?.parse().ok()?;
    let tx = fields.get(TX_BYTES_FIELD)?.parse().ok()?;
    Some((dev, rx, tx))
}

/// Latency suffix: empty when the ping file is missing, `0.0ms` when it
/// cannot be parsed.
fn latency(path: &Path) -> String {
    let Ok(content) = std::fs::read_to_string(path) else {
        return String::new();
    };
    match content.split_whitespace().next().map(str::parse::<f64>) {
        Some(Ok(ms)) => format!(" {PING} {}ms", ms as i64),
        _ => format!(" {PING}0.0ms"),
    }
}
