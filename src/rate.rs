// Fixed-width transfer rate formatting (integer arithmetic only).

use crate::icons::{BYTES, KIBIBYTES, MEBIBYTES};

const KIB_THRESHOLD: i64 = 1000;
const MIB_THRESHOLD: i64 = 1000 * 1024;
const OVERFLOW: i64 = 1000 * 1024 * 1024;

/// Formats `rate` (bytes per tick) behind `prefix`.
///
/// Every rate in `0..1000 MiB` renders as `prefix` + 4 characters + a one letter
/// unit. Negative rates (counter went backwards) and rates of 1000 MiB or more
/// render as `"<prefix> ERR"`.
pub fn format_rate(prefix: &str, rate: i64, separator: char) -> String {
    if !(0..OVERFLOW).contains(&rate) {
        return format!("{prefix} ERR");
    }

    let (value, decimal, unit) = if rate >= MIB_THRESHOLD {
        (rate / (1024 * 1024), (rate / 1024 / 102) % 10, MEBIBYTES)
    } else if rate >= KIB_THRESHOLD {
        (rate / 1024, (rate / 102) % 10, KIBIBYTES)
    } else {
        return format!("{prefix}{rate:>4}{BYTES}");
    };

    if value >= 100 {
        format!("{prefix} {value:>3}{unit}")
    } else if value >= 10 {
        format!("{prefix}{value:>2}{separator}{decimal}{unit}")
    } else {
        format!("{prefix} {value}{separator}{decimal}{unit}")
    }
}
