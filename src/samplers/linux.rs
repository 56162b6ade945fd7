// Linux-specific helpers: /proc and /sys pseudo-files, small state files.

use crate::error::SourceError;
use std::path::Path;

/// Read a whole pseudo-file; any I/O error means the source is unavailable.
pub(super) fn read_file(path: &Path) -> Result<String, SourceError> {
    std::fs::read_to_string(path).map_err(|e| SourceError::unavailable(path, e))
}

/// Last line of a file's content, the way a line scanner ends up holding it.
pub(super) fn last_line(content: &str) -> Option<&str> {
    content.lines().last()
}

/// Read a sysfs integer attribute (e.g. `energy_now`); missing or garbage reads as `None`.
pub(super) fn read_sysfs_u64(path: &Path) -> Option<u64> {
    std::fs::read_to_string(path).ok()?.trim().parse().ok()
}
