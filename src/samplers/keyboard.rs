// Active keyboard layout, from the state file kept by the layout switcher.

use super::linux::{last_line, read_file};
use crate::error::SourceError;
use crate::icons::KEYBOARD;
use std::path::Path;

const DEFAULT_LAYOUT: &str = "default";

pub fn sample(state: &Path) -> Result<String, SourceError> {
    let content = read_file(state)?;
    let layout = last_line(&content).unwrap_or(DEFAULT_LAYOUT);
    Ok(format!("{KEYBOARD} {layout}"))
}

pub fn fallback() -> String {
    format!("{KEYBOARD} {DEFAULT_LAYOUT}")
}
