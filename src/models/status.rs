// One composed status line

use std::fmt;

/// Fragments in display order, joined by the field separator when rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    fields: Vec<String>,
    separator: String,
}

impl StatusLine {
    pub fn new(fields: Vec<String>, separator: impl Into<String>) -> Self {
        Self {
            fields,
            separator: separator.into(),
        }
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }
}

impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fields.join(&self.separator))
    }
}
