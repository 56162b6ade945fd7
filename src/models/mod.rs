// Per-tick data: carried network counters and the composed status line

mod counters;
mod status;

pub use counters::NetworkCounters;
pub use status::StatusLine;
