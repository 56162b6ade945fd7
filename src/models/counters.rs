// Cumulative interface byte counters carried from one tick to the next

/// Received/transmitted byte totals summed over the allowed interfaces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NetworkCounters {
    pub received: u64,
    pub transmitted: u64,
}

impl NetworkCounters {
    /// Bytes moved since `previous`, per direction. Negative when a counter
    /// went backwards (interface reset or removed).
    pub fn delta(&self, previous: &NetworkCounters) -> (i64, i64) {
        (
            signed_diff(self.received, previous.received),
            signed_diff(self.transmitted, previous.transmitted),
        )
    }
}

fn signed_diff(now: u64, previous: u64) -> i64 {
    (i128::from(now) - i128::from(previous)).clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64
}
