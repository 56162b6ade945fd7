use chrono::{DateTime, Local, TimeDelta, Timelike};
use std::future::Future;
use std::time::Duration;

/// Wall-clock time and sleeping, swappable for a scripted clock in tests.
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }

    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await
    }
}

/// Time left from `now` until the second boundary following `tick_start`.
///
/// Zero when that boundary has already passed, so an overlong tick is followed
/// immediately by the next one instead of skipping a second.
pub fn next_tick_delay(tick_start: DateTime<Local>, now: DateTime<Local>) -> Duration {
    let second = tick_start.with_nanosecond(0).unwrap_or(tick_start);
    let boundary = second + TimeDelta::seconds(1);
    (boundary - now).to_std().unwrap_or(Duration::ZERO)
}
