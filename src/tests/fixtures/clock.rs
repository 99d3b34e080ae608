// Shared test fixture for a pinned wall clock.
// Compiled into the crate only under cfg(test), exposed as crate::tests::fixtures::clock.

use crate::shared::core::clock::Clock;
use chrono::{DateTime, Local, TimeDelta, TimeZone};
use std::sync::Mutex;

pub struct FixedClock {
    now: Mutex<DateTime<Local>>,
}

#[allow(dead_code)]
impl FixedClock {
    pub fn at(now: DateTime<Local>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    pub fn set(&self, now: DateTime<Local>) {
        *self.now.lock().unwrap() = now;
    }

    pub fn advance(&self, by: TimeDelta) {
        let mut guard = self.now.lock().unwrap();
        *guard += by;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        *self.now.lock().unwrap()
    }
}

/// Tuesday 2024-03-12 at the given local wall time. No DST transition falls on that day
/// in common zones.
pub fn local(hour: u32, minute: u32) -> DateTime<Local> {
    Local.with_ymd_and_hms(2024, 3, 12, hour, minute, 0).unwrap()
}

pub fn local_on(day: u32, hour: u32, minute: u32) -> DateTime<Local> {
    Local.with_ymd_and_hms(2024, 3, day, hour, minute, 0).unwrap()
}
