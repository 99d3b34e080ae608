use chrono::{DateTime, Local};

/// Source of "now" for everything that stamps or compares times. Handlers take it as a
/// port so tests can pin the wall clock.
pub trait Clock: Send + Sync + 'static {
    fn now(&self) -> DateTime<Local>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}
