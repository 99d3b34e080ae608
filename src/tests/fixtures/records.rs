// Shared test fixture for records.

use crate::modules::tracking::core::record::Record;
use crate::tests::fixtures::clock::local;
use chrono::{DateTime, Local, TimeDelta};

pub struct RecordBuilder {
    inner: Record,
}

impl Default for RecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl RecordBuilder {
    /// An open record of `user-fixed-0001` on `timetrace`, started at 09:00 on the fixture day.
    pub fn new() -> Self {
        Self {
            inner: Record::open("timetrace", "user-fixed-0001", local(9, 0)),
        }
    }

    pub fn user(mut self, v: impl Into<String>) -> Self {
        self.inner.user = v.into();
        self
    }

    pub fn project(mut self, v: impl Into<String>) -> Self {
        self.inner.project = v.into();
        self
    }

    pub fn start(mut self, v: DateTime<Local>) -> Self {
        self.inner.start = v;
        self
    }

    pub fn end(mut self, v: DateTime<Local>) -> Self {
        self.inner.end = Some(v);
        self
    }

    pub fn closed_after(mut self, v: TimeDelta) -> Self {
        self.inner.end = Some(self.inner.start + v);
        self
    }

    pub fn build(self) -> Record {
        self.inner
    }
}
