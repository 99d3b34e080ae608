use chrono::{DateTime, Local, TimeDelta};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One tracked span. `end == None` means the span is still being tracked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: Uuid,
    pub project: String,
    pub user: String,
    pub start: DateTime<Local>,
    pub end: Option<DateTime<Local>>,
}

impl Record {
    pub fn open(project: impl Into<String>, user: impl Into<String>, start: DateTime<Local>) -> Self {
        Self {
            id: Uuid::now_v7(),
            project: project.into(),
            user: user.into(),
            start,
            end: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.end.is_none()
    }

    /// End of the span, reading an open record as ending at `now`. Nothing is written back.
    pub fn end_or(&self, now: DateTime<Local>) -> DateTime<Local> {
        self.end.unwrap_or(now)
    }

    pub fn duration_at(&self, now: DateTime<Local>) -> TimeDelta {
        self.end_or(now) - self.start
    }
}
