use chrono::{DateTime, Local};
use serde::Serialize;
use uuid::Uuid;

/// One record inside a report row, for drill-down display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportItem {
    pub id: Uuid,
    pub start: DateTime<Local>,
    pub end: DateTime<Local>,
}

/// Time spent on one project over the requested range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub project: String,
    pub total_seconds: i64,
    pub total: String,
    pub items: Vec<ReportItem>,
}
