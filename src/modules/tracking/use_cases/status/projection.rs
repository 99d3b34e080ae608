use serde::Serialize;

/// Time spent on one project today, already formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectDuration {
    pub project: String,
    pub elapsed: String,
}

/// Today's summary for one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusResponse {
    pub current: String,
    pub elapsed: String,
    pub current_total: String,
    pub daily_total: String,
    pub durations: Vec<ProjectDuration>,
}
