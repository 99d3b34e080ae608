use crate::modules::tracking::core::day_window::start_of_day;
use crate::modules::tracking::core::duration_format::format_duration;
use crate::modules::tracking::core::errors::TrackingError;
use crate::modules::tracking::core::ports::RecordStore;
use crate::modules::tracking::core::tracking_state::TrackingState;
use crate::modules::tracking::use_cases::status::projection::{ProjectDuration, StatusResponse};
use chrono::{DateTime, Local, TimeDelta};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

/// Aggregates the records a user started today into a status summary.
pub struct StatusHandler<TRecords>
where
    TRecords: RecordStore + 'static,
{
    records: Arc<TRecords>,
    state: Arc<TrackingState>,
}

impl<TRecords> StatusHandler<TRecords>
where
    TRecords: RecordStore + 'static,
{
    pub fn new(records: Arc<TRecords>, state: Arc<TrackingState>) -> Self {
        Self { records, state }
    }

    /// "Today" is every record that started strictly after local midnight of `now`'s date.
    /// Open records count up to `now`.
    #[tracing::instrument(skip(self))]
    pub async fn status(
        &self,
        user: &str,
        now: DateTime<Local>,
    ) -> Result<StatusResponse, TrackingError> {
        let today = start_of_day(&now);
        let records = self
            .records
            .list_by_user(user)
            .await
            .map_err(TrackingError::storage(format!("listing records of {user}")))?;
        let current = self.state.current_project(user).await;

        let mut elapsed = TimeDelta::zero();
        let mut current_total = TimeDelta::zero();
        let mut daily_total = TimeDelta::zero();
        let mut per_project: BTreeMap<String, TimeDelta> = BTreeMap::new();

        for record in records.iter().filter(|r| r.start > today) {
            let span = record.duration_at(now);
            if record.is_open() {
                elapsed = span;
            }
            *per_project
                .entry(record.project.clone())
                .or_insert_with(TimeDelta::zero) += span;
            daily_total += span;
            if record.project == current {
                current_total += span;
            }
            debug!(record_id = %record.id, project = %record.project, ?span, "aggregated record");
        }

        Ok(StatusResponse {
            current,
            elapsed: format_duration(elapsed),
            current_total: format_duration(current_total),
            daily_total: format_duration(daily_total),
            durations: per_project
                .into_iter()
                .map(|(project, total)| ProjectDuration {
                    project,
                    elapsed: format_duration(total),
                })
                .collect(),
        })
    }
}
