use crate::modules::tracking::core::day_window::{end_of_day, local_midnight, parse_date};
use crate::modules::tracking::core::duration_format::format_duration;
use crate::modules::tracking::core::errors::TrackingError;
use crate::modules::tracking::core::ports::{ProjectStore, RecordStore};
use crate::modules::tracking::use_cases::report::projection::{Report, ReportItem};
use crate::shared::core::clock::Clock;
use chrono::TimeDelta;
use std::sync::Arc;
use tracing::info;

/// Sums a user's records per project over an inclusive range of calendar days.
pub struct ReportHandler<TRecords, TProjects>
where
    TRecords: RecordStore + 'static,
    TProjects: ProjectStore + 'static,
{
    records: Arc<TRecords>,
    projects: Arc<TProjects>,
    clock: Arc<dyn Clock>,
}

impl<TRecords, TProjects> ReportHandler<TRecords, TProjects>
where
    TRecords: RecordStore + 'static,
    TProjects: ProjectStore + 'static,
{
    pub fn new(records: Arc<TRecords>, projects: Arc<TProjects>, clock: Arc<dyn Clock>) -> Self {
        Self {
            records,
            projects,
            clock,
        }
    }

    /// `start` and `end` are `YYYY-MM-DD`; both days are included whole. An empty
    /// `project_filter` reports on every known project. Rows are ordered by project name
    /// and projects without time in the range are left out.
    #[tracing::instrument(skip(self))]
    pub async fn report(
        &self,
        user: &str,
        project_filter: &str,
        start: &str,
        end: &str,
    ) -> Result<Vec<Report>, TrackingError> {
        let after = local_midnight(parse_date(start)?)?;
        let before = end_of_day(&local_midnight(parse_date(end)?)?);
        let now = self.clock.now();

        let candidates = if project_filter.is_empty() {
            self.projects
                .list_all()
                .await
                .map_err(TrackingError::storage("listing projects"))?
                .into_iter()
                .map(|project| project.name)
                .collect()
        } else {
            vec![project_filter.to_string()]
        };

        let mut reports = Vec::new();
        for project in candidates {
            let mut records = self
                .records
                .list_by_user_and_project_in_range(user, &project, after, before)
                .await
                .map_err(TrackingError::storage(format!(
                    "listing records of {user} on {project}"
                )))?;
            records.sort_by_key(|record| record.start);

            let total = records
                .iter()
                .fold(TimeDelta::zero(), |sum, record| sum + record.duration_at(now));
            if total.is_zero() {
                continue;
            }

            reports.push(Report {
                total_seconds: total.num_seconds(),
                total: format_duration(total),
                items: records
                    .iter()
                    .map(|record| ReportItem {
                        id: record.id,
                        start: record.start,
                        end: record.end_or(now),
                    })
                    .collect(),
                project,
            });
        }

        reports.sort_by(|a, b| a.project.cmp(&b.project));
        info!(rows = reports.len(), "generated report");
        Ok(reports)
    }
}
