use crate::modules::tracking::core::day_window::start_of_day;
use crate::modules::tracking::core::errors::TrackingError;
use crate::modules::tracking::core::ports::{ProjectStore, RecordStore};
use crate::modules::tracking::core::project::Project;
use crate::modules::tracking::core::record::Record;
use crate::modules::tracking::core::tracking_state::TrackingState;
use crate::shared::core::clock::Clock;
use chrono::{DateTime, Local};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, warn};
use uuid::Uuid;

/// Owns the start/stop lifecycle and keeps at most one open record per user.
///
/// Calls for the same user are serialised on a per-user lock, so a start always sees the
/// previous transition fully applied. Calls for different users run independently.
pub struct TrackingHandler<TRecords, TProjects>
where
    TRecords: RecordStore + 'static,
    TProjects: ProjectStore + 'static,
{
    records: Arc<TRecords>,
    projects: Arc<TProjects>,
    state: Arc<TrackingState>,
    clock: Arc<dyn Clock>,
    // Entries are dropped again once no call for that user holds them.
    user_locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

/// Outcome of closing a user's open records.
struct Closure {
    closed: usize,
    failed: Vec<(Uuid, TrackingError)>,
}

impl<TRecords, TProjects> TrackingHandler<TRecords, TProjects>
where
    TRecords: RecordStore + 'static,
    TProjects: ProjectStore + 'static,
{
    pub fn new(
        records: Arc<TRecords>,
        projects: Arc<TProjects>,
        state: Arc<TrackingState>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            records,
            projects,
            state,
            clock,
            user_locks: Mutex::new(HashMap::new()),
        }
    }

    pub fn state(&self) -> &Arc<TrackingState> {
        &self.state
    }

    #[tracing::instrument(skip(self))]
    pub async fn start(&self, user: &str, project_name: &str) -> Result<Project, TrackingError> {
        if user.is_empty() {
            return Err(TrackingError::InvalidInput("user must not be empty".into()));
        }

        let project = self
            .projects
            .get_by_name(project_name)
            .await
            .map_err(TrackingError::storage(format!("loading project {project_name}")))?
            .ok_or_else(|| TrackingError::NotFound(format!("project {project_name}")))?;
        if !project.active {
            return Err(TrackingError::InvalidState(format!(
                "project {project_name} is not active"
            )));
        }

        let lock = self.user_lock(user).await;
        let result = {
            let _guard = lock.lock().await;
            self.open_record(user, project_name).await
        };
        self.release_user_lock(user, lock).await;
        result.map(|()| project)
    }

    async fn open_record(&self, user: &str, project_name: &str) -> Result<(), TrackingError> {
        let now = self.clock.now();
        // Close whatever is still open, even when the cache says nothing is. A record that
        // cannot be closed blocks the new one, so two open records never coexist.
        let closure = self.close_open_records(user, now).await?;
        if let Some((record_id, error)) = closure.failed.into_iter().next() {
            warn!(%record_id, "refusing to start while a record is still open");
            return Err(error);
        }
        self.state.set_inactive(user).await;

        let record = Record::open(project_name, user, now);
        self.records
            .save(&record)
            .await
            .map_err(TrackingError::storage(format!("saving record {}", record.id)))?;
        self.state.set_active(user, project_name).await;

        info!(record_id = %record.id, "started tracking");
        Ok(())
    }

    /// Closes every open record of `user`. Stopping while nothing is tracked is fine.
    #[tracing::instrument(skip(self))]
    pub async fn stop(&self, user: &str) -> Result<(), TrackingError> {
        let lock = self.user_lock(user).await;
        let result = {
            let _guard = lock.lock().await;
            let closure = self.close_open_records(user, self.clock.now()).await;
            if closure.is_ok() {
                self.state.set_inactive(user).await;
            }
            closure
        };
        self.release_user_lock(user, lock).await;

        // Closing is best effort here: records that could not be saved stay open.
        let closure = result?;
        info!(
            closed = closure.closed,
            failed = closure.failed.len(),
            "stopped tracking"
        );
        Ok(())
    }

    /// The project of the open record `user` started today, if any.
    #[tracing::instrument(skip(self))]
    pub async fn active_project(&self, user: &str) -> Result<Option<Project>, TrackingError> {
        let today = start_of_day(&self.clock.now());
        let records = self
            .records
            .list_by_user(user)
            .await
            .map_err(TrackingError::storage(format!("listing records of {user}")))?;

        let Some(open) = records
            .into_iter()
            .find(|record| record.is_open() && record.start > today)
        else {
            return Ok(None);
        };

        let project = self
            .projects
            .get_by_name(&open.project)
            .await
            .map_err(TrackingError::storage(format!("loading project {}", open.project)))?;
        if project.is_none() {
            warn!(record_id = %open.id, project = %open.project, "open record refers to an unknown project");
        }
        Ok(project)
    }

    /// Rebuilds the cached state of `user` from persisted records.
    pub async fn restore(&self, user: &str) -> Result<Option<Project>, TrackingError> {
        let lock = self.user_lock(user).await;
        let result = {
            let _guard = lock.lock().await;
            let project = self.active_project(user).await;
            match &project {
                Ok(Some(project)) => self.state.set_active(user, &project.name).await,
                Ok(None) => self.state.set_inactive(user).await,
                Err(_) => {}
            }
            project
        };
        self.release_user_lock(user, lock).await;
        result
    }

    // Save failures are logged and collected; callers decide whether they are fatal.
    // Only a failed listing is returned as an error.
    async fn close_open_records(
        &self,
        user: &str,
        now: DateTime<Local>,
    ) -> Result<Closure, TrackingError> {
        let records = self
            .records
            .list_by_user(user)
            .await
            .map_err(TrackingError::storage(format!("listing records of {user}")))?;

        let mut closure = Closure {
            closed: 0,
            failed: Vec::new(),
        };
        for mut record in records.into_iter().filter(Record::is_open) {
            record.end = Some(now);
            match self.records.save(&record).await {
                Ok(()) => closure.closed += 1,
                Err(e) => {
                    warn!(record_id = %record.id, error = %e, "failed to close record");
                    let error = TrackingError::storage(format!("closing record {}", record.id))(e);
                    closure.failed.push((record.id, error));
                }
            }
        }
        Ok(closure)
    }

    async fn user_lock(&self, user: &str) -> Arc<Mutex<()>> {
        self.user_locks
            .lock()
            .await
            .entry(user.to_string())
            .or_default()
            .clone()
    }

    // Takes the caller's handle back and forgets the entry when nobody else holds it.
    // Handles are only cloned under the map lock, so the count cannot grow meanwhile.
    async fn release_user_lock(&self, user: &str, lock: Arc<Mutex<()>>) {
        let mut locks = self.user_locks.lock().await;
        drop(lock);
        if locks
            .get(user)
            .is_some_and(|entry| Arc::strong_count(entry) == 1)
        {
            locks.remove(user);
        }
    }
}
