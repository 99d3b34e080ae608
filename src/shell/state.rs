use crate::modules::tracking::adapters::outbound::projects_in_memory::InMemoryProjectStore;
use crate::modules::tracking::adapters::outbound::records_in_memory::InMemoryRecordStore;
use crate::modules::tracking::core::tracking_state::TrackingState;
use crate::modules::tracking::use_cases::projects::handler::ProjectsHandler;
use crate::modules::tracking::use_cases::records::handler::RecordsHandler;
use crate::modules::tracking::use_cases::report::handler::ReportHandler;
use crate::modules::tracking::use_cases::status::handler::StatusHandler;
use crate::modules::tracking::use_cases::track::handler::TrackingHandler;
use crate::shared::core::clock::Clock;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub clock: Arc<dyn Clock>,
    pub record_store: Arc<InMemoryRecordStore>,
    pub tracking: Arc<TrackingHandler<InMemoryRecordStore, InMemoryProjectStore>>,
    pub status: Arc<StatusHandler<InMemoryRecordStore>>,
    pub reports: Arc<ReportHandler<InMemoryRecordStore, InMemoryProjectStore>>,
    pub projects: Arc<ProjectsHandler<InMemoryProjectStore>>,
    pub records: Arc<RecordsHandler<InMemoryRecordStore>>,
}

impl AppState {
    /// Wires every handler onto the same stores, clock and tracking cache.
    pub fn new(
        records: Arc<InMemoryRecordStore>,
        projects: Arc<InMemoryProjectStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let tracking_state = Arc::new(TrackingState::new());
        Self {
            tracking: Arc::new(TrackingHandler::new(
                records.clone(),
                projects.clone(),
                tracking_state.clone(),
                clock.clone(),
            )),
            status: Arc::new(StatusHandler::new(records.clone(), tracking_state)),
            reports: Arc::new(ReportHandler::new(
                records.clone(),
                projects.clone(),
                clock.clone(),
            )),
            projects: Arc::new(ProjectsHandler::new(projects, clock.clone())),
            records: Arc::new(RecordsHandler::new(records.clone())),
            record_store: records,
            clock,
        }
    }
}
