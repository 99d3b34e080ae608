use crate::modules::tracking::core::day_window::parse_local_date_time;
use crate::modules::tracking::core::errors::TrackingError;
use crate::modules::tracking::core::ports::{RecordStore, StoreError};
use crate::modules::tracking::core::record::Record;
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// New bounds for a record, as entered in an edit form.
#[derive(Debug, Clone, Deserialize)]
pub struct EditRecord {
    pub start: String,
    pub start_time: String,
    pub end: String,
    pub end_time: String,
}

pub struct RecordsHandler<TRecords>
where
    TRecords: RecordStore + 'static,
{
    records: Arc<TRecords>,
}

impl<TRecords> RecordsHandler<TRecords>
where
    TRecords: RecordStore + 'static,
{
    pub fn new(records: Arc<TRecords>) -> Self {
        Self { records }
    }

    pub async fn get(&self, id: &str) -> Result<Record, TrackingError> {
        let id = parse_id(id)?;
        self.records
            .get(id)
            .await
            .map_err(TrackingError::storage(format!("loading record {id}")))?
            .ok_or_else(|| TrackingError::NotFound(format!("record {id}")))
    }

    /// Replaces the bounds of a record. User and project stay as they are.
    #[tracing::instrument(skip(self))]
    pub async fn edit(&self, id: &str, edit: &EditRecord) -> Result<Record, TrackingError> {
        let start = parse_local_date_time(&edit.start, &edit.start_time)?;
        let end = parse_local_date_time(&edit.end, &edit.end_time)?;
        if end < start {
            return Err(TrackingError::InvalidInput(format!(
                "end {end} is before start {start}"
            )));
        }

        let mut record = self.get(id).await?;
        record.start = start;
        record.end = Some(end);
        self.records
            .save(&record)
            .await
            .map_err(TrackingError::storage(format!("saving record {}", record.id)))?;
        info!(record_id = %record.id, "edited record");
        Ok(record)
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> Result<(), TrackingError> {
        let id = parse_id(id)?;
        match self.records.delete(id).await {
            Ok(()) => Ok(()),
            Err(StoreError::NotFound(_)) => Err(TrackingError::NotFound(format!("record {id}"))),
            Err(e) => Err(TrackingError::storage(format!("deleting record {id}"))(e)),
        }
    }
}

fn parse_id(id: &str) -> Result<Uuid, TrackingError> {
    Uuid::parse_str(id).map_err(|e| TrackingError::InvalidInput(format!("invalid UUID {id:?}: {e}")))
}
