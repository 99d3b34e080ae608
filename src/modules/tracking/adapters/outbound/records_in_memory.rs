// In memory implementation of the RecordStore port.
//
// Purpose
// - Back the binary and handler tests without a database.
//
// Responsibilities
// - Store records keyed by id.
// - Answer the user and range queries with records ordered by start.
// - Simulate outages: `toggle_offline` fails every call, `toggle_read_only` fails saves only.

use crate::modules::tracking::core::ports::{RecordStore, StoreError};
use crate::modules::tracking::core::record::Record;
use chrono::{DateTime, Local};
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
pub struct InMemoryRecordStore {
    rows: RwLock<HashMap<Uuid, Record>>,
    is_offline: bool,
    is_read_only: bool,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub fn toggle_read_only(&mut self) {
        self.is_read_only = !self.is_read_only;
    }

    fn ensure_online(&self) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Record store offline".into()));
        }
        Ok(())
    }

    async fn select(&self, keep: impl Fn(&Record) -> bool) -> Result<Vec<Record>, StoreError> {
        self.ensure_online()?;
        let guard = self.rows.read().await;
        let mut items: Vec<Record> = guard.values().filter(|r| keep(*r)).cloned().collect();
        items.sort_by_key(|r| r.start);
        Ok(items)
    }
}

#[async_trait::async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn save(&self, record: &Record) -> Result<(), StoreError> {
        self.ensure_online()?;
        if self.is_read_only {
            return Err(StoreError::Backend("Record store is read only".into()));
        }
        self.rows.write().await.insert(record.id, record.clone());
        Ok(())
    }

    async fn get(&self, id: Uuid) -> Result<Option<Record>, StoreError> {
        self.ensure_online()?;
        Ok(self.rows.read().await.get(&id).cloned())
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        self.ensure_online()?;
        match self.rows.write().await.remove(&id) {
            Some(_) => Ok(()),
            None => Err(StoreError::NotFound(format!("record {id}"))),
        }
    }

    async fn list_by_user(&self, user: &str) -> Result<Vec<Record>, StoreError> {
        self.select(|r| r.user == user).await
    }

    async fn list_by_user_and_project_in_range(
        &self,
        user: &str,
        project: &str,
        after: DateTime<Local>,
        before: DateTime<Local>,
    ) -> Result<Vec<Record>, StoreError> {
        self.select(|r| r.user == user && r.project == project && r.start > after && r.start < before)
            .await
    }

    async fn list_all(&self) -> Result<Vec<Record>, StoreError> {
        self.select(|_| true).await
    }
}
