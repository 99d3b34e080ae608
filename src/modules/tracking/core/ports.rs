// Ports define what the tracking core needs from the outside world, without implementing it.
//
// Purpose
// - Describe record and project persistence as traits (RecordStore, ProjectStore).
//
// Boundaries
// - Each call is assumed atomic on its own. Nothing here offers cross-record transactions.
// - Adapters implement these traits in the adapters layer.
//
// Testing guidance
// - The in memory adapters stand in for the real store in tests and local development.

use async_trait::async_trait;
use chrono::{DateTime, Local};
use thiserror::Error;
use uuid::Uuid;

use crate::modules::tracking::core::project::Project;
use crate::modules::tracking::core::record::Record;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no such {0}")]
    NotFound(String),

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Inserts or replaces the record with the same id.
    async fn save(&self, record: &Record) -> Result<(), StoreError>;

    async fn get(&self, id: Uuid) -> Result<Option<Record>, StoreError>;

    async fn delete(&self, id: Uuid) -> Result<(), StoreError>;

    async fn list_by_user(&self, user: &str) -> Result<Vec<Record>, StoreError>;

    /// Records of `user` on `project` whose start lies strictly between the two bounds.
    async fn list_by_user_and_project_in_range(
        &self,
        user: &str,
        project: &str,
        after: DateTime<Local>,
        before: DateTime<Local>,
    ) -> Result<Vec<Record>, StoreError>;

    async fn list_all(&self) -> Result<Vec<Record>, StoreError>;
}

#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// Inserts or replaces the project with the same name.
    async fn save(&self, project: &Project) -> Result<(), StoreError>;

    async fn get_by_name(&self, name: &str) -> Result<Option<Project>, StoreError>;

    async fn list_all(&self) -> Result<Vec<Project>, StoreError>;
}
