// In memory implementation of the ProjectStore port, keyed by project name.

use crate::modules::tracking::core::ports::{ProjectStore, StoreError};
use crate::modules::tracking::core::project::Project;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryProjectStore {
    rows: RwLock<BTreeMap<String, Project>>,
    is_offline: bool,
}

impl InMemoryProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Project store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl ProjectStore for InMemoryProjectStore {
    async fn save(&self, project: &Project) -> Result<(), StoreError> {
        self.ensure_online()?;
        self.rows
            .write()
            .await
            .insert(project.name.clone(), project.clone());
        Ok(())
    }

    async fn get_by_name(&self, name: &str) -> Result<Option<Project>, StoreError> {
        self.ensure_online()?;
        Ok(self.rows.read().await.get(name).cloned())
    }

    /// Ordered by name.
    async fn list_all(&self) -> Result<Vec<Project>, StoreError> {
        self.ensure_online()?;
        Ok(self.rows.read().await.values().cloned().collect())
    }
}
