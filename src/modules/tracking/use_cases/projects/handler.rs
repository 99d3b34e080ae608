use crate::modules::tracking::core::errors::TrackingError;
use crate::modules::tracking::core::ports::ProjectStore;
use crate::modules::tracking::core::project::Project;
use crate::shared::core::clock::Clock;
use std::sync::Arc;
use tracing::info;

pub struct ProjectsHandler<TProjects>
where
    TProjects: ProjectStore + 'static,
{
    projects: Arc<TProjects>,
    clock: Arc<dyn Clock>,
}

impl<TProjects> ProjectsHandler<TProjects>
where
    TProjects: ProjectStore + 'static,
{
    pub fn new(projects: Arc<TProjects>, clock: Arc<dyn Clock>) -> Self {
        Self { projects, clock }
    }

    /// Creates an active project. Names are unique.
    #[tracing::instrument(skip(self))]
    pub async fn add(&self, name: &str) -> Result<Project, TrackingError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TrackingError::InvalidInput("project name must not be empty".into()));
        }
        if self.find(name).await?.is_some() {
            return Err(TrackingError::InvalidState(format!("project {name} exists")));
        }

        let project = Project::new(name, self.clock.now());
        self.projects
            .save(&project)
            .await
            .map_err(TrackingError::storage(format!("saving project {name}")))?;
        info!(project_id = %project.id, "added project");
        Ok(project)
    }

    pub async fn list(&self) -> Result<Vec<Project>, TrackingError> {
        let mut projects = self
            .projects
            .list_all()
            .await
            .map_err(TrackingError::storage("listing projects"))?;
        projects.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(projects)
    }

    pub async fn get(&self, name: &str) -> Result<Project, TrackingError> {
        self.find(name)
            .await?
            .ok_or_else(|| TrackingError::NotFound(format!("project {name}")))
    }

    /// Running timers on a deactivated project keep running; it just cannot be started again.
    #[tracing::instrument(skip(self))]
    pub async fn set_active(&self, name: &str, active: bool) -> Result<Project, TrackingError> {
        let mut project = self.get(name).await?;
        project.active = active;
        project.updated_at = self.clock.now();
        self.projects
            .save(&project)
            .await
            .map_err(TrackingError::storage(format!("saving project {name}")))?;
        Ok(project)
    }

    async fn find(&self, name: &str) -> Result<Option<Project>, TrackingError> {
        self.projects
            .get_by_name(name)
            .await
            .map_err(TrackingError::storage(format!("loading project {name}")))
    }
}
