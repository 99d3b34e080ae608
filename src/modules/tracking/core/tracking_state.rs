use std::collections::HashMap;

use tokio::sync::RwLock;

/// What one user is tracking right now.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserTracking {
    pub active: bool,
    pub current_project: String,
}

/// Per-user cache of the open project, for cheap status display.
///
/// Records stay the source of truth. This only answers "what is open right now" and is
/// rebuilt from records at start-up. Unknown users read as inactive.
#[derive(Debug, Default)]
pub struct TrackingState {
    users: RwLock<HashMap<String, UserTracking>>,
}

impl TrackingState {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn is_active(&self, user: &str) -> bool {
        self.users
            .read()
            .await
            .get(user)
            .is_some_and(|tracking| tracking.active)
    }

    /// Empty when the user is not tracking anything.
    pub async fn current_project(&self, user: &str) -> String {
        self.users
            .read()
            .await
            .get(user)
            .map(|tracking| tracking.current_project.clone())
            .unwrap_or_default()
    }

    pub async fn set_active(&self, user: &str, project_name: &str) {
        self.users.write().await.insert(
            user.to_string(),
            UserTracking {
                active: true,
                current_project: project_name.to_string(),
            },
        );
    }

    pub async fn set_inactive(&self, user: &str) {
        self.users
            .write()
            .await
            .insert(user.to_string(), UserTracking::default());
    }
}
