use crate::modules::tracking::core::ports::RecordStore;
use crate::shell::state::AppState;
use std::collections::BTreeSet;
use tracing::{info, warn};

/// Seeds the tracking cache from persisted records, one user at a time.
///
/// A user whose state cannot be rebuilt is logged and left inactive. Only a failure to list
/// the records at all is returned.
pub async fn reconcile(state: &AppState) -> anyhow::Result<usize> {
    let users: BTreeSet<String> = state
        .record_store
        .list_all()
        .await?
        .into_iter()
        .map(|record| record.user)
        .collect();

    let mut active = 0;
    for user in &users {
        match state.tracking.restore(user).await {
            Ok(Some(project)) => {
                info!(%user, project = %project.name, "resumed tracking");
                active += 1;
            }
            Ok(None) => {}
            Err(e) => warn!(%user, error = %e, "could not restore tracking state"),
        }
    }
    Ok(active)
}
