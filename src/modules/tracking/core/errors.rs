use thiserror::Error;

use crate::modules::tracking::core::ports::StoreError;

#[derive(Debug, Error)]
pub enum TrackingError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("invalid state: {0}")]
    InvalidState(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("storage error while {operation}: {source}")]
    Storage {
        operation: String,
        #[source]
        source: StoreError,
    },
}

impl TrackingError {
    /// Wraps a store failure with the operation and identifier it happened on.
    ///
    /// ```ignore
    /// store.list_by_user(user).await.map_err(TrackingError::storage(format!("listing records of {user}")))?;
    /// ```
    pub fn storage(operation: impl Into<String>) -> impl FnOnce(StoreError) -> Self {
        let operation = operation.into();
        move |source| Self::Storage { operation, source }
    }
}
