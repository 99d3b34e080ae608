use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::tracking::core::errors::TrackingError;
use crate::modules::tracking::use_cases::records::handler::EditRecord;
use crate::shell::session::CurrentUser;
use crate::shell::state::AppState;

pub async fn get(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match state.records.get(&id).await {
        Ok(record) => Json(record).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn edit(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(id): Path<String>,
    body: Result<Json<EditRecord>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(e) => {
            return TrackingError::InvalidInput(format!("could not decode request: {e}"))
                .into_response();
        }
    };
    match state.records.edit(&id, &body).await {
        Ok(record) => Json(record).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn delete(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match state.records.delete(&id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => e.into_response(),
    }
}
