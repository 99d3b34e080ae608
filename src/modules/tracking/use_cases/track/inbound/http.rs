use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::shell::session::CurrentUser;
use crate::shell::state::AppState;

pub async fn start(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(name): Path<String>,
) -> impl IntoResponse {
    match state.tracking.start(&user, &name).await {
        Ok(project) => Json(project).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn stop(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> impl IntoResponse {
    match state.tracking.stop(&user).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => e.into_response(),
    }
}
