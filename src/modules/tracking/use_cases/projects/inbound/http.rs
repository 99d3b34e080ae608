use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::tracking::core::errors::TrackingError;
use crate::shell::session::CurrentUser;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct AddProjectBody {
    pub name: String,
}

#[derive(Deserialize)]
pub struct SetActiveBody {
    pub active: bool,
}

pub async fn list(State(state): State<AppState>, _user: CurrentUser) -> impl IntoResponse {
    match state.projects.list().await {
        Ok(projects) => Json(projects).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn add(
    State(state): State<AppState>,
    _user: CurrentUser,
    body: Result<Json<AddProjectBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(e) => {
            return TrackingError::InvalidInput(format!("could not decode request: {e}"))
                .into_response();
        }
    };
    match state.projects.add(&body.name).await {
        Ok(project) => (StatusCode::CREATED, Json(project)).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn get(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(name): Path<String>,
) -> impl IntoResponse {
    match state.projects.get(&name).await {
        Ok(project) => Json(project).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn set_active(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(name): Path<String>,
    body: Result<Json<SetActiveBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(e) => {
            return TrackingError::InvalidInput(format!("could not decode request: {e}"))
                .into_response();
        }
    };
    match state.projects.set_active(&name, body.active).await {
        Ok(project) => Json(project).into_response(),
        Err(e) => e.into_response(),
    }
}
