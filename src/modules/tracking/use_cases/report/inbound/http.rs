use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::tracking::core::errors::TrackingError;
use crate::shell::session::CurrentUser;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ReportBody {
    pub start: String,
    pub end: String,
    #[serde(default)]
    pub project: String,
}

pub async fn handle(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    body: Result<Json<ReportBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(e) => {
            return TrackingError::InvalidInput(format!("could not decode request: {e}"))
                .into_response();
        }
    };

    match state
        .reports
        .report(&user, &body.project, &body.start, &body.end)
        .await
    {
        Ok(reports) => Json(reports).into_response(),
        Err(e) => e.into_response(),
    }
}
