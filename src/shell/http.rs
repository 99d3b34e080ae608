use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::json;
use tracing::error;

use crate::modules::tracking::core::errors::TrackingError;
use crate::modules::tracking::use_cases::projects::inbound::http as projects_http;
use crate::modules::tracking::use_cases::records::inbound::http as records_http;
use crate::modules::tracking::use_cases::report::inbound::http as report_http;
use crate::modules::tracking::use_cases::status::inbound::http as status_http;
use crate::modules::tracking::use_cases::track::inbound::http as track_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/projects", get(projects_http::list).post(projects_http::add))
        .route("/projects/stop", post(track_http::stop))
        .route("/projects/start/{name}", post(track_http::start))
        .route("/projects/{name}", get(projects_http::get))
        .route("/projects/{name}/active", post(projects_http::set_active))
        .route("/status", get(status_http::handle))
        .route("/reports", post(report_http::handle))
        .route(
            "/records/{id}",
            get(records_http::get)
                .post(records_http::edit)
                .delete(records_http::delete),
        )
        .with_state(state)
}

impl IntoResponse for TrackingError {
    fn into_response(self) -> Response {
        let status = match &self {
            TrackingError::NotFound(_) => StatusCode::NOT_FOUND,
            TrackingError::InvalidState(_) => StatusCode::CONFLICT,
            TrackingError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            TrackingError::Storage { .. } => {
                error!(error = %self, "request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
