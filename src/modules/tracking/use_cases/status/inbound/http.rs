use axum::{Json, extract::State, response::IntoResponse};

use crate::shell::session::CurrentUser;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> impl IntoResponse {
    match state.status.status(&user, state.clock.now()).await {
        Ok(status) => Json(status).into_response(),
        Err(e) => e.into_response(),
    }
}
