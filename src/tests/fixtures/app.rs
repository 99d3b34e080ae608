// Shared test fixture for the HTTP layer: a fully wired AppState over in memory stores,
// plus a helper that sends one request and decodes the JSON answer.

use crate::modules::tracking::adapters::outbound::projects_in_memory::InMemoryProjectStore;
use crate::modules::tracking::adapters::outbound::records_in_memory::InMemoryRecordStore;
use crate::modules::tracking::core::ports::ProjectStore;
use crate::shell::session::USER_HEADER;
use crate::shell::state::AppState;
use crate::tests::fixtures::clock::{FixedClock, local};
use crate::tests::fixtures::projects::{make_inactive_project, make_project};
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

pub const TEST_USER: &str = "alice";

pub struct TestApp {
    pub state: AppState,
    pub clock: Arc<FixedClock>,
}

/// Projects `timetrace` and `gardening` (active) and `archived` (inactive); clock at 09:00.
pub async fn make_test_app() -> TestApp {
    make_test_app_with(InMemoryRecordStore::new()).await
}

pub async fn make_test_app_with(records: InMemoryRecordStore) -> TestApp {
    let projects = InMemoryProjectStore::new();
    for project in [
        make_project("timetrace"),
        make_project("gardening"),
        make_inactive_project("archived"),
    ] {
        projects.save(&project).await.unwrap();
    }
    let clock = Arc::new(FixedClock::at(local(9, 0)));
    let state = AppState::new(Arc::new(records), Arc::new(projects), clock.clone());
    TestApp { state, clock }
}

#[allow(dead_code)]
pub fn request(method: &str, uri: &str, body: Option<&str>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(USER_HEADER, TEST_USER);
    match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Sends `request` and returns the status with the body parsed as JSON (`Null` when empty).
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}
