use crate::modules::tracking::adapters::outbound::projects_in_memory::InMemoryProjectStore;
use crate::modules::tracking::core::ports::RecordStore;
use crate::shell::http::router;
use crate::shell::reconcile::reconcile;
use crate::shell::state::AppState;
use crate::tests::fixtures::app::{TEST_USER, make_test_app, request, send};
use axum::http::StatusCode;
use chrono::TimeDelta;
use serde_json::json;
use std::sync::Arc;

#[tokio::test]
async fn tracks_a_working_day_through_the_http_api() {
    let app = make_test_app().await;

    let (status, _) = send(
        router(app.state.clone()),
        request("POST", "/projects/start/timetrace", None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    app.clock.advance(TimeDelta::minutes(30));
    let (status, json) = send(
        router(app.state.clone()),
        request("POST", "/projects/start/gardening", None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["name"], "gardening");

    app.clock.advance(TimeDelta::minutes(15));
    let (status, json) = send(router(app.state.clone()), request("GET", "/status", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        json!({
            "current": "gardening",
            "elapsed": "00:15 ( 0.3 Hours)",
            "current_total": "00:15 ( 0.3 Hours)",
            "daily_total": "00:45 ( 0.8 Hours)",
            "durations": [
                { "project": "gardening", "elapsed": "00:15 ( 0.3 Hours)" },
                { "project": "timetrace", "elapsed": "00:30 ( 0.5 Hours)" }
            ]
        })
    );

    let (status, _) = send(router(app.state.clone()), request("POST", "/projects/stop", None)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let records = app.state.record_store.list_by_user(TEST_USER).await.unwrap();
    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| !r.is_open()));
    assert!(!app.state.tracking.state().is_active(TEST_USER).await);
}

#[tokio::test]
async fn keeps_at_most_one_open_record_per_user() {
    let app = make_test_app().await;

    for (minutes, project) in [(0, "timetrace"), (5, "gardening"), (10, "timetrace"), (20, "timetrace")] {
        app.clock.advance(TimeDelta::minutes(minutes));
        app.state.tracking.start(TEST_USER, project).await.unwrap();

        let open = app
            .state
            .record_store
            .list_by_user(TEST_USER)
            .await
            .unwrap()
            .into_iter()
            .filter(|r| r.is_open())
            .count();
        assert_eq!(open, 1);
    }

    app.state.tracking.start("bob", "gardening").await.unwrap();
    let open_total = app
        .state
        .record_store
        .list_all()
        .await
        .unwrap()
        .into_iter()
        .filter(|r| r.is_open())
        .count();
    assert_eq!(open_total, 2);
}

#[tokio::test]
async fn resumes_tracking_after_a_restart() {
    let app = make_test_app().await;
    app.state.tracking.start(TEST_USER, "timetrace").await.unwrap();
    app.clock.advance(TimeDelta::minutes(40));

    // A fresh cache over the same record store, as after a process restart.
    let restarted = AppState::new(
        app.state.record_store.clone(),
        Arc::new(InMemoryProjectStore::new()),
        app.clock.clone(),
    );
    let (_, json) = send(router(restarted.clone()), request("GET", "/status", None)).await;
    assert_eq!(json["current"], "");

    // Without the project in the catalog the open record cannot be resolved.
    assert_eq!(reconcile(&restarted).await.unwrap(), 0);
    assert_eq!(reconcile(&app.state).await.unwrap(), 1);
}
