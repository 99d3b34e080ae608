use crate::modules::tracking::core::ports::RecordStore;
use crate::shell::http::router;
use crate::tests::fixtures::app::{TEST_USER, make_test_app, request, send};
use crate::tests::fixtures::clock::local;
use crate::tests::fixtures::records::RecordBuilder;
use axum::http::StatusCode;
use chrono::TimeDelta;

#[tokio::test]
async fn reports_and_status_draw_the_day_boundary_at_midnight() {
    let app = make_test_app().await;
    let at_midnight = RecordBuilder::new()
        .user(TEST_USER)
        .project("timetrace")
        .start(local(0, 0))
        .closed_after(TimeDelta::minutes(30))
        .build();
    app.state.record_store.save(&at_midnight).await.unwrap();
    app.state.tracking.start(TEST_USER, "timetrace").await.unwrap();
    app.clock.advance(TimeDelta::hours(1));
    app.state.tracking.stop(TEST_USER).await.unwrap();

    // Status only counts records started strictly after today's midnight.
    let (_, json) = send(router(app.state.clone()), request("GET", "/status", None)).await;
    assert_eq!(json["daily_total"], "01:00 ( 1.0 Hours)");

    // A range starting the day before covers the midnight record.
    let (status, json) = send(
        router(app.state.clone()),
        request(
            "POST",
            "/reports",
            Some(r#"{"start":"2024-03-11","end":"2024-03-12"}"#),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json[0]["project"], "timetrace");
    assert_eq!(json[0]["total"], "01:30 ( 1.5 Hours)");
    assert_eq!(json[0]["items"].as_array().unwrap().len(), 2);

    // The lower bound is exclusive, so the same-day range leaves it out as well.
    let (_, json) = send(
        router(app.state),
        request(
            "POST",
            "/reports",
            Some(r#"{"start":"2024-03-12","end":"2024-03-12"}"#),
        ),
    )
    .await;
    assert_eq!(json[0]["total_seconds"], 3600);
}

#[tokio::test]
async fn reports_only_the_requesting_users_time() {
    let app = make_test_app().await;
    app.state.tracking.start(TEST_USER, "gardening").await.unwrap();
    app.state.tracking.start("bob", "timetrace").await.unwrap();
    app.clock.advance(TimeDelta::minutes(12));

    let (status, json) = send(
        router(app.state.clone()),
        request(
            "POST",
            "/reports",
            Some(r#"{"start":"2024-03-12","end":"2024-03-12"}"#),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let rows = json.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["project"], "gardening");
    assert_eq!(rows[0]["total"], "00:12 ( 0.2 Hours)");

    // Reporting does not close running records.
    let records = app.state.record_store.list_by_user(TEST_USER).await.unwrap();
    assert!(records[0].is_open());
}
