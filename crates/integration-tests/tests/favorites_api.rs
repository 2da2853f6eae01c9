//! Integration tests for the favorites endpoints.

use axum::http::{Method, StatusCode};
use rigo_integration_tests::TestApp;
use serde_json::json;

#[tokio::test]
async fn test_toggle_seven_twice() {
    let app = TestApp::new();

    let first = app.send(Method::POST, "/api/favorites/7/toggle", None).await;
    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.body, json!({"id": 7, "favorite": true}));
    assert_eq!(app.get("/api/favorites").await.body["count"], 1);

    let second = app.send(Method::POST, "/api/favorites/7/toggle", None).await;
    assert_eq!(second.body, json!({"id": 7, "favorite": false}));
    assert_eq!(app.get("/api/favorites").await.body["count"], 0);
}

#[tokio::test]
async fn test_add_and_remove_report_changes() {
    let app = TestApp::new();

    let added = app.put("/api/favorites/3", None).await;
    assert_eq!(added.body["changed"], true);
    let again = app.put("/api/favorites/3", None).await;
    assert_eq!(again.body["changed"], false);
    assert_eq!(again.body["favorite"], true);

    let status = app.get("/api/favorites/3").await;
    assert_eq!(status.body, json!({"id": 3, "favorite": true}));

    let removed = app.delete("/api/favorites/3").await;
    assert_eq!(removed.body["changed"], true);
    let absent = app.delete("/api/favorites/3").await;
    assert_eq!(absent.body["changed"], false);
    assert_eq!(absent.body["favorite"], false);
}

#[tokio::test]
async fn test_import_skips_nulls_and_lists_in_order() {
    let app = TestApp::new();
    app.put("/api/favorites/5", None).await;

    let imported = app
        .post("/api/favorites/import", &json!({"ids": [9, null, 1, 5, 9]}))
        .await;
    assert_eq!(imported.status, StatusCode::OK);
    assert_eq!(imported.body, json!({"added": 2}));

    let list = app.get("/api/favorites").await;
    assert_eq!(list.body, json!({"ids": [1, 5, 9], "count": 3}));
}

#[tokio::test]
async fn test_clear() {
    let app = TestApp::new();
    app.post("/api/favorites/import", &json!({"ids": [1, 2, 3]}))
        .await;

    let cleared = app.delete("/api/favorites").await;
    assert_eq!(cleared.body, json!({"ids": [], "count": 0}));
    assert_eq!(app.state.favorites().count().expect("count"), 0);
}

#[tokio::test]
async fn test_favorite_survives_product_delete() {
    let app = TestApp::seeded();

    app.put("/api/favorites/4", None).await;
    assert_eq!(
        app.delete("/api/products/4").await.status,
        StatusCode::NO_CONTENT
    );

    let status = app.get("/api/favorites/4").await;
    assert_eq!(status.body["favorite"], true);
}

#[tokio::test]
async fn test_favorites_need_no_catalog_entry() {
    let app = TestApp::new();
    let response = app.put("/api/favorites/12345", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["changed"], true);
}

#[tokio::test]
async fn test_bad_ids_are_client_errors() {
    let app = TestApp::new();

    assert_eq!(
        app.put("/api/favorites/seven", None).await.status,
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        app.post("/api/favorites/import", &json!({"ids": ["x"]}))
            .await
            .status,
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        app.send(Method::GET, "/api/favorites/1/toggle", None)
            .await
            .status,
        StatusCode::METHOD_NOT_ALLOWED
    );
}

#[tokio::test]
async fn test_handlers_share_one_tracker() {
    let app = TestApp::new();
    app.put("/api/favorites/2", None).await;

    // The tracker held by the state is the one the handlers mutate
    assert!(app.state.favorites().contains(2.into()).expect("contains"));
}

#[tokio::test]
async fn test_favorite_routes_answer_preflight() {
    let app = TestApp::new();

    for path in [
        "/api/favorites",
        "/api/favorites/1",
        "/api/favorites/1/toggle",
        "/api/favorites/import",
    ] {
        let response = app.send(Method::OPTIONS, path, None).await;
        assert_eq!(response.status, StatusCode::NO_CONTENT, "{path}");
        assert_eq!(response.header("access-control-allow-origin"), Some("*"));
    }

    assert_eq!(app.state.favorites().count().expect("count"), 0);
}
