//! Integration tests for the product catalog endpoints.

use axum::http::{Method, StatusCode};
use rigo_integration_tests::TestApp;
use serde_json::{Value, json};

fn laptop() -> Value {
    json!({
        "code": "LAP001",
        "name": "Laptop Gaming HP Pavilion",
        "description": "RTX 3060, 16GB RAM",
        "unitPrice": "8500",
        "quantity": 5,
        "category": "Tecnología",
        "image": "laptop.jpg"
    })
}

fn codes(body: &Value) -> Vec<&str> {
    body.as_array()
        .expect("array body")
        .iter()
        .map(|p| p["code"].as_str().expect("code"))
        .collect()
}

// ============================================================================
// CRUD
// ============================================================================

#[tokio::test]
async fn test_laptop_lifecycle() {
    let app = TestApp::new();

    let created = app.post("/api/products", &laptop()).await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["id"], 1);
    assert_eq!(created.body["unitPrice"], "8500");

    let by_category = app.get("/api/products?category=tecnolog%C3%ADa").await;
    assert_eq!(codes(&by_category.body), vec!["LAP001"]);

    let low = app.get("/api/products/low-stock?threshold=5").await;
    assert_eq!(codes(&low.body), vec!["LAP001"]);

    let deleted = app.delete("/api/products/1").await;
    assert_eq!(deleted.status, StatusCode::NO_CONTENT);

    let missing = app.get("/api/products/1").await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    assert!(!app.state.catalog().exists(1.into()).expect("exists"));
}

#[tokio::test]
async fn test_client_supplied_id_is_ignored() {
    let app = TestApp::seeded();

    let mut body = laptop();
    body["id"] = json!(3);
    body["code"] = json!("LAP011");

    let created = app.post("/api/products", &body).await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["id"], 11);

    // Product 3 is untouched
    let tablet = app.get("/api/products/3").await;
    assert_eq!(tablet.body["code"], "TAB003");
}

#[tokio::test]
async fn test_ids_are_not_reused_after_delete() {
    let app = TestApp::new();

    app.post("/api/products", &laptop()).await;
    app.post("/api/products", &laptop()).await;
    app.delete("/api/products/2").await;

    let third = app.post("/api/products", &laptop()).await;
    assert_eq!(third.body["id"], 3);
}

#[tokio::test]
async fn test_update_replaces_fields_but_not_id() {
    let app = TestApp::seeded();

    let mut body = laptop();
    body["id"] = json!(99);
    body["quantity"] = json!(2);

    let updated = app.put("/api/products/8", Some(&body)).await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body["id"], 8);
    assert_eq!(updated.body["code"], "LAP001");

    let fetched = app.get("/api/products/8").await;
    assert_eq!(fetched.body["quantity"], 2);
    assert_eq!(app.state.catalog().count().expect("count"), 10);
}

#[tokio::test]
async fn test_update_missing_is_not_found_and_changes_nothing() {
    let app = TestApp::seeded();
    let before = app.get("/api/products").await.body;

    let response = app.put("/api/products/42", Some(&laptop())).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let after = app.get("/api/products").await.body;
    assert_eq!(before, after);
}

#[tokio::test]
async fn test_delete_missing_is_not_found() {
    let app = TestApp::new();
    let response = app.delete("/api/products/7").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert!(response.message().is_some());
}

#[tokio::test]
async fn test_invalid_input_is_bad_request() {
    let app = TestApp::new();

    let mut negative = laptop();
    negative["unitPrice"] = json!("-1");
    assert_eq!(
        app.post("/api/products", &negative).await.status,
        StatusCode::BAD_REQUEST
    );

    let mut blank_name = laptop();
    blank_name["name"] = json!("  ");
    assert_eq!(
        app.post("/api/products", &blank_name).await.status,
        StatusCode::BAD_REQUEST
    );

    let mut negative_quantity = laptop();
    negative_quantity["quantity"] = json!(-3);
    assert_eq!(
        app.post("/api/products", &negative_quantity).await.status,
        StatusCode::BAD_REQUEST
    );

    assert_eq!(
        app.get("/api/products/abc").await.status,
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        app.get("/api/products/low-stock?threshold=-1").await.status,
        StatusCode::BAD_REQUEST
    );

    assert_eq!(app.state.catalog().count().expect("count"), 0);
}

#[tokio::test]
async fn test_unsupported_method_is_json_405() {
    let app = TestApp::seeded();
    let response = app.send(Method::PATCH, "/api/products/1", None).await;
    assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
    assert!(response.message().is_some());
}

#[tokio::test]
async fn test_product_routes_answer_preflight() {
    let app = TestApp::seeded();

    for path in ["/api/products", "/api/products/1", "/api/products/low-stock"] {
        let response = app.send(Method::OPTIONS, path, None).await;
        assert_eq!(response.status, StatusCode::NO_CONTENT, "{path}");
        assert_eq!(response.body, Value::Null);

        let methods = response
            .header("access-control-allow-methods")
            .expect("allow-methods header");
        assert!(methods.contains("PUT"));
        assert!(methods.contains("DELETE"));
    }

    // Preflight never touches the catalog
    assert_eq!(app.state.catalog().count().expect("count"), 10);
}

// ============================================================================
// Search & Analytics
// ============================================================================

#[tokio::test]
async fn test_list_is_in_insertion_order() {
    let app = TestApp::seeded();
    let response = app.get("/api/products").await;
    assert_eq!(
        codes(&response.body),
        vec![
            "LAP001", "PHN002", "TAB003", "CLT004", "SHO005", "FUR006", "LIG007", "COF008",
            "CHO009", "WEB010"
        ]
    );
}

#[tokio::test]
async fn test_name_search_is_case_insensitive_substring() {
    let app = TestApp::seeded();

    let response = app.get("/api/products?name=CHO").await;
    assert_eq!(codes(&response.body), vec!["CHO009"]);

    let response = app.get("/api/products?name=la").await;
    // Laptop, Galaxy, Plazas, Guatemala, Chocolate
    assert_eq!(
        codes(&response.body),
        vec!["LAP001", "PHN002", "FUR006", "COF008", "CHO009"]
    );
}

#[tokio::test]
async fn test_empty_search_terms_match_nothing() {
    let app = TestApp::seeded();

    for uri in [
        "/api/products?name=",
        "/api/products?category=",
        "/api/products?name=a&category=",
    ] {
        let response = app.get(uri).await;
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body, json!([]), "{uri} should be empty");
    }
}

#[tokio::test]
async fn test_name_and_category_combine() {
    let app = TestApp::seeded();
    let response = app.get("/api/products?name=a&category=hogar").await;
    assert_eq!(codes(&response.body), vec!["FUR006", "LIG007"]);
}

#[tokio::test]
async fn test_low_stock_uses_configured_default() {
    let app = TestApp::seeded();
    let response = app.get("/api/products/low-stock").await;
    assert_eq!(codes(&response.body), vec!["LAP001", "FUR006"]);
}

#[tokio::test]
async fn test_categories_and_inventory_value() {
    let app = TestApp::seeded();

    let categories = app.get("/api/products/categories").await;
    assert_eq!(
        categories.body,
        json!(["Comida", "Hogar", "Ropa", "Servicios", "Tecnología"])
    );

    let value = app.get("/api/products/inventory-value").await;
    assert_eq!(value.status, StatusCode::OK);
    assert_eq!(value.body["totalValue"], "280470");
    assert_eq!(value.body["formatted"], "Q280470.00");
    assert_eq!(value.body["productCount"], 10);
}
