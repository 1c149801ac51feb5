mod common;

use common::TestServer;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn category_names_are_unique() {
    let srv = TestServer::spawn().await;
    srv.create_category("Books").await;

    let (status, body) = srv.post("/api/categories", json!({ "name": "Books" })).await;
    assert_eq!(status, StatusCode::CONFLICT, "{body}");
    assert_eq!(body["code"], "conflict");
}

#[tokio::test]
async fn category_can_be_renamed_and_searched() {
    let srv = TestServer::spawn().await;
    let id = srv.create_category("Garden").await;
    srv.create_category("Kitchen").await;

    let (status, body) = srv
        .put(&format!("/api/categories/{id}"), json!({ "name": "Outdoor" }))
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["data"]["name"], "Outdoor");

    let (status, body) = srv.get("/api/categories?search=out").await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["pagination"]["total_items"], 1);
    assert_eq!(body["data"][0]["id"], id);

    let (status, body) = srv
        .put("/api/categories/77", json!({ "name": "Nowhere" }))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND, "{body}");
}

#[tokio::test]
async fn product_requires_an_existing_category() {
    let srv = TestServer::spawn().await;

    let (status, body) = srv
        .post(
            "/api/products",
            json!({ "category_id": 9, "name": "Lamp", "price": 1500 }),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND, "{body}");
    assert_eq!(body["code"], "not_found");
}

#[tokio::test]
async fn product_body_is_validated() {
    let srv = TestServer::spawn().await;
    let category = srv.create_category("Toys").await;

    let (status, body) = srv
        .post(
            "/api/products",
            json!({ "category_id": category, "name": "", "price": 0 }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
    assert_eq!(body["code"], "validation_error");
    assert!(body["details"]["price"].is_array(), "{body}");
    assert!(body["details"]["name"].is_array(), "{body}");

    let (status, body) = srv
        .post("/api/products", json!({ "category_id": category }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
    assert_eq!(body["code"], "validation_error");
}

#[tokio::test]
async fn products_list_filters_by_category() {
    let srv = TestServer::spawn().await;
    let toys = srv.create_category("Toys").await;
    let tools = srv.create_category("Tools").await;
    srv.create_product(toys, "Kite", 900).await;
    srv.create_product(tools, "Hammer", 2500).await;
    srv.create_product(tools, "Saw", 3100).await;

    let (status, body) = srv.get(&format!("/api/products?category_id={tools}")).await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["pagination"]["total_items"], 2);

    let (status, body) = srv.get("/api/products?page_size=500").await;
    assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
}

#[tokio::test]
async fn inventory_update_is_an_upsert() {
    let srv = TestServer::spawn().await;
    let category = srv.create_category("Office").await;
    let product = srv.create_product(category, "Stapler", 700).await;

    let (status, body) = srv.get(&format!("/api/inventory/{product}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND, "{body}");

    let (status, first) = srv
        .put(
            &format!("/api/inventory/{product}"),
            json!({ "stock_quantity": 12 }),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{first}");

    let (status, second) = srv
        .put(
            &format!("/api/inventory/{product}"),
            json!({ "stock_quantity": 0 }),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{second}");
    assert_eq!(second["data"]["id"], first["data"]["id"]);
    assert_eq!(second["data"]["stock_quantity"], 0);

    let (_, body) = srv.get("/api/inventory?low_stock_threshold=5").await;
    assert_eq!(body["pagination"]["total_items"], 1);
}

#[tokio::test]
async fn inventory_rejects_negative_stock_and_unknown_products() {
    let srv = TestServer::spawn().await;

    let (status, body) = srv
        .put("/api/inventory/1", json!({ "stock_quantity": -1 }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");

    let (status, body) = srv
        .put("/api/inventory/1", json!({ "stock_quantity": 4 }))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND, "{body}");
}

#[tokio::test]
async fn sale_takes_price_and_category_from_the_product() {
    let srv = TestServer::spawn().await;
    let category = srv.create_category("Audio").await;
    let product = srv.create_product(category, "Headphones", 4999).await;

    let (status, body) = srv
        .post("/api/sales", json!({ "product_id": product, "quantity": 2 }))
        .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    assert_eq!(body["data"]["category_id"], category);
    assert_eq!(body["data"]["unit_price"], 4999);
    assert_eq!(body["data"]["revenue"], 9998);

    let id = body["data"]["id"].as_i64().unwrap();
    let (status, body) = srv.get(&format!("/api/sales/{id}")).await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["data"]["quantity"], 2);
}

#[tokio::test]
async fn sale_for_unknown_product_is_not_found() {
    let srv = TestServer::spawn().await;

    let (status, body) = srv
        .post("/api/sales", json!({ "product_id": 3, "quantity": 1 }))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND, "{body}");

    let (status, body) = srv
        .post("/api/sales", json!({ "product_id": 3, "quantity": 0 }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
}

#[tokio::test]
async fn metrics_endpoint_exposes_service_counters() {
    let srv = TestServer::spawn().await;
    srv.get("/api/revenue").await;

    let res = srv.client.get(srv.url("/metrics")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let text = res.text().await.unwrap();
    assert!(text.contains("revenue_service_request_counter"));
    assert!(text.contains("sale_query_service_request_duration"));
    assert!(text.contains("process_start_time_seconds"));
    assert!(text.contains("system_available_memory_kilobytes"));
}
