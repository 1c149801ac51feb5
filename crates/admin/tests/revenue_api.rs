mod common;

use common::TestServer;
use reqwest::StatusCode;
use serde_json::Value;

struct Seeded {
    srv: TestServer,
    category_x: i64,
    product_a: i64,
    product_b: i64,
}

/// Product A (price 10) and B (price 50) in category X; A sold 2 units on
/// 2024-01-05, B sold 1 unit on 2024-02-01.
async fn seeded() -> Seeded {
    let srv = TestServer::spawn().await;

    let category_x = srv.create_category("X").await;
    let product_a = srv.create_product(category_x, "A", 10).await;
    let product_b = srv.create_product(category_x, "B", 50).await;

    srv.record_sale(product_a, 2, "2024-01-05T12:00:00").await;
    srv.record_sale(product_b, 1, "2024-02-01T09:00:00").await;

    Seeded {
        srv,
        category_x,
        product_a,
        product_b,
    }
}

fn totals(body: &Value) -> (i64, i64, i64) {
    let data = &body["data"];
    (
        data["total_revenue"].as_i64().unwrap(),
        data["total_units"].as_i64().unwrap(),
        data["count"].as_i64().unwrap(),
    )
}

#[tokio::test]
async fn revenue_by_category_sums_every_product_in_it() {
    let s = seeded().await;

    let (status, body) = s
        .srv
        .get(&format!("/api/revenue?category_id={}", s.category_x))
        .await;

    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["status"], "success");
    assert_eq!(totals(&body), (70, 3, 2));
    assert_eq!(body["data"]["filter"]["category_id"], s.category_x);
}

#[tokio::test]
async fn revenue_by_date_range_includes_the_whole_end_day() {
    let s = seeded().await;

    let (status, body) = s
        .srv
        .get("/api/revenue?start_date=2024-02-01&end_date=2024-02-28")
        .await;

    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(totals(&body), (50, 1, 1));

    let (_, body) = s
        .srv
        .get("/api/revenue?start_date=2024-01-01&end_date=2024-01-05")
        .await;
    assert_eq!(totals(&body), (20, 2, 1));
}

#[tokio::test]
async fn revenue_by_product_restricts_to_that_product() {
    let s = seeded().await;

    let (status, body) = s
        .srv
        .get(&format!("/api/revenue?product_id={}", s.product_b))
        .await;

    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(totals(&body), (50, 1, 1));
}

#[tokio::test]
async fn no_matching_sales_is_a_zero_result() {
    let s = seeded().await;

    let (status, body) = s
        .srv
        .get("/api/revenue?start_date=2030-01-01&end_date=2030-12-31")
        .await;

    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(totals(&body), (0, 0, 0));
}

#[tokio::test]
async fn inverted_range_wins_over_unknown_identifiers() {
    let s = seeded().await;

    let (status, body) = s
        .srv
        .get("/api/revenue?start_date=2024-03-01&end_date=2024-02-01&product_id=999")
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
    assert_eq!(body["status"], "error");
    assert_eq!(body["code"], "invalid_range");
}

#[tokio::test]
async fn unknown_product_or_category_is_not_found() {
    let s = seeded().await;

    let (status, body) = s.srv.get("/api/revenue?product_id=999").await;
    assert_eq!(status, StatusCode::NOT_FOUND, "{body}");
    assert_eq!(body["code"], "not_found");

    let (status, body) = s.srv.get("/api/revenue?category_id=999").await;
    assert_eq!(status, StatusCode::NOT_FOUND, "{body}");
    assert_eq!(body["code"], "not_found");
}

#[tokio::test]
async fn malformed_filters_are_validation_errors() {
    let s = seeded().await;

    for query in [
        "start_date=yesterday",
        "end_date=",
        "start_date=2024-02-30",
        "product_id=0",
        "category_id=-3",
        "product_id=abc",
        "group_by=hour",
    ] {
        let (status, body) = s.srv.get(&format!("/api/revenue?{query}")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{query}: {body}");
        assert_eq!(body["code"], "validation_error", "{query}");
    }
}

#[tokio::test]
async fn grouped_revenue_adds_up_to_the_total() {
    let s = seeded().await;
    let (status, body) = s.srv.get("/api/revenue?group_by=product").await;

    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["data"]["group_by"], "product");

    let groups = body["data"]["groups"].as_array().unwrap();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0]["key"], s.product_a.to_string());
    assert_eq!(groups[0]["total_revenue"], 20);
    assert_eq!(groups[1]["key"], s.product_b.to_string());
    assert_eq!(groups[1]["total_revenue"], 50);

    let sum: i64 = groups
        .iter()
        .map(|g| g["total_revenue"].as_i64().unwrap())
        .sum();
    assert_eq!(sum, totals(&body).0);

    let (_, body) = s.srv.get("/api/revenue?group_by=month").await;
    let keys: Vec<&str> = body["data"]["groups"]
        .as_array()
        .unwrap()
        .iter()
        .map(|g| g["key"].as_str().unwrap())
        .collect();
    assert_eq!(keys, vec!["2024-01", "2024-02"]);
}

#[tokio::test]
async fn explicit_unit_price_is_what_revenue_counts() {
    let s = seeded().await;

    let (status, body) = s
        .srv
        .post(
            "/api/sales",
            serde_json::json!({
                "product_id": s.product_a,
                "quantity": 3,
                "unit_price": 7,
                "sale_date": "2024-03-10"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    assert_eq!(body["data"]["revenue"], 21);

    let (_, body) = s
        .srv
        .get(&format!("/api/revenue?product_id={}", s.product_a))
        .await;
    assert_eq!(totals(&body), (41, 5, 2));
}

#[tokio::test]
async fn oversized_amounts_are_rejected_before_recording() {
    let s = seeded().await;

    let (status, body) = s
        .srv
        .post(
            "/api/sales",
            serde_json::json!({
                "product_id": s.product_a,
                "quantity": 2,
                "unit_price": i64::MAX
            }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
    assert_eq!(body["code"], "validation_error");

    let (status, body) = s
        .srv
        .post(
            "/api/products",
            serde_json::json!({ "category_id": s.category_x, "name": "Gold", "price": i64::MAX }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");

    // nothing was stored, so reads over the data still work
    let (status, body) = s.srv.get("/api/revenue").await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(totals(&body), (70, 3, 2));
}

#[tokio::test]
async fn largest_accepted_sale_still_aggregates() {
    let s = seeded().await;

    let (status, body) = s
        .srv
        .post(
            "/api/sales",
            serde_json::json!({
                "product_id": s.product_b,
                "quantity": 1_000_000,
                "unit_price": 1_000_000_000_000i64,
                "sale_date": "2024-02-02"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    assert_eq!(body["data"]["revenue"], 1_000_000_000_000_000_000i64);

    let (status, body) = s.srv.get("/api/revenue").await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(
        totals(&body),
        (1_000_000_000_000_000_070, 1_000_003, 3)
    );

    let (status, body) = s.srv.get("/api/sales").await;
    assert_eq!(status, StatusCode::OK, "{body}");
}

#[tokio::test]
async fn period_breakdown_uses_calendar_windows() {
    let s = seeded().await;

    let (status, body) = s.srv.get("/api/revenue/periods?start_date=2024-01-01").await;
    assert_eq!(status, StatusCode::OK, "{body}");

    let periods = body["data"]["periods"].as_array().unwrap();
    let by_name = |name: &str| {
        periods
            .iter()
            .find(|p| p["period"] == name)
            .unwrap_or_else(|| panic!("missing {name}"))
            .clone()
    };

    assert_eq!(by_name("daily")["total_revenue"], 0);
    assert_eq!(by_name("weekly")["total_revenue"], 20);
    assert_eq!(by_name("monthly")["total_revenue"], 20);
    assert_eq!(
        by_name("monthly")["end_date"],
        "2024-01-31T23:59:59.999999"
    );
    assert_eq!(by_name("annual")["total_revenue"], 70);
    assert_eq!(by_name("annual")["count"], 2);
}

#[tokio::test]
async fn december_monthly_window_stays_in_the_same_year() {
    let s = seeded().await;

    let (status, body) = s
        .srv
        .get(&format!(
            "/api/revenue/periods?start_date=2023-12-15&category_id={}",
            s.category_x
        ))
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");

    let monthly = body["data"]["periods"]
        .as_array()
        .unwrap()
        .iter()
        .find(|p| p["period"] == "monthly")
        .unwrap()
        .clone();
    assert_eq!(monthly["end_date"], "2023-12-31T23:59:59.999999");
    assert_eq!(monthly["count"], 0);
}

#[tokio::test]
async fn end_date_closes_the_daily_window() {
    let s = seeded().await;

    let (status, body) = s
        .srv
        .get("/api/revenue/periods?start_date=2024-01-01&end_date=2024-01-31")
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["data"]["filter"]["end_date"], "2024-01-31T23:59:59.999999");

    let daily = body["data"]["periods"]
        .as_array()
        .unwrap()
        .iter()
        .find(|p| p["period"] == "daily")
        .unwrap()
        .clone();
    assert_eq!(daily["end_date"], "2024-01-31T23:59:59.999999");
    assert_eq!(daily["total_revenue"], 20);
    assert_eq!(daily["count"], 1);
}

#[tokio::test]
async fn period_end_date_is_validated_like_the_revenue_filter() {
    let s = seeded().await;

    let (status, body) = s
        .srv
        .get("/api/revenue/periods?start_date=2024-02-01&end_date=2024-01-01&product_id=404")
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
    assert_eq!(body["code"], "invalid_range");

    let (status, body) = s
        .srv
        .get("/api/revenue/periods?start_date=2024-01-01&end_date=soon")
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
    assert_eq!(body["code"], "validation_error");
}

#[tokio::test]
async fn period_breakdown_requires_a_start_date() {
    let s = seeded().await;

    let (status, body) = s.srv.get("/api/revenue/periods").await;
    assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
    assert_eq!(body["code"], "validation_error");

    let (status, body) = s
        .srv
        .get("/api/revenue/periods?start_date=2024-01-01&product_id=404")
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND, "{body}");
}

#[tokio::test]
async fn sales_listing_shares_the_revenue_filter() {
    let s = seeded().await;

    let (status, body) = s
        .srv
        .get(&format!("/api/sales?category_id={}&page_size=1", s.category_x))
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["pagination"]["total_items"], 2);
    assert_eq!(body["pagination"]["total_pages"], 2);
    // newest first
    assert_eq!(body["data"][0]["product_id"], s.product_b);

    let (status, body) = s
        .srv
        .get("/api/sales?start_date=2024-02-02&end_date=2024-02-01")
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
    assert_eq!(body["code"], "invalid_range");
}
