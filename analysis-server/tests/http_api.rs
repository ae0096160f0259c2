//! HTTP surface tests: routing, status mapping, JSON shapes.

use analysis_server::api::build_app;
use analysis_server::{Config, ServerState};
use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

fn app() -> (Router, ServerState) {
    let state = ServerState::initialize(&Config::default());
    let app = build_app(state.clone()).with_state(state.clone());
    (app, state)
}

async fn read_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn post(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_health() {
    let (app, _) = app();
    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_country_crud_and_analysis_table() {
    let (app, state) = app();

    let response = app
        .clone()
        .oneshot(post(
            "/api/countries",
            json!({
                "name": "Morocco",
                "currency": "MAD",
                "isoCode": "MA",
                "defaultShipping": 5.0,
                "defaultCod": 0.0,
                "defaultReturn": 2.0
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let country = read_json(response).await;
    let country_id = country["id"].as_str().unwrap().to_string();

    let response = app
        .clone()
        .oneshot(post(
            "/api/products",
            json!({
                "sku": "SKU-1",
                "name": "Blender",
                "status": "ACTIVE",
                "cost": 15.0,
                "price": 59.0,
                "countryIds": [country_id]
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let product = read_json(response).await;
    let product_id = product["id"].as_str().unwrap().to_string();

    // Edit two cells through the override endpoint.
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("PATCH")
                .uri(format!("/api/analysis/{country_id}/overrides/{product_id}"))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    json!({"revenue": 590.0, "deliveredOrders": 10.0}).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(get(&format!("/api/analysis/{country_id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let table = read_json(response).await;
    assert_eq!(table["currency"], "MAD");
    assert_eq!(table["rows"][0]["revenue"], 590.0);
    // 10 delivered * (5 + 0 + 2) default fees
    assert_eq!(table["rows"][0]["serviceFees"], 70.0);
    // No ads and no delivered quantity: cpa is null, not 0.
    assert!(table["totals"]["cpa"].is_null());

    assert_eq!(state.catalog.list_countries().len(), 1);
}

#[tokio::test]
async fn test_unknown_country_maps_to_404_envelope() {
    let (app, _) = app();
    let response = app.oneshot(get("/api/analysis/missing")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = read_json(response).await;
    assert_eq!(body["code"], 1001);
    assert_eq!(body["details"]["id"], "missing");
}

#[tokio::test]
async fn test_validation_error_maps_to_400() {
    let (app, _) = app();
    let response = app
        .oneshot(post(
            "/api/countries",
            json!({
                "name": "",
                "currency": "MAD",
                "isoCode": "MA",
                "defaultShipping": 0.0,
                "defaultCod": 0.0,
                "defaultReturn": 0.0
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = read_json(response).await;
    assert_eq!(body["code"], 2);
}

#[tokio::test]
async fn test_snapshot_capture_requires_rows() {
    let (app, _) = app();

    let response = app
        .clone()
        .oneshot(post(
            "/api/countries",
            json!({
                "name": "Senegal",
                "currency": "XOF",
                "isoCode": "SN",
                "defaultShipping": 3.0,
                "defaultCod": 1.0,
                "defaultReturn": 1.0
            }),
        ))
        .await
        .unwrap();
    let country = read_json(response).await;
    let country_id = country["id"].as_str().unwrap();

    // No products assigned yet: capturing must fail with the empty-rows
    // error, not create a hollow snapshot.
    let response = app
        .oneshot(post(
            "/api/snapshots",
            json!({"periodName": "March", "countryId": country_id}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json(response).await;
    assert_eq!(body["code"], 3003);
}

#[tokio::test]
async fn test_simulation_compute() {
    let (app, _) = app();
    let response = app
        .oneshot(post(
            "/api/simulation/compute",
            json!({
                "totalOrders": 100.0,
                "confirmationRate": 60.0,
                "deliveryRate": 50.0,
                "sellingPrice": 59.0,
                "productCost": 15.0,
                "serviceFee": 7.0,
                "adsCost": 300.0,
                "otherCost": 50.0
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json(response).await;
    assert_eq!(body["deliveredOrders"], 30.0);
    assert_eq!(body["totalProfit"], 760.0);
    assert_eq!(body["cpd"], 32.0);
}
