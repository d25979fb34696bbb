use axum::body::Body;
use axum::http::{header, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use stockroom_api::{build_router, AppState};
use stockroom_core::Store;
use tower::ServiceExt;

/// Router over a fresh, isolated store
#[allow(dead_code)]
pub fn test_app() -> Router {
    build_router(AppState::new(Store::new()))
}

/// Send one request through the router
#[allow(dead_code)]
pub async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

/// Build a GET request
#[allow(dead_code)]
pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

/// Build a DELETE request
#[allow(dead_code)]
pub fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Build a request carrying a JSON body
#[allow(dead_code)]
pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap()
}

/// Collect a response body as JSON
#[allow(dead_code)]
pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create a category through the API, returning its assigned id
#[allow(dead_code)]
pub async fn seed_category(app: &Router, name: &str) -> u64 {
    let response = send(app, json_request("POST", "/categories", json!({ "name": name }))).await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await["id"].as_u64().unwrap()
}

/// Create a product through the API, returning its assigned id
#[allow(dead_code)]
pub async fn seed_product(app: &Router, category_id: u64, name: &str) -> u64 {
    let body = json!({
        "categoryId": category_id,
        "name": name,
        "priceCents": 1_000,
        "quantity": 5,
    });
    let response = send(app, json_request("POST", "/products", body)).await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await["id"].as_u64().unwrap()
}
