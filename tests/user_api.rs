//! User API integration tests
//!
//! Drives the assembled router through full HTTP request/response cycles.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use serde_json::{json, Value};
use tower::util::ServiceExt;
use userdir::http_server::HttpServer;

/// Build the application router (clones share the same store)
fn app() -> Router {
    HttpServer::new().router()
}

async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, payload: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn sample_user(email: &str) -> Value {
    json!({
        "name": "Ana",
        "surname": "Lee",
        "email": email,
        "company": "Acme",
        "jobTitle": "Engineer"
    })
}

async fn create_user(app: &Router, payload: &Value) -> Response {
    app.clone()
        .oneshot(json_request("POST", "/api/users", payload))
        .await
        .unwrap()
}

#[tokio::test]
async fn create_returns_created_user() {
    let app = app();

    let response = create_user(&app, &sample_user("ana@example.com")).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let user = body_json(response).await;
    assert!(!user["id"].as_str().unwrap().is_empty());
    assert_eq!(user["name"], "Ana");
    assert_eq!(user["surname"], "Lee");
    assert_eq!(user["email"], "ana@example.com");
    assert_eq!(user["company"], "Acme");
    assert_eq!(user["jobTitle"], "Engineer");
}

#[tokio::test]
async fn create_trims_whitespace() {
    let app = app();

    let payload = json!({
        "name": " Ana ",
        "surname": "Lee",
        "email": "a@x.com",
        "company": "Acme",
        "jobTitle": "Eng"
    });

    let response = create_user(&app, &payload).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let user = body_json(response).await;
    assert_eq!(user["name"], "Ana");
    assert_eq!(user["email"], "a@x.com");
}

#[tokio::test]
async fn create_assigns_unique_ids() {
    let app = app();

    let first = body_json(create_user(&app, &sample_user("a@example.com")).await).await;
    let second = body_json(create_user(&app, &sample_user("b@example.com")).await).await;

    assert_ne!(first["id"], second["id"]);
}

#[tokio::test]
async fn create_rejects_missing_field() {
    let app = app();

    let payload = json!({
        "name": "Ana",
        "email": "ana@example.com",
        "company": "Acme",
        "jobTitle": "Engineer"
    });

    let response = create_user(&app, &payload).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Missing required field: surname");
}

#[tokio::test]
async fn create_rejects_whitespace_only_field() {
    let app = app();

    let mut payload = sample_user("ana@example.com");
    payload["jobTitle"] = json!("   ");

    let response = create_user(&app, &payload).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Missing required field: jobTitle");
}

#[tokio::test]
async fn create_reports_first_missing_field_in_fixed_order() {
    let app = app();

    // name, company, and jobTitle are all missing; name comes first.
    let payload = json!({
        "surname": "Lee",
        "email": "ana@example.com"
    });

    let response = create_user(&app, &payload).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Missing required field: name");
}

#[tokio::test]
async fn create_rejects_duplicate_email() {
    let app = app();

    let response = create_user(&app, &sample_user("dup@example.com")).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = create_user(&app, &sample_user("dup@example.com")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Email already exists");
}

#[tokio::test]
async fn create_rejects_malformed_json() {
    let app = app();

    let request = Request::builder()
        .method("POST")
        .uri("/api/users")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert!(!body["error"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn list_is_empty_initially() {
    let app = app();

    let response = app.oneshot(get("/api/users")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body, json!({ "users": [] }));
}

#[tokio::test]
async fn list_preserves_insertion_order() {
    let app = app();

    create_user(&app, &sample_user("first@example.com")).await;
    create_user(&app, &sample_user("second@example.com")).await;

    let response = app.oneshot(get("/api/users")).await.unwrap();
    let body = body_json(response).await;

    let users = body["users"].as_array().unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[0]["email"], "first@example.com");
    assert_eq!(users[1]["email"], "second@example.com");
}

#[tokio::test]
async fn put_returns_record_unchanged() {
    let app = app();

    let created = body_json(create_user(&app, &sample_user("ana@example.com")).await).await;
    let id = created["id"].as_str().unwrap();

    // Changed field values in the body are parsed but never applied.
    let update = json!({
        "name": "Renamed",
        "surname": "Changed",
        "email": "other@example.com",
        "company": "Other",
        "jobTitle": "Manager"
    });

    let response = app
        .clone()
        .oneshot(json_request("PUT", &format!("/api/users/{}", id), &update))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["name"], "Ana");
    assert_eq!(body["email"], "ana@example.com");
    assert_eq!(body["jobTitle"], "Engineer");

    // The stored record is untouched too.
    let listed = body_json(app.oneshot(get("/api/users")).await.unwrap()).await;
    assert_eq!(listed["users"][0]["name"], "Ana");
}

#[tokio::test]
async fn put_unknown_id_returns_not_found() {
    let app = app();

    let uri = "/api/users/00000000-0000-4000-8000-000000000000";
    let response = app
        .oneshot(json_request("PUT", uri, &json!({"name": "X"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["error"], "User not found");
}

#[tokio::test]
async fn put_malformed_id_returns_not_found() {
    let app = app();

    let response = app
        .oneshot(json_request("PUT", "/api/users/not-a-uuid", &json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_removes_record() {
    let app = app();

    let created = body_json(create_user(&app, &sample_user("ana@example.com")).await).await;
    let id = created["id"].as_str().unwrap();

    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/api/users/{}", id))
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["message"], "User deleted successfully");
    assert_eq!(body["user"]["id"], created["id"]);
    assert_eq!(body["user"]["email"], "ana@example.com");

    // The record no longer appears in listings.
    let listed = body_json(app.oneshot(get("/api/users")).await.unwrap()).await;
    assert_eq!(listed["users"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn delete_unknown_id_returns_not_found() {
    let app = app();

    let request = Request::builder()
        .method("DELETE")
        .uri("/api/users/00000000-0000-4000-8000-000000000000")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["error"], "User not found");
}

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let app = app();

    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
}
