//! End-to-end tests for the students router

mod common;

use axum::{http::StatusCode, Router};
use common::{send, send_raw};
use roster_services::{api, server, state::StudentStore};
use serde_json::{json, Value};

fn app() -> Router {
    api::students::router(StudentStore::shared())
}

async fn create(app: &Router, name: &str) -> Value {
    let (status, body) = send(
        app,
        "POST",
        "/students",
        Some(json!({
            "name": name,
            "email": format!("{}@example.com", name.to_lowercase()),
            "age": 20,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["data"].clone()
}

#[tokio::test]
async fn test_service_info() {
    let (status, body) = send(&app(), "GET", "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"ok": true, "service": "student-api", "endpoints": ["/students"]})
    );
}

#[tokio::test]
async fn test_create_student_envelope() {
    let app = app();
    let (status, body) = send(
        &app,
        "POST",
        "/students",
        Some(json!({"name": "Ada", "email": "ada@example.com", "age": 21})),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Student added successfully");
    assert_eq!(
        body["data"],
        json!({"id": 1, "name": "Ada", "email": "ada@example.com", "age": 21})
    );
}

#[tokio::test]
async fn test_ids_strictly_increase_across_deletions() {
    let app = app();
    let first = create(&app, "Ada").await;
    let second = create(&app, "Grace").await;
    assert_eq!(first["id"], 1);
    assert_eq!(second["id"], 2);

    let (status, _) = send(&app, "DELETE", "/students/2", None).await;
    assert_eq!(status, StatusCode::OK);

    let third = create(&app, "Linus").await;
    assert_eq!(third["id"], 3);
}

#[tokio::test]
async fn test_create_with_non_numeric_age() {
    let (status, body) = send(
        &app(),
        "POST",
        "/students",
        Some(json!({"name": "Ada", "email": "ada@example.com", "age": "abc"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Validation failed");
    assert_eq!(body["errors"], json!(["Age must be a number."]));
}

#[tokio::test]
async fn test_create_with_invalid_email() {
    let (status, body) = send(
        &app(),
        "POST",
        "/students",
        Some(json!({"name": "Ada", "email": "not-an-email", "age": 20})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"], json!(["Invalid email format."]));
}

#[tokio::test]
async fn test_create_without_body() {
    let (status, body) = send(&app(), "POST", "/students", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["errors"],
        json!(["Name is required.", "Email is required.", "Age is required."])
    );
}

#[tokio::test]
async fn test_create_with_malformed_json() {
    let (status, body) = send_raw(&app(), "POST", "/students", Some("{\"name\":")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("Malformed JSON body"));
}

#[tokio::test]
async fn test_update_missing_student() {
    let (status, body) = send(&app(), "PUT", "/students/99", Some(json!({"age": 15}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"success": false, "message": "Student not found"}));
}

#[tokio::test]
async fn test_update_missing_student_wins_over_validation() {
    let (status, _) = send(&app(), "PUT", "/students/99", Some(json!({"age": "abc"}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_partial_update_preserves_other_fields() {
    let app = app();
    create(&app, "Ada").await;

    let (status, body) = send(&app, "PUT", "/students/1", Some(json!({"age": 15}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Student updated successfully");
    assert_eq!(
        body["data"],
        json!({"id": 1, "name": "Ada", "email": "ada@example.com", "age": 15})
    );
}

#[tokio::test]
async fn test_update_validation_failure_leaves_record_untouched() {
    let app = app();
    create(&app, "Ada").await;

    let (status, body) = send(
        &app,
        "PUT",
        "/students/1",
        Some(json!({"email": "broken", "age": 5})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["errors"],
        json!(["Invalid email format.", "Age must be at least 10."])
    );

    let (_, list) = send(&app, "GET", "/students", None).await;
    assert_eq!(list["data"][0]["email"], "ada@example.com");
    assert_eq!(list["data"][0]["age"], 20);
}

#[tokio::test]
async fn test_delete_removes_from_list() {
    let app = app();
    create(&app, "Ada").await;
    create(&app, "Grace").await;

    let (status, body) = send(&app, "DELETE", "/students/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Student deleted successfully");
    assert_eq!(body["data"]["name"], "Ada");

    let (status, list) = send(&app, "GET", "/students", None).await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = list["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Grace"]);
}

#[tokio::test]
async fn test_delete_missing_student() {
    let app = app();
    let (status, _) = send(&app, "DELETE", "/students/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "DELETE", "/students/abc", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_health_check() {
    let (status, body) = send(&app(), "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_layered_router_serves_requests() {
    let app = server::with_http_layers(app(), "student-api");
    create(&app, "Ada").await;

    let (status, body) = send(&app, "GET", "/students", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_create_with_array_body() {
    let app = app();
    let (status, body) = send(
        &app,
        "POST",
        "/students",
        Some(json!(["Ada", "ada@example.com", 20])),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["errors"],
        json!(["Name is required.", "Email is required.", "Age is required."])
    );

    let (_, list) = send(&app, "GET", "/students", None).await;
    assert!(list["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_create_with_scalar_body() {
    let (status, body) = send_raw(&app(), "POST", "/students", Some("42")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("Malformed JSON body"));
}

#[tokio::test]
async fn test_update_with_null_fields_is_rejected() {
    let app = app();
    create(&app, "Ada").await;

    let (status, body) = send(
        &app,
        "PUT",
        "/students/1",
        Some(json!({"age": null, "email": null})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["errors"],
        json!(["Invalid email format.", "Age must be at least 10."])
    );

    let (_, list) = send(&app, "GET", "/students", None).await;
    assert_eq!(list["data"][0]["email"], "ada@example.com");
    assert_eq!(list["data"][0]["age"], 20);
}

#[tokio::test]
async fn test_create_with_long_local_part() {
    let email = format!("{}@example.com", "a".repeat(65));
    let (status, body) = send(
        &app(),
        "POST",
        "/students",
        Some(json!({"name": "Ada", "email": email, "age": 20})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"], json!(["Invalid email format."]));
}

#[tokio::test]
async fn test_create_with_utf8_local_part() {
    let (status, body) = send(
        &app(),
        "POST",
        "/students",
        Some(json!({"name": "José", "email": "josé@example.com", "age": 20})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["email"], "josé@example.com");
}

#[tokio::test]
async fn test_numeric_id_forms_resolve() {
    let app = app();
    create(&app, "Ada").await;

    let (status, body) = send(&app, "PUT", "/students/1.0", Some(json!({"age": 30}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["age"], 30);

    let (status, body) = send(&app, "DELETE", "/students/1e0", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], 1);
}
