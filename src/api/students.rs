//! Students API handlers
//!
//! Contains the router and HTTP request handlers for student CRUD operations.
//! Every response is wrapped in a `success`/`message` envelope.

use super::extractors::JsonBody;
use crate::error::AppError;
use crate::state::{SharedStudentStore, Student, StudentId};
use crate::validation::{validate_student, Mode, StudentPayload};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, put},
    Router,
};
use serde::Serialize;
use tracing::{debug, info};

/// Success envelope
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    /// Always true for successful responses
    pub success: bool,
    /// Human-readable message
    pub message: String,
    /// Payload
    pub data: T,
}

impl<T> ApiResponse<T> {
    fn ok(message: &str, data: T) -> Self {
        Self {
            success: true,
            message: message.to_string(),
            data,
        }
    }
}

/// Service metadata returned by `GET /`
#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    /// Always true
    pub ok: bool,
    /// Service name
    pub service: String,
    /// Top-level resource paths
    pub endpoints: Vec<String>,
}

/// Build the students router
pub fn router(store: SharedStudentStore) -> Router {
    Router::new()
        .route("/", get(service_info))
        .route("/health", get(super::health_check))
        .route("/students", get(list_students).post(create_student))
        .route(
            "/students/:id",
            put(update_student).delete(delete_student),
        )
        .with_state(store)
}

/// GET / - Service metadata
pub async fn service_info() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        ok: true,
        service: "student-api".to_string(),
        endpoints: vec!["/students".to_string()],
    })
}

/// GET /students - List all students
pub async fn list_students(
    State(store): State<SharedStudentStore>,
) -> Json<ApiResponse<Vec<Student>>> {
    let store = store.read().await;
    debug!(count = store.len(), "Listing students");
    Json(ApiResponse::ok(
        "Students retrieved successfully",
        store.list().to_vec(),
    ))
}

/// POST /students - Create a new student
pub async fn create_student(
    State(store): State<SharedStudentStore>,
    JsonBody(payload): JsonBody<StudentPayload>,
) -> Result<(StatusCode, Json<ApiResponse<Student>>), AppError> {
    let fields = validate_student(&payload, Mode::Full)
        .into_result()
        .map_err(rejected)?;

    let (Some(name), Some(email), Some(age)) = (fields.name, fields.email, fields.age) else {
        return Err(AppError::Internal(anyhow::anyhow!(
            "Validated student is missing required fields"
        )));
    };

    let student = store.write().await.create(name, email, age);
    info!(student_id = student.id, "Student created");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok("Student added successfully", student)),
    ))
}

/// PUT /students/:id - Update the supplied fields of a student
pub async fn update_student(
    State(store): State<SharedStudentStore>,
    Path(raw_id): Path<String>,
    JsonBody(payload): JsonBody<StudentPayload>,
) -> Result<Json<ApiResponse<Student>>, AppError> {
    let id = parse_id(&raw_id)?;

    // Lookup comes before validation: an unknown id is 404 whatever the body
    let mut store = store.write().await;
    if store.get(id).is_none() {
        return Err(AppError::StudentNotFound(raw_id));
    }

    let fields = validate_student(&payload, Mode::Partial)
        .into_result()
        .map_err(rejected)?;

    let student = store
        .update(id, fields)
        .cloned()
        .ok_or_else(|| AppError::StudentNotFound(raw_id.clone()))?;
    info!(student_id = id, "Student updated");

    Ok(Json(ApiResponse::ok("Student updated successfully", student)))
}

/// DELETE /students/:id - Remove a student
pub async fn delete_student(
    State(store): State<SharedStudentStore>,
    Path(raw_id): Path<String>,
) -> Result<Json<ApiResponse<Student>>, AppError> {
    let id = parse_id(&raw_id)?;
    let removed = store
        .write()
        .await
        .remove(id)
        .ok_or_else(|| AppError::StudentNotFound(raw_id.clone()))?;
    info!(student_id = id, "Student deleted");

    Ok(Json(ApiResponse::ok("Student deleted successfully", removed)))
}

/// Read a path id as a number, so `1`, `1.0` and `1e0` all name student 1
///
/// Anything that is not a finite, non-negative integer cannot match a student.
fn parse_id(raw: &str) -> Result<StudentId, AppError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|id| id.is_finite() && id.fract() == 0.0 && *id >= 0.0 && *id <= u64::MAX as f64)
        .map(|id| id as StudentId)
        .ok_or_else(|| AppError::StudentNotFound(raw.to_string()))
}

fn rejected(errors: Vec<String>) -> AppError {
    debug!(?errors, "Student payload rejected");
    AppError::Validation(errors)
}
