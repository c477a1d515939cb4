//! Student HTTP Routes
//!
//! `/` is the collection, `/:id` a single student. Mounted under `/students`.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::store::Student;
use crate::students::{parse_body, ApiResult, NewStudent, StudentPatch, StudentService};

/// Response to a successful delete
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: &'static str,
    pub removed: Student,
}

/// Create student routes
pub fn student_routes(service: Arc<StudentService>) -> Router {
    Router::new()
        .route("/", get(list_students_handler).post(create_student_handler))
        .route(
            "/:id",
            get(get_student_handler)
                .put(update_student_handler)
                .delete(delete_student_handler),
        )
        .with_state(service)
}

async fn list_students_handler(
    State(service): State<Arc<StudentService>>,
) -> ApiResult<Json<Vec<Student>>> {
    Ok(Json(service.list()?))
}

async fn get_student_handler(
    State(service): State<Arc<StudentService>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Student>> {
    Ok(Json(service.get(&id)?))
}

async fn create_student_handler(
    State(service): State<Arc<StudentService>>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<Student>)> {
    let body = parse_body(&body)?;
    let new = NewStudent::from_body(&body)?;
    let student = service.create(new)?;
    Ok((StatusCode::CREATED, Json(student)))
}

async fn update_student_handler(
    State(service): State<Arc<StudentService>>,
    Path(id): Path<String>,
    body: Bytes,
) -> ApiResult<Json<Student>> {
    let patch = match parse_body(&body) {
        Ok(body) => StudentPatch::from_body(&body),
        Err(e) => {
            // An unknown id reports 404 even when the body is unreadable.
            service.get(&id)?;
            return Err(e.into());
        }
    };
    Ok(Json(service.update(&id, patch)?))
}

async fn delete_student_handler(
    State(service): State<Arc<StudentService>>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let removed = service.delete(&id)?;
    Ok(Json(DeleteResponse {
        message: "Deleted",
        removed,
    }))
}
