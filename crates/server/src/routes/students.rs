use axum::{extract::{Path, Query, State}, Json};
use tracing::info;

use common::types::Message;
use models::course;
use models::student::{self, NewStudent, StudentPatch};
use service::student_service;

use crate::{errors::ApiError, extract::Input, routes::ListQuery, state::AppState};

#[utoipa::path(
    post, path = "/students/", tag = "students",
    request_body = crate::openapi::NewStudentDoc,
    responses((status = 200, description = "Created", body = crate::openapi::StudentDoc))
)]
pub async fn create(State(state): State<AppState>, Input(input): Input<NewStudent>) -> Result<Json<student::Model>, ApiError> {
    let s = student_service::create_student(&state.db, input).await?;
    info!(id = s.id, "created student");
    Ok(Json(s))
}

#[utoipa::path(
    get, path = "/students/{id}", tag = "students",
    params(("id" = i32, Path, description = "Student ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::StudentDoc),
        (status = 404, description = "Student not found")
    )
)]
pub async fn get(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Json<student::Model>, ApiError> {
    Ok(Json(student_service::get_student(&state.db, id).await?))
}

#[utoipa::path(
    get, path = "/students/", tag = "students",
    params(ListQuery),
    responses((status = 200, description = "OK", body = [crate::openapi::StudentDoc]))
)]
pub async fn list(State(state): State<AppState>, Query(q): Query<ListQuery>) -> Result<Json<Vec<student::Model>>, ApiError> {
    Ok(Json(student_service::list_students(&state.db, q.into()).await?))
}

#[utoipa::path(
    get, path = "/students/{id}/courses", tag = "students",
    params(("id" = i32, Path, description = "Student ID")),
    responses(
        (status = 200, description = "OK", body = [crate::openapi::CourseDoc]),
        (status = 404, description = "Student not found")
    )
)]
pub async fn read_courses(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Json<Vec<course::Model>>, ApiError> {
    Ok(Json(student_service::list_student_courses(&state.db, id).await?))
}

#[utoipa::path(
    put, path = "/students/{id}", tag = "students",
    params(("id" = i32, Path, description = "Student ID")),
    request_body = crate::openapi::StudentPatchDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::StudentDoc),
        (status = 404, description = "Student not found"),
        (status = 422, description = "Field may not be null")
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Input(patch): Input<StudentPatch>,
) -> Result<Json<student::Model>, ApiError> {
    let s = student_service::update_student(&state.db, id, patch).await?;
    info!(id = s.id, "updated student");
    Ok(Json(s))
}

#[utoipa::path(
    delete, path = "/students/{id}", tag = "students",
    params(("id" = i32, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::MessageDoc),
        (status = 404, description = "Student not found")
    )
)]
pub async fn delete(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Json<Message>, ApiError> {
    student_service::delete_student(&state.db, id).await?;
    info!(id, "deleted student");
    Ok(Json(Message::deleted("Student", id)))
}
