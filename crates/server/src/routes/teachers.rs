use axum::{extract::{Path, Query, State}, Json};
use serde::Deserialize;
use tracing::info;

use common::types::Message;
use models::course::{self, NewCourse};
use models::teacher::{self, NewTeacher, TeacherPatch};
use service::{course_service, teacher_service};

use crate::{errors::ApiError, extract::Input, routes::ListQuery, state::AppState};

/// Body of `POST /teachers/{id}/courses/`; the teacher comes from the path.
#[derive(Debug, Deserialize)]
pub struct TeacherCourseInput {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[utoipa::path(
    post, path = "/teachers/", tag = "teachers",
    request_body = crate::openapi::NewTeacherDoc,
    responses((status = 200, description = "Created", body = crate::openapi::TeacherDoc))
)]
pub async fn create(State(state): State<AppState>, Input(input): Input<NewTeacher>) -> Result<Json<teacher::Model>, ApiError> {
    let t = teacher_service::create_teacher(&state.db, input).await?;
    info!(id = t.id, "created teacher");
    Ok(Json(t))
}

#[utoipa::path(
    get, path = "/teachers/{id}", tag = "teachers",
    params(("id" = i32, Path, description = "Teacher ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::TeacherDoc),
        (status = 404, description = "Teacher not found")
    )
)]
pub async fn get(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Json<teacher::Model>, ApiError> {
    Ok(Json(teacher_service::get_teacher(&state.db, id).await?))
}

#[utoipa::path(
    get, path = "/teachers/", tag = "teachers",
    params(ListQuery),
    responses((status = 200, description = "OK", body = [crate::openapi::TeacherDoc]))
)]
pub async fn list(State(state): State<AppState>, Query(q): Query<ListQuery>) -> Result<Json<Vec<teacher::Model>>, ApiError> {
    Ok(Json(teacher_service::list_teachers(&state.db, q.into()).await?))
}

#[utoipa::path(
    put, path = "/teachers/{id}", tag = "teachers",
    params(("id" = i32, Path, description = "Teacher ID")),
    request_body = crate::openapi::TeacherPatchDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::TeacherDoc),
        (status = 404, description = "Teacher not found"),
        (status = 422, description = "Field may not be null")
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Input(patch): Input<TeacherPatch>,
) -> Result<Json<teacher::Model>, ApiError> {
    let t = teacher_service::update_teacher(&state.db, id, patch).await?;
    info!(id = t.id, "updated teacher");
    Ok(Json(t))
}

#[utoipa::path(
    delete, path = "/teachers/{id}", tag = "teachers",
    params(("id" = i32, Path, description = "Teacher ID")),
    responses(
        (status = 200, description = "Deleted along with its courses", body = crate::openapi::MessageDoc),
        (status = 404, description = "Teacher not found")
    )
)]
pub async fn delete(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Json<Message>, ApiError> {
    teacher_service::delete_teacher(&state.db, id).await?;
    Ok(Json(Message::deleted("Teacher", id)))
}

#[utoipa::path(
    get, path = "/teachers/{id}/courses/", tag = "teachers",
    params(("id" = i32, Path, description = "Teacher ID")),
    responses(
        (status = 200, description = "OK", body = [crate::openapi::CourseDoc]),
        (status = 404, description = "Teacher not found")
    )
)]
pub async fn list_courses(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Json<Vec<course::Model>>, ApiError> {
    Ok(Json(teacher_service::list_teacher_courses(&state.db, id).await?))
}

#[utoipa::path(
    post, path = "/teachers/{id}/courses/", tag = "teachers",
    params(("id" = i32, Path, description = "Teacher ID")),
    request_body = crate::openapi::TeacherCourseDoc,
    responses((status = 200, description = "Created", body = crate::openapi::CourseDoc))
)]
pub async fn create_course(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Input(input): Input<TeacherCourseInput>,
) -> Result<Json<course::Model>, ApiError> {
    let input = NewCourse { teacher_id: id, title: input.title, description: input.description };
    let c = course_service::create_course(&state.db, input).await?;
    info!(id = c.id, teacher_id = id, "created course");
    Ok(Json(c))
}
