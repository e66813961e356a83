use axum::{extract::{Path, Query, State}, Json};
use tracing::info;

use common::types::Message;
use models::course::{self, CoursePatch, NewCourse};
use models::{student, teacher};
use service::course_service;

use crate::{errors::ApiError, extract::Input, routes::ListQuery, state::AppState};

#[utoipa::path(
    post, path = "/courses/", tag = "courses",
    request_body = crate::openapi::NewCourseDoc,
    responses((status = 200, description = "Created", body = crate::openapi::CourseDoc))
)]
pub async fn create(State(state): State<AppState>, Input(input): Input<NewCourse>) -> Result<Json<course::Model>, ApiError> {
    let c = course_service::create_course(&state.db, input).await?;
    info!(id = c.id, teacher_id = c.teacher_id, "created course");
    Ok(Json(c))
}

#[utoipa::path(
    get, path = "/courses/{id}", tag = "courses",
    params(("id" = i32, Path, description = "Course ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::CourseDoc),
        (status = 404, description = "Course not found")
    )
)]
pub async fn get(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Json<course::Model>, ApiError> {
    Ok(Json(course_service::get_course(&state.db, id).await?))
}

#[utoipa::path(
    get, path = "/courses/", tag = "courses",
    params(ListQuery),
    responses((status = 200, description = "OK", body = [crate::openapi::CourseDoc]))
)]
pub async fn list(State(state): State<AppState>, Query(q): Query<ListQuery>) -> Result<Json<Vec<course::Model>>, ApiError> {
    Ok(Json(course_service::list_courses(&state.db, q.into()).await?))
}

#[utoipa::path(
    get, path = "/courses/{id}/teacher", tag = "courses",
    params(("id" = i32, Path, description = "Course ID")),
    responses(
        (status = 200, description = "Owning teacher, or null if it no longer exists", body = crate::openapi::TeacherDoc),
        (status = 404, description = "Course not found")
    )
)]
pub async fn read_teacher(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Json<Option<teacher::Model>>, ApiError> {
    Ok(Json(course_service::get_course_teacher(&state.db, id).await?))
}

#[utoipa::path(
    get, path = "/courses/{id}/students", tag = "courses",
    params(("id" = i32, Path, description = "Course ID")),
    responses(
        (status = 200, description = "OK", body = [crate::openapi::StudentDoc]),
        (status = 404, description = "Course not found")
    )
)]
pub async fn read_students(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Json<Vec<student::Model>>, ApiError> {
    Ok(Json(course_service::list_course_students(&state.db, id).await?))
}

#[utoipa::path(
    put, path = "/courses/{id}", tag = "courses",
    params(("id" = i32, Path, description = "Course ID")),
    request_body = crate::openapi::CoursePatchDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::CourseDoc),
        (status = 404, description = "Course not found"),
        (status = 422, description = "Field may not be null")
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Input(patch): Input<CoursePatch>,
) -> Result<Json<course::Model>, ApiError> {
    let c = course_service::update_course(&state.db, id, patch).await?;
    info!(id = c.id, "updated course");
    Ok(Json(c))
}

#[utoipa::path(
    put, path = "/courses/{id}/{student_id}", tag = "courses",
    params(
        ("id" = i32, Path, description = "Course ID"),
        ("student_id" = i32, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Student enrolled", body = crate::openapi::CourseDoc),
        (status = 404, description = "Course or student not found")
    )
)]
pub async fn add_student(
    State(state): State<AppState>,
    Path((id, student_id)): Path<(i32, i32)>,
) -> Result<Json<course::Model>, ApiError> {
    Ok(Json(course_service::add_student(&state.db, id, student_id).await?))
}

#[utoipa::path(
    delete, path = "/courses/{id}/{student_id}", tag = "courses",
    params(
        ("id" = i32, Path, description = "Course ID"),
        ("student_id" = i32, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Student unenrolled", body = crate::openapi::CourseDoc),
        (status = 404, description = "Course or student not found")
    )
)]
pub async fn remove_student(
    State(state): State<AppState>,
    Path((id, student_id)): Path<(i32, i32)>,
) -> Result<Json<course::Model>, ApiError> {
    Ok(Json(course_service::remove_student(&state.db, id, student_id).await?))
}

#[utoipa::path(
    delete, path = "/courses/{id}", tag = "courses",
    params(("id" = i32, Path, description = "Course ID")),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::MessageDoc),
        (status = 404, description = "Course not found")
    )
)]
pub async fn delete(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Json<Message>, ApiError> {
    course_service::delete_course(&state.db, id).await?;
    info!(id, "deleted course");
    Ok(Json(Message::deleted("Course", id)))
}
