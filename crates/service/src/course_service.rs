use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryOrder};
use tracing::info;

use models::course::{self, CoursePatch, NewCourse};
use models::{student, student_course, teacher};
use crate::{errors::ServiceError, pagination::Pagination};

/// Create a course. The referenced teacher is not checked.
pub async fn create_course(db: &DatabaseConnection, input: NewCourse) -> Result<course::Model, ServiceError> {
    Ok(course::create(db, input).await?)
}

/// Get course by id.
pub async fn get_course(db: &DatabaseConnection, id: i32) -> Result<course::Model, ServiceError> {
    course::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("Course"))
}

/// List courses in id order.
pub async fn list_courses(db: &DatabaseConnection, page: Pagination) -> Result<Vec<course::Model>, ServiceError> {
    let select = course::Entity::find().order_by_asc(course::Column::Id);
    Ok(page.apply(select).all(db).await?)
}

/// Teacher of a course; `None` when the course points at a teacher that does not exist.
pub async fn get_course_teacher(db: &DatabaseConnection, id: i32) -> Result<Option<teacher::Model>, ServiceError> {
    let c = get_course(db, id).await?;
    Ok(c.find_related(teacher::Entity).one(db).await?)
}

/// Students enrolled in a course.
pub async fn list_course_students(db: &DatabaseConnection, id: i32) -> Result<Vec<student::Model>, ServiceError> {
    let c = get_course(db, id).await?;
    Ok(c.find_related(student::Entity).order_by_asc(student::Column::Id).all(db).await?)
}

pub async fn update_course(db: &DatabaseConnection, id: i32, patch: CoursePatch) -> Result<course::Model, ServiceError> {
    let existing = get_course(db, id).await?;
    let mut am: course::ActiveModel = existing.clone().into();
    patch.apply(&mut am)?;
    if !am.is_changed() {
        return Ok(existing);
    }
    Ok(am.update(db).await?)
}

/// Enrol a student. Enrolling twice leaves a single association.
pub async fn add_student(db: &DatabaseConnection, course_id: i32, student_id: i32) -> Result<course::Model, ServiceError> {
    let c = get_course(db, course_id).await?;
    if student::Entity::find_by_id(student_id).one(db).await?.is_none() {
        return Err(ServiceError::not_found("Student"));
    }
    let inserted = student_course::ensure_link(db, course_id, student_id).await?;
    info!(course_id, student_id, inserted, "student enrolled");
    Ok(c)
}

/// Drop an enrolment. Dropping one that does not exist is not an error.
pub async fn remove_student(db: &DatabaseConnection, course_id: i32, student_id: i32) -> Result<course::Model, ServiceError> {
    let c = get_course(db, course_id).await?;
    if student::Entity::find_by_id(student_id).one(db).await?.is_none() {
        return Err(ServiceError::not_found("Student"));
    }
    let removed = student_course::remove_link(db, course_id, student_id).await?;
    info!(course_id, student_id, removed, "student unenrolled");
    Ok(c)
}

/// Delete a course. Its enrolments go with it; students are untouched.
pub async fn delete_course(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let res = course::Entity::delete_by_id(id).exec(db).await?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found("Course"));
    }
    Ok(())
}
