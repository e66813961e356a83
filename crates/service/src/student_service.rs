use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryOrder};

use models::course;
use models::student::{self, NewStudent, StudentPatch};
use crate::{errors::ServiceError, pagination::Pagination};

pub async fn create_student(db: &DatabaseConnection, input: NewStudent) -> Result<student::Model, ServiceError> {
    Ok(student::create(db, input).await?)
}

pub async fn get_student(db: &DatabaseConnection, id: i32) -> Result<student::Model, ServiceError> {
    student::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("Student"))
}

pub async fn list_students(db: &DatabaseConnection, page: Pagination) -> Result<Vec<student::Model>, ServiceError> {
    let select = student::Entity::find().order_by_asc(student::Column::Id);
    Ok(page.apply(select).all(db).await?)
}

/// Courses a student is enrolled in.
pub async fn list_student_courses(db: &DatabaseConnection, id: i32) -> Result<Vec<course::Model>, ServiceError> {
    let s = get_student(db, id).await?;
    Ok(s.find_related(course::Entity).order_by_asc(course::Column::Id).all(db).await?)
}

pub async fn update_student(db: &DatabaseConnection, id: i32, patch: StudentPatch) -> Result<student::Model, ServiceError> {
    let existing = get_student(db, id).await?;
    let mut am: student::ActiveModel = existing.clone().into();
    patch.apply(&mut am)?;
    if !am.is_changed() {
        return Ok(existing);
    }
    Ok(am.update(db).await?)
}

/// Delete a student. Enrolments go with it; courses are untouched.
pub async fn delete_student(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let res = student::Entity::delete_by_id(id).exec(db).await?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found("Student"));
    }
    Ok(())
}
