use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter, QueryOrder,
    TransactionTrait,
};
use tracing::info;

use models::course;
use models::teacher::{self, NewTeacher, TeacherPatch};
use crate::{errors::ServiceError, pagination::Pagination};

/// Create a teacher.
pub async fn create_teacher(db: &DatabaseConnection, input: NewTeacher) -> Result<teacher::Model, ServiceError> {
    Ok(teacher::create(db, input).await?)
}

/// Get teacher by id.
pub async fn get_teacher(db: &DatabaseConnection, id: i32) -> Result<teacher::Model, ServiceError> {
    teacher::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("Teacher"))
}

/// List teachers in id order.
pub async fn list_teachers(db: &DatabaseConnection, page: Pagination) -> Result<Vec<teacher::Model>, ServiceError> {
    let select = teacher::Entity::find().order_by_asc(teacher::Column::Id);
    Ok(page.apply(select).all(db).await?)
}

/// Apply the supplied fields of `patch`; untouched fields keep their values.
pub async fn update_teacher(db: &DatabaseConnection, id: i32, patch: TeacherPatch) -> Result<teacher::Model, ServiceError> {
    let existing = get_teacher(db, id).await?;
    let mut am: teacher::ActiveModel = existing.clone().into();
    patch.apply(&mut am)?;
    if !am.is_changed() {
        return Ok(existing);
    }
    Ok(am.update(db).await?)
}

/// Delete a teacher together with every course pointing at it.
pub async fn delete_teacher(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let txn = db.begin().await?;
    let existing = teacher::Entity::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or_else(|| ServiceError::not_found("Teacher"))?;
    let removed = course::Entity::delete_many()
        .filter(course::Column::TeacherId.eq(id))
        .exec(&txn)
        .await?;
    existing.delete(&txn).await?;
    txn.commit().await?;
    info!(teacher_id = id, courses_removed = removed.rows_affected, "teacher deleted");
    Ok(())
}

/// Courses owned by a teacher.
pub async fn list_teacher_courses(db: &DatabaseConnection, id: i32) -> Result<Vec<course::Model>, ServiceError> {
    let t = get_teacher(db, id).await?;
    Ok(t.find_related(course::Entity).order_by_asc(course::Column::Id).all(db).await?)
}
