//! Join rows between courses and students.
//!
//! The column names are crossed relative to what they reference:
//! `student_id` holds a course id and `course_id` holds a student id, matching
//! the foreign keys laid down by the `student_course` migration. Callers should
//! go through [`link`] and [`find_link`] rather than filling the columns by hand.

use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};

use crate::{course, errors, student};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "student_course")]
pub struct Model {
    /// References `courses.id`.
    #[sea_orm(primary_key, auto_increment = false)]
    pub student_id: i32,
    /// References `students.id`.
    #[sea_orm(primary_key, auto_increment = false)]
    pub course_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Course,
    Student,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Course => Entity::belongs_to(course::Entity)
                .from(Column::StudentId)
                .to(course::Column::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .into(),
            Relation::Student => Entity::belongs_to(student::Entity)
                .from(Column::CourseId)
                .to(student::Column::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .into(),
        }
    }
}

impl Related<course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl Related<student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Build the join row for `course_id` <-> `student_id`.
pub fn link(course_id: i32, student_id: i32) -> ActiveModel {
    // crossed columns, see module docs
    ActiveModel { student_id: Set(course_id), course_id: Set(student_id) }
}

pub async fn find_link<C: ConnectionTrait>(db: &C, course_id: i32, student_id: i32) -> Result<Option<Model>, errors::ModelError> {
    Ok(Entity::find_by_id((course_id, student_id)).one(db).await?)
}

/// Insert the association unless it already exists. Returns whether a row was written.
pub async fn ensure_link<C: ConnectionTrait>(db: &C, course_id: i32, student_id: i32) -> Result<bool, errors::ModelError> {
    if find_link(db, course_id, student_id).await?.is_some() {
        return Ok(false);
    }
    Entity::insert(link(course_id, student_id)).exec_without_returning(db).await?;
    Ok(true)
}

/// Remove the association. Returns whether a row was deleted.
pub async fn remove_link<C: ConnectionTrait>(db: &C, course_id: i32, student_id: i32) -> Result<bool, errors::ModelError> {
    let res = Entity::delete_by_id((course_id, student_id)).exec(db).await?;
    Ok(res.rows_affected > 0)
}
