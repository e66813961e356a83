use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};

use crate::{errors, patch::Patch, student, student_course, teacher};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub teacher_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Teacher,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Teacher => Entity::belongs_to(teacher::Entity)
                .from(Column::TeacherId)
                .to(teacher::Column::Id)
                .into(),
        }
    }
}

impl Related<teacher::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Teacher.def()
    }
}

// Many-to-many through `student_course`
impl Related<student::Entity> for Entity {
    fn to() -> RelationDef {
        student_course::Relation::Student.def()
    }

    fn via() -> Option<RelationDef> {
        Some(student_course::Relation::Course.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct NewCourse {
    pub teacher_id: i32,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct CoursePatch {
    #[serde(default)]
    pub title: Patch<String>,
    #[serde(default)]
    pub description: Patch<String>,
    #[serde(default)]
    pub teacher_id: Patch<i32>,
}

impl CoursePatch {
    pub fn apply(self, am: &mut ActiveModel) -> Result<(), errors::ModelError> {
        if let Some(v) = self.title.required("title")? { am.title = Set(v); }
        if let Some(v) = self.description.nullable() { am.description = Set(v); }
        if let Some(v) = self.teacher_id.required("teacher_id")? { am.teacher_id = Set(v); }
        Ok(())
    }
}

/// Insert a course. `teacher_id` is stored as given, even if no such teacher exists.
pub async fn create<C: ConnectionTrait>(db: &C, input: NewCourse) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        title: Set(input.title),
        description: Set(input.description),
        teacher_id: Set(input.teacher_id),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}
