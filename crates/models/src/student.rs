use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};

use crate::{course, errors, patch::Patch, student_course};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    // courses are reached through student_course
    fn def(&self) -> RelationDef {
        match *self {}
    }
}

impl Related<course::Entity> for Entity {
    fn to() -> RelationDef {
        student_course::Relation::Course.def()
    }

    fn via() -> Option<RelationDef> {
        Some(student_course::Relation::Student.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct NewStudent {
    pub first_name: String,
    pub last_name: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct StudentPatch {
    #[serde(default)]
    pub first_name: Patch<String>,
    #[serde(default)]
    pub last_name: Patch<String>,
}

impl StudentPatch {
    pub fn apply(self, am: &mut ActiveModel) -> Result<(), errors::ModelError> {
        if let Some(v) = self.first_name.required("first_name")? { am.first_name = Set(v); }
        if let Some(v) = self.last_name.required("last_name")? { am.last_name = Set(v); }
        Ok(())
    }
}

pub async fn create<C: ConnectionTrait>(db: &C, input: NewStudent) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        first_name: Set(input.first_name),
        last_name: Set(input.last_name),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}
