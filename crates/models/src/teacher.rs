use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};

use crate::{course, errors, patch::Patch};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "teachers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub years_of_experience: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Course,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Course => Entity::has_many(course::Entity).into(),
        }
    }
}

impl Related<course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct NewTeacher {
    pub first_name: String,
    pub last_name: String,
    pub years_of_experience: i32,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct TeacherPatch {
    #[serde(default)]
    pub first_name: Patch<String>,
    #[serde(default)]
    pub last_name: Patch<String>,
    #[serde(default)]
    pub years_of_experience: Patch<i32>,
}

impl TeacherPatch {
    /// Copy every supplied field onto `am`.
    pub fn apply(self, am: &mut ActiveModel) -> Result<(), errors::ModelError> {
        if let Some(v) = self.first_name.required("first_name")? { am.first_name = Set(v); }
        if let Some(v) = self.last_name.required("last_name")? { am.last_name = Set(v); }
        if let Some(v) = self.years_of_experience.required("years_of_experience")? { am.years_of_experience = Set(v); }
        Ok(())
    }
}

pub async fn create<C: ConnectionTrait>(db: &C, input: NewTeacher) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        first_name: Set(input.first_name),
        last_name: Set(input.last_name),
        years_of_experience: Set(input.years_of_experience),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}
