//! Designation entity model

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;
use sea_orm::prelude::DateTimeWithTimeZone;
use serde::{Deserialize, Serialize};

use crate::resource::CrudResource;

/// Job title within a department. The department field is the department's
/// name, not a foreign key.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "designations")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    #[serde(default)]
    pub id: i32,

    #[serde(default)]
    pub designation: String,

    #[serde(default)]
    pub department: String,

    #[serde(default = "super::default_timestamp")]
    pub date: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl CrudResource for Entity {
    type Entity = Entity;
    type Model = Model;
    type ActiveModel = ActiveModel;
    type PrimaryKey = PrimaryKey;

    const NAME: &'static str = "designation";
    const NAME_PASCAL: &'static str = "Designation";
    const DISPLAY_NAME: &'static str = "Designation";
}
