//! Department entity model

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;
use sea_orm::prelude::DateTimeWithTimeZone;
use serde::{Deserialize, Serialize};

use crate::resource::CrudResource;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "departments")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    #[serde(default)]
    pub id: i32,

    #[sea_orm(column_name = "departmentName")]
    #[serde(default)]
    pub department_name: String,

    /// Creation timestamp, defaulted by the database
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

    const NAME: &'static str = "department";
    const NAME_PASCAL: &'static str = "Department";
    const DISPLAY_NAME: &'static str = "Department";
}
