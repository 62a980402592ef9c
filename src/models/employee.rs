//! Employee entity model
//!
//! This module contains the SeaORM entity model for the employees table,
//! the core HR records of the system.

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;
use sea_orm::prelude::DateTimeWithTimeZone;
use serde::{Deserialize, Serialize};

use crate::resource::CrudResource;

/// Employee record. Department and designation are stored as plain strings,
/// not references to the departments/designations tables.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "employees")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    /// Unique identifier for the employee (primary key)
    #[sea_orm(primary_key)]
    #[serde(default)]
    pub id: i32,

    #[sea_orm(column_name = "firstName")]
    #[serde(default)]
    pub first_name: String,

    #[sea_orm(column_name = "lastName")]
    #[serde(default)]
    pub last_name: String,

    #[sea_orm(column_name = "userName")]
    #[serde(default)]
    pub user_name: String,

    /// Unique across all employees
    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub password: String,

    /// Company-assigned badge number, unique across all employees
    #[sea_orm(column_name = "employeeId")]
    #[serde(default)]
    pub employee_id: String,

    #[serde(default)]
    pub phone: String,

    /// Department name, free text
    #[serde(default)]
    pub department: String,

    /// Designation name, free text
    #[serde(default)]
    pub designation: String,

    #[sea_orm(column_name = "joiningDate")]
    #[serde(default = "super::default_timestamp")]
    pub joining_date: DateTimeWithTimeZone,

    pub picture: Option<String>,

    /// Timestamp the record was captured
    #[sea_orm(column_name = "dateTime")]
    #[serde(default = "super::default_timestamp")]
    pub date_time: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl CrudResource for Entity {
    type Entity = Entity;
    type Model = Model;
    type ActiveModel = ActiveModel;
    type PrimaryKey = PrimaryKey;

    const NAME: &'static str = "employee";
    const NAME_PASCAL: &'static str = "Employee";
    const DISPLAY_NAME: &'static str = "Employee";
}
