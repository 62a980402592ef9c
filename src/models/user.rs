//! User entity model
//!
//! Application login accounts. Every column besides the key is optional; the
//! original system filled these in lazily from a profile screen.

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;
use sea_orm::prelude::DateTimeWithTimeZone;
use serde::{Deserialize, Serialize};

use crate::resource::CrudResource;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    #[serde(default)]
    pub id: i32,

    #[sea_orm(column_name = "firstName")]
    pub first_name: Option<String>,

    #[sea_orm(column_name = "lastName")]
    pub last_name: Option<String>,

    #[sea_orm(column_name = "userName")]
    pub user_name: Option<String>,

    pub email: Option<String>,

    pub password: Option<String>,

    pub phone: Option<String>,

    pub address: Option<String>,

    pub picture: Option<String>,

    #[sea_orm(column_name = "dateTime")]
    pub date_time: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl CrudResource for Entity {
    type Entity = Entity;
    type Model = Model;
    type ActiveModel = ActiveModel;
    type PrimaryKey = PrimaryKey;

    const NAME: &'static str = "user";
    const NAME_PASCAL: &'static str = "User";
    const DISPLAY_NAME: &'static str = "User";
}
