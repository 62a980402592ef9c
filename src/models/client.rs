//! Client entity model
//!
//! This module contains the SeaORM entity model for the clients table.

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;
use sea_orm::prelude::DateTimeWithTimeZone;
use serde::{Deserialize, Serialize};

use crate::resource::CrudResource;

/// Client record. Only the email carries a constraint (unique, required);
/// everything else is free-form contact data.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "clients")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    /// Unique identifier for the client (primary key)
    #[sea_orm(primary_key)]
    #[serde(default)]
    pub id: i32,

    #[sea_orm(column_name = "firstName")]
    pub first_name: Option<String>,

    #[sea_orm(column_name = "lastName")]
    pub last_name: Option<String>,

    #[sea_orm(column_name = "userName")]
    pub user_name: Option<String>,

    /// Unique across all clients
    #[serde(default)]
    pub email: String,

    pub password: Option<String>,

    /// Company-assigned client number
    #[sea_orm(column_name = "clientId")]
    pub client_id: Option<String>,

    pub phone: Option<String>,

    pub company: Option<String>,

    pub address: Option<String>,

    /// Numeric status flag (semantics owned by the UI)
    pub status: Option<i32>,

    pub picture: Option<String>,

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

    const NAME: &'static str = "client";
    const NAME_PASCAL: &'static str = "Client";
    const DISPLAY_NAME: &'static str = "Client";
}
