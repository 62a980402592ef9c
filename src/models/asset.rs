//! Asset entity model
//!
//! This module contains the SeaORM entity model for the assets table,
//! which tracks company equipment and who it is issued to.

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;
use sea_orm::prelude::DateTimeWithTimeZone;
use serde::{Deserialize, Serialize};

use crate::resource::CrudResource;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "assets")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    /// Unique identifier for the asset (primary key)
    #[sea_orm(primary_key)]
    #[serde(default)]
    pub id: i32,

    #[sea_orm(column_name = "assetName")]
    #[serde(default)]
    pub asset_name: String,

    /// Inventory tag, free text
    #[sea_orm(column_name = "assetId")]
    pub asset_id: Option<String>,

    #[sea_orm(column_name = "purchaseDate")]
    pub purchase_date: Option<DateTimeWithTimeZone>,

    #[sea_orm(column_name = "purchaseFrom")]
    pub purchase_from: Option<String>,

    pub manufacturer: Option<String>,

    pub model: Option<String>,

    /// Numeric status flag (semantics owned by the UI)
    pub status: Option<i32>,

    pub supplier: Option<String>,

    #[sea_orm(column_name = "assetCondition")]
    pub asset_condition: Option<String>,

    pub warranty: Option<String>,

    /// Purchase price in whole currency units
    pub price: Option<i32>,

    /// Name of the employee the asset is issued to
    #[sea_orm(column_name = "assetUser")]
    pub asset_user: Option<String>,

    pub description: Option<String>,

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

    const NAME: &'static str = "asset";
    const NAME_PASCAL: &'static str = "Asset";
    const DISPLAY_NAME: &'static str = "Asset";
}
