//! Migration to create the assets table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Assets::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Assets::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Assets::AssetName).string().not_null())
                    .col(ColumnDef::new(Assets::AssetId).string())
                    .col(ColumnDef::new(Assets::PurchaseDate).timestamp_with_time_zone())
                    .col(ColumnDef::new(Assets::PurchaseFrom).string())
                    .col(ColumnDef::new(Assets::Manufacturer).string())
                    .col(ColumnDef::new(Assets::Model).string())
                    .col(ColumnDef::new(Assets::Status).integer())
                    .col(ColumnDef::new(Assets::Supplier).string())
                    .col(ColumnDef::new(Assets::AssetCondition).string())
                    .col(ColumnDef::new(Assets::Warranty).string())
                    .col(ColumnDef::new(Assets::Price).integer())
                    .col(ColumnDef::new(Assets::AssetUser).string())
                    .col(ColumnDef::new(Assets::Description).string())
                    .col(ColumnDef::new(Assets::DateTime).timestamp_with_time_zone())
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Assets::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Assets {
    Table,
    Id,
    #[sea_orm(iden = "assetName")]
    AssetName,
    #[sea_orm(iden = "assetId")]
    AssetId,
    #[sea_orm(iden = "purchaseDate")]
    PurchaseDate,
    #[sea_orm(iden = "purchaseFrom")]
    PurchaseFrom,
    Manufacturer,
    Model,
    Status,
    Supplier,
    #[sea_orm(iden = "assetCondition")]
    AssetCondition,
    Warranty,
    Price,
    #[sea_orm(iden = "assetUser")]
    AssetUser,
    Description,
    #[sea_orm(iden = "dateTime")]
    DateTime,
}
