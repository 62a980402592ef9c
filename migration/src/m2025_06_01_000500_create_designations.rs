//! Migration to create the designations table.
//!
//! Designation rows reference their department by name only; there is no
//! foreign key to the departments table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Designations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Designations::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Designations::Designation)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Designations::Department).string().not_null())
                    .col(
                        ColumnDef::new(Designations::Date)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Designations::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Designations {
    Table,
    Id,
    Designation,
    Department,
    Date,
}
