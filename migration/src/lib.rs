//! Database migrations for the HRMS API.
//!
//! This module contains all database migrations using SeaORM Migration.
//! Running `Migrator::up` at startup is what synchronizes the schema with the
//! entity definitions; every migration is `if_not_exists` so the sync never
//! touches existing data.

pub use sea_orm_migration::prelude::*;

mod m2025_06_01_000100_create_employees;
mod m2025_06_01_000200_create_clients;
mod m2025_06_01_000300_create_assets;
mod m2025_06_01_000400_create_departments;
mod m2025_06_01_000500_create_designations;
mod m2025_06_01_000600_create_users;
mod m2025_06_01_000700_create_user_roles;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m2025_06_01_000100_create_employees::Migration),
            Box::new(m2025_06_01_000200_create_clients::Migration),
            Box::new(m2025_06_01_000300_create_assets::Migration),
            Box::new(m2025_06_01_000400_create_departments::Migration),
            Box::new(m2025_06_01_000500_create_designations::Migration),
            Box::new(m2025_06_01_000600_create_users::Migration),
            Box::new(m2025_06_01_000700_create_user_roles::Migration),
        ]
    }
}
