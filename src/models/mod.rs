//! # Data Models
//!
//! SeaORM entity models for the HRMS API, one per table, plus small shared
//! response types. JSON field names and physical column names are both
//! camelCase (the wire format this service inherited); explicit
//! `column_name` and serde renames on each entity keep them aligned with the
//! snake_case Rust fields. Every model field carries a serde default so any
//! payload subset deserializes; which columns actually get bound in SQL is
//! decided by payload key presence, not by the defaulted values (see
//! `crate::resource`).

use sea_orm::prelude::DateTimeWithTimeZone;
use serde::{Deserialize, Serialize};

pub mod asset;
pub mod client;
pub mod department;
pub mod designation;
pub mod employee;
pub mod user;
pub mod user_role;

pub use asset::Entity as Asset;
pub use client::Entity as Client;
pub use department::Entity as Department;
pub use designation::Entity as Designation;
pub use employee::Entity as Employee;
pub use user::Entity as User;
pub use user_role::Entity as UserRole;

/// Basic service information response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceInfo {
    /// The name of the service
    pub service: String,
    /// The version of the service
    pub version: String,
}

impl Default for ServiceInfo {
    fn default() -> Self {
        Self {
            service: "hrms-api".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Placeholder for the serde defaults on non-nullable timestamp fields.
/// A defaulted field is never bound in SQL (payload presence decides that),
/// so this value never reaches the database.
pub(crate) fn default_timestamp() -> DateTimeWithTimeZone {
    chrono::Utc::now().fixed_offset()
}
