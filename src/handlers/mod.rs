//! # API Handlers
//!
//! This module contains all the HTTP endpoint handlers for the HRMS API.

use crate::models::ServiceInfo;
use axum::response::Json;

pub mod crud;

/// Root handler that returns basic service information
pub async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo::default())
}
