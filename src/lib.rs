//! # HRMS API Library
//!
//! This library provides the core functionality for the HRMS API service,
//! including handlers, models, and server configuration.

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod resource;
pub mod server;
pub mod telemetry;
pub use migration;
