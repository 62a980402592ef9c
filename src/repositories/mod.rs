//! # Repository Layer
//!
//! This module contains the repository implementation that encapsulates
//! SeaORM operations for database entities, providing a clean API for data
//! access. All seven resources share the one generic repository.

pub mod crud;

pub use crud::CrudRepository;
