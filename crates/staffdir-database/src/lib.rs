//! # staffdir-database
//!
//! PostgreSQL connection management, the directory query builder, and
//! concrete repository implementations for all StaffDir entities.

pub mod connection;
pub mod migration;
pub mod query;
pub mod repositories;

pub use connection::DatabasePool;
