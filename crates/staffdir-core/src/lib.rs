//! # staffdir-core
//!
//! Core crate for the StaffDir directory service. Contains configuration
//! schemas, pagination/sorting/filter types, and the unified error system.
//!
//! This crate has **no** internal dependencies on other StaffDir crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
