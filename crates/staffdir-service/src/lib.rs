//! # staffdir-service
//!
//! Business logic for the StaffDir directory: filter execution, result
//! mapping, and team listing.

pub mod directory;

pub use directory::service::DirectoryService;
