//! Directory listing: filter execution and result mapping.

pub mod service;
pub mod sort;

pub use service::DirectoryService;
