//! Shared types used across all StaffDir crates.

pub mod filter;
pub mod pagination;
pub mod sorting;
