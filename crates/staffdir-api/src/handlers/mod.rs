//! HTTP request handlers.

pub mod directory;
pub mod health;
