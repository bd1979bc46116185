//! Team domain entities.

pub mod model;

pub use model::{Team, TeamLink};
