//! The directory query builder.
//!
//! Filter requests are translated into a [`predicate::Predicate`] expression
//! tree, which [`builder`] renders into parameterized SQL plus an ordered
//! list of bind values.

pub mod builder;
pub mod predicate;

pub use builder::{count_members_sql, select_members_sql};
pub use predicate::Predicate;
