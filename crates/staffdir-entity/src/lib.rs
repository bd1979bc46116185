//! # staffdir-entity
//!
//! Domain entity models for the StaffDir directory: users, memberships,
//! teams, the flattened member view, and the validated filter specification.

pub mod member;
pub mod membership;
pub mod team;
pub mod user;

pub use member::{MemberFilter, MemberProfile};
pub use membership::{MemberRole, Membership};
pub use team::Team;
pub use user::{User, UserWithRelations};
