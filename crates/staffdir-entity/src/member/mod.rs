//! The flattened member view and the directory filter specification.

pub mod filter;
pub mod profile;

pub use filter::{LastLoginPeriod, MemberFilter, MemberSortKey, NO_TEAM_SENTINEL};
pub use profile::MemberProfile;
