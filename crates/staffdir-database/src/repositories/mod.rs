//! Concrete repository implementations.

pub mod team;
pub mod user;

pub use team::TeamRepository;
pub use user::UserRepository;
