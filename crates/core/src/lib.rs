//! `userapi-core` — the user domain.
//!
//! This crate contains **pure domain** types (no infrastructure concerns).

pub mod error;
pub mod id;
pub mod user;

pub use error::DomainError;
pub use id::UserId;
pub use user::{User, UserFields};
