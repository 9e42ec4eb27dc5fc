//! `edumanage-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod error;
pub mod id;
pub mod section;

pub use error::{DomainError, DomainResult};
pub use id::UserId;
pub use section::ClassSection;
