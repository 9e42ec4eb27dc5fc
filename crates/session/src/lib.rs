//! `edumanage-session` — authentication lifecycle for the client shell.
//!
//! **Responsibility:** own the single live identity slot and its persisted
//! mirror.
//!
//! This crate provides:
//! - [`SessionStore`]: the `loading → authenticated | anonymous` state machine
//! - [`SessionVault`]: the opaque key-value store holding the one persisted
//!   session record
//!
//! Nothing outside this crate reads the persisted record directly; doing so
//! would void the store's invariants.

pub mod store;
pub mod vault;

pub use store::{SessionState, SessionStore};
pub use vault::{FileVault, MemoryVault, SessionVault, SESSION_KEY};
