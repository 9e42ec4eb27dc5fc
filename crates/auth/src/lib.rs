//! `edumanage-auth` — identity model and credential boundary.
//!
//! This crate is intentionally decoupled from session state and presentation.
//! It defines *who* a user is (role, profile data) and the single
//! lookup-and-compare operation a login flow depends on. Swapping the static
//! credential directory for a real authentication backend does not touch the
//! rest of the system.

pub mod directory;
pub mod identity;
pub mod role;

pub use directory::{CredentialDirectory, DirectoryError};
pub use identity::{Identity, RoleProfile};
pub use role::UserRole;
