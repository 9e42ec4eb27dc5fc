//! `edumanage-shell` — role-based navigation and dashboard composition.
//!
//! **Responsibility:** decide what an authenticated (or anonymous) user sees.
//!
//! This crate provides:
//! - [`policy`]: the single source of truth mapping a role to its permitted
//!   destinations and default
//! - [`router`]: the active-destination state machine
//! - [`screens`]: content descriptors for each role × destination
//! - [`DashboardShell`]: the composition of session, policy and router into
//!   exactly one renderable screen
//!
//! The shell holds no business data of its own; screens render from their
//! descriptors alone.

pub mod policy;
pub mod router;
pub mod screens;
pub mod shell;

pub use policy::{default_destination_for, destinations_for, is_permitted, Destination};
pub use router::{RouterState, ViewRouter};
pub use screens::ContentDescriptor;
pub use shell::{DashboardShell, DashboardView, IdentityBadge, NavItem, Screen, WelcomePage};
