//! View router: resolves the active destination for the current session.
//!
//! Default selection is an explicit state-machine transition fired when the
//! session becomes authenticated — not a side effect of a render pass — so a
//! screen can never observe "authenticated but no active destination".

use edumanage_auth::UserRole;

use crate::policy::{default_destination_for, destinations_for};

/// Router state.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RouterState {
    /// No identity: the welcome screen owns the viewport.
    Anonymous,
    /// Identity known, default not yet resolved. Transient: resolved within
    /// the same `on_authenticated` call, never exposed across it.
    AwaitingDefault { role: UserRole },
    /// A destination is active.
    Active { role: UserRole, key: &'static str },
}

impl Default for RouterState {
    fn default() -> Self {
        RouterState::Anonymous
    }
}

/// Destination state machine for one session.
#[derive(Debug, Default)]
pub struct ViewRouter {
    state: RouterState,
}

impl ViewRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// The session became authenticated: land on the role's default
    /// destination before anything renders.
    pub fn on_authenticated(&mut self, role: UserRole) {
        self.state = RouterState::AwaitingDefault { role };
        self.resolve_default();
    }

    /// The session became anonymous: forget everything. No destination
    /// survives into the next login.
    pub fn on_anonymous(&mut self) {
        self.state = RouterState::Anonymous;
    }

    /// Explicit user selection.
    ///
    /// Only members of the role's permitted set are selectable; anything
    /// else is a call-site bug and is absorbed as a no-op rather than a
    /// crash.
    pub fn select(&mut self, key: &str) {
        let role = match self.state {
            RouterState::Active { role, .. } | RouterState::AwaitingDefault { role } => role,
            RouterState::Anonymous => {
                tracing::debug!(key, "selection ignored: no session");
                return;
            }
        };

        match destinations_for(role).iter().find(|d| d.key == key) {
            Some(destination) => {
                self.state = RouterState::Active {
                    role,
                    key: destination.key,
                };
            }
            None => {
                tracing::debug!(key, role = %role, "selection ignored: not permitted for role");
            }
        }
    }

    pub fn state(&self) -> RouterState {
        self.state
    }

    /// The active destination key, if any.
    pub fn active(&self) -> Option<&'static str> {
        match self.state {
            RouterState::Active { key, .. } => Some(key),
            _ => None,
        }
    }

    pub fn role(&self) -> Option<UserRole> {
        match self.state {
            RouterState::Active { role, .. } | RouterState::AwaitingDefault { role } => Some(role),
            RouterState::Anonymous => None,
        }
    }

    fn resolve_default(&mut self) {
        if let RouterState::AwaitingDefault { role } = self.state {
            self.state = RouterState::Active {
                role,
                key: default_destination_for(role),
            };
        }
    }
}
