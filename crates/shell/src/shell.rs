//! Dashboard shell: session + policy + router composed into one screen.

use edumanage_session::{SessionState, SessionStore};

use crate::policy::destinations_for;
use crate::router::ViewRouter;
use crate::screens::{content_for, ContentDescriptor};

/// Identity data rendered in the header / profile dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityBadge {
    pub display_name: String,
    pub role_label: &'static str,
    pub handle: String,
}

/// One navigation entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub key: &'static str,
    pub label: &'static str,
    pub active: bool,
}

/// Unauthenticated landing content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WelcomePage {
    pub title: &'static str,
    pub tagline: &'static str,
}

impl Default for WelcomePage {
    fn default() -> Self {
        Self {
            title: "EduManage",
            tagline: "School Management System",
        }
    }
}

/// The fully resolved dashboard for an authenticated session.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub header: IdentityBadge,
    pub navigation: Vec<NavItem>,
    pub content: ContentDescriptor,
}

/// Exactly one of these is rendered per frame.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Welcome(WelcomePage),
    Dashboard(DashboardView),
}

/// Owns the session store and the router and keeps them in lockstep.
///
/// The shell holds no business data: it delegates login/logout to the
/// session store, destination changes to the router, and derives everything
/// it renders from those two plus the static role policy.
pub struct DashboardShell {
    session: SessionStore,
    router: ViewRouter,
}

impl DashboardShell {
    pub fn new(session: SessionStore) -> Self {
        Self {
            session,
            router: ViewRouter::new(),
        }
    }

    /// Resolve the persisted session and route accordingly. Call once at
    /// startup, before the first render.
    pub fn initialize(&mut self) {
        self.session.initialize();
        self.sync_router();
    }

    /// Attempt a login. Suspends for the session store's latency; the caller
    /// is expected to show a pending indicator until this resolves.
    pub async fn login(&mut self, handle: &str, secret: &str) -> bool {
        let ok = self.session.login(handle, secret).await;
        self.sync_router();
        ok
    }

    pub fn logout(&mut self) {
        self.session.logout();
        self.sync_router();
    }

    /// User picked a navigation entry. Invalid keys are absorbed by the
    /// router as no-ops.
    pub fn select_destination(&mut self, key: &str) {
        self.router.select(key);
    }

    /// Navigation entries for the current role, in policy order.
    pub fn navigation(&self) -> Vec<NavItem> {
        let Some(identity) = self.session.identity() else {
            return Vec::new();
        };
        let active = self.router.active();
        destinations_for(identity.role())
            .iter()
            .map(|d| NavItem {
                key: d.key,
                label: d.label,
                active: active == Some(d.key),
            })
            .collect()
    }

    /// Resolve the single screen to render.
    pub fn screen(&self) -> Screen {
        let (identity, key) = match (self.session.identity(), self.router.active()) {
            (Some(identity), Some(key)) => (identity, key),
            // Anonymous, still loading, or router out of sync: never render
            // a blank dashboard.
            _ => return Screen::Welcome(WelcomePage::default()),
        };

        Screen::Dashboard(DashboardView {
            header: IdentityBadge {
                display_name: identity.display_name.clone(),
                role_label: identity.role_label(),
                handle: identity.handle.clone(),
            },
            navigation: self.navigation(),
            content: content_for(identity.role(), key),
        })
    }

    /// Read-only session access for identity display.
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Mirror the session state into the router.
    ///
    /// Fired synchronously after every session transition, so default
    /// selection is an explicit state-machine step rather than a render
    /// side effect.
    fn sync_router(&mut self) {
        match self.session.state() {
            SessionState::Authenticated(identity) => {
                if self.router.role() != Some(identity.role()) {
                    self.router.on_authenticated(identity.role());
                }
            }
            SessionState::Anonymous => self.router.on_anonymous(),
            // Still resolving (startup or pending login): leave the router
            // alone until the session settles.
            SessionState::Loading => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    use edumanage_auth::CredentialDirectory;
    use edumanage_session::MemoryVault;

    fn shell() -> DashboardShell {
        let store = SessionStore::new(Arc::new(MemoryVault::new()), CredentialDirectory::demo())
            .with_login_delay(Duration::ZERO);
        let mut shell = DashboardShell::new(store);
        shell.initialize();
        shell
    }

    #[test]
    fn anonymous_shell_shows_the_welcome_screen() {
        let shell = shell();
        assert!(matches!(shell.screen(), Screen::Welcome(_)));
        assert!(shell.navigation().is_empty());
    }

    #[tokio::test]
    async fn dashboard_navigation_marks_the_active_entry() {
        let mut shell = shell();
        assert!(shell.login("STU001", "student123").await);

        shell.select_destination("fees");
        let nav = shell.navigation();
        assert_eq!(nav.len(), 5);
        for item in &nav {
            assert_eq!(item.active, item.key == "fees");
        }
    }

    #[tokio::test]
    async fn header_shows_identity_and_role_label() {
        let mut shell = shell();
        assert!(shell.login("HEAD001", "head123").await);

        let Screen::Dashboard(view) = shell.screen() else {
            panic!("expected dashboard");
        };
        assert_eq!(view.header.display_name, "Dr. Emily Johnson");
        assert_eq!(view.header.role_label, "Head of Institute");
        assert_eq!(view.header.handle, "HEAD001");
    }

    #[tokio::test]
    async fn failed_login_keeps_the_welcome_screen() {
        let mut shell = shell();
        assert!(!shell.login("STU001", "wrong").await);
        assert!(matches!(shell.screen(), Screen::Welcome(_)));
    }
}
