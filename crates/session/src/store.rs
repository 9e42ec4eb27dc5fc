//! Session state machine.

use std::sync::Arc;
use std::time::Duration;

use edumanage_auth::{CredentialDirectory, Identity};

use crate::vault::{SessionVault, SESSION_KEY};

/// Lifecycle state of the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// Startup (or a pending login): the persisted record has not been
    /// resolved yet.
    Loading,
    /// No identity is live.
    Anonymous,
    /// Exactly one identity is live.
    Authenticated(Identity),
}

/// Owns the single live identity slot and mirrors it into the vault.
///
/// The store is passed by handle to the components that need it (shell,
/// navigation, login form); there is no ambient global session. The `&mut`
/// receivers serialize login/logout against each other, matching the
/// single-logical-thread execution model of the host.
pub struct SessionStore {
    state: SessionState,
    vault: Arc<dyn SessionVault>,
    directory: CredentialDirectory,
    login_delay: Duration,
}

impl SessionStore {
    /// Default simulated latency for `login`, matching the product's mock
    /// backend. Tests override this to zero.
    const DEFAULT_LOGIN_DELAY: Duration = Duration::from_millis(1000);

    pub fn new(vault: Arc<dyn SessionVault>, directory: CredentialDirectory) -> Self {
        Self {
            state: SessionState::Loading,
            vault,
            directory,
            login_delay: Self::DEFAULT_LOGIN_DELAY,
        }
    }

    pub fn with_login_delay(mut self, delay: Duration) -> Self {
        self.login_delay = delay;
        self
    }

    /// Resolve the persisted record into an initial state.
    ///
    /// Called exactly once at process start; subsequent calls are no-ops.
    /// A missing or malformed record never fails — the session simply starts
    /// anonymous.
    pub fn initialize(&mut self) {
        if self.state != SessionState::Loading {
            return;
        }

        let raw = match self.vault.read(SESSION_KEY) {
            Ok(raw) => raw,
            Err(err) => {
                tracing::warn!("failed to read persisted session record: {err:?}");
                self.state = SessionState::Anonymous;
                return;
            }
        };

        let Some(raw) = raw else {
            self.state = SessionState::Anonymous;
            return;
        };

        match serde_json::from_str::<Identity>(&raw) {
            Ok(identity) => {
                tracing::info!(
                    handle = %identity.handle,
                    role = %identity.role(),
                    "restored session from persisted record"
                );
                self.state = SessionState::Authenticated(identity);
            }
            Err(err) => {
                tracing::warn!("malformed persisted session record, starting anonymous: {err}");
                self.state = SessionState::Anonymous;
            }
        }
    }

    /// Attempt to authenticate.
    ///
    /// Suspends for the configured latency before resolving; callers must
    /// not assume synchronous completion. Returns `false` without state
    /// change on unknown handle or secret mismatch. A login initiated while
    /// a previous login is pending is ignored.
    pub async fn login(&mut self, handle: &str, secret: &str) -> bool {
        if self.state == SessionState::Loading {
            tracing::debug!(handle, "login ignored: session is still resolving");
            return false;
        }

        let prior = std::mem::replace(&mut self.state, SessionState::Loading);
        tokio::time::sleep(self.login_delay).await;

        match self.directory.verify(handle, secret) {
            Some(identity) => {
                let identity = identity.clone();
                self.persist(&identity);
                tracing::info!(handle = %identity.handle, role = %identity.role(), "login succeeded");
                self.state = SessionState::Authenticated(identity);
                true
            }
            None => {
                tracing::info!(handle, "login failed");
                self.state = prior;
                false
            }
        }
    }

    /// Drop the live identity and clear the persisted record.
    ///
    /// Always succeeds; logging out of an anonymous session is a no-op.
    pub fn logout(&mut self) {
        if let SessionState::Authenticated(identity) = &self.state {
            tracing::info!(handle = %identity.handle, "logged out");
        }
        self.state = SessionState::Anonymous;
        if let Err(err) = self.vault.remove(SESSION_KEY) {
            tracing::error!("failed to clear persisted session record: {err:?}");
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn identity(&self) -> Option<&Identity> {
        match &self.state {
            SessionState::Authenticated(identity) => Some(identity),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.state == SessionState::Loading
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.state, SessionState::Authenticated(_))
    }

    /// Mirror the identity into the vault. Persistence failures are logged
    /// and absorbed: the in-memory session stays authoritative.
    fn persist(&self, identity: &Identity) {
        let raw = match serde_json::to_string(identity) {
            Ok(raw) => raw,
            Err(err) => {
                tracing::error!("failed to serialize session record: {err}");
                return;
            }
        };
        if let Err(err) = self.vault.write(SESSION_KEY, &raw) {
            tracing::error!("failed to persist session record: {err:?}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use edumanage_auth::UserRole;

    fn store(vault: Arc<dyn SessionVault>) -> SessionStore {
        SessionStore::new(vault, CredentialDirectory::demo())
            .with_login_delay(Duration::ZERO)
    }

    fn initialized(vault: Arc<dyn SessionVault>) -> SessionStore {
        let mut store = store(vault);
        store.initialize();
        store
    }

    #[tokio::test]
    async fn login_success_sets_identity_and_persists() {
        let vault = Arc::new(crate::MemoryVault::new());
        let mut store = initialized(vault.clone());

        assert!(store.login("STU001", "student123").await);
        assert_eq!(store.identity().unwrap().role(), UserRole::Student);

        let raw = vault.read(SESSION_KEY).unwrap().expect("record persisted");
        let record: Identity = serde_json::from_str(&raw).unwrap();
        assert_eq!(record.handle, "STU001");
    }

    #[tokio::test]
    async fn login_wrong_secret_leaves_session_anonymous() {
        let vault = Arc::new(crate::MemoryVault::new());
        let mut store = initialized(vault.clone());

        assert!(!store.login("STU001", "wrong").await);
        assert_eq!(store.state(), &SessionState::Anonymous);
        assert_eq!(vault.read(SESSION_KEY).unwrap(), None);
    }

    #[tokio::test]
    async fn login_unknown_handle_leaves_session_anonymous() {
        let vault = Arc::new(crate::MemoryVault::new());
        let mut store = initialized(vault);

        assert!(!store.login("GHOST", "student123").await);
        assert_eq!(store.state(), &SessionState::Anonymous);
    }

    #[tokio::test]
    async fn failed_login_preserves_current_identity() {
        let vault = Arc::new(crate::MemoryVault::new());
        let mut store = initialized(vault);

        assert!(store.login("TCH001", "teacher123").await);
        assert!(!store.login("STU001", "wrong").await);
        assert_eq!(store.identity().unwrap().handle, "TCH001");
    }

    #[tokio::test]
    async fn login_before_initialize_is_ignored() {
        let vault = Arc::new(crate::MemoryVault::new());
        let mut store = store(vault);

        assert!(!store.login("STU001", "student123").await);
        assert!(store.is_loading());
    }

    #[tokio::test]
    async fn logout_clears_identity_and_record_and_is_idempotent() {
        let vault = Arc::new(crate::MemoryVault::new());
        let mut store = initialized(vault.clone());

        assert!(store.login("ADM001", "admin123").await);
        store.logout();
        assert_eq!(store.state(), &SessionState::Anonymous);
        assert_eq!(vault.read(SESSION_KEY).unwrap(), None);

        // Logging out again is a no-op.
        store.logout();
        assert_eq!(store.state(), &SessionState::Anonymous);
    }

    #[tokio::test]
    async fn initialize_restores_persisted_identity() {
        let vault = Arc::new(crate::MemoryVault::new());
        {
            let mut first = initialized(vault.clone());
            assert!(first.login("TCH001", "teacher123").await);
        }

        // "Process restart": a fresh store over the same vault.
        let restarted = initialized(vault);
        let identity = restarted.identity().expect("session restored");
        assert_eq!(identity.role(), UserRole::Teacher);
        assert_eq!(identity.handle, "TCH001");
    }

    #[test]
    fn initialize_with_malformed_record_starts_anonymous() {
        let vault = Arc::new(crate::MemoryVault::new());
        vault.write(SESSION_KEY, "{ definitely not an identity").unwrap();

        let store = initialized(vault);
        assert_eq!(store.state(), &SessionState::Anonymous);
    }

    #[test]
    fn initialize_with_unknown_role_starts_anonymous() {
        let vault = Arc::new(crate::MemoryVault::new());
        vault
            .write(
                SESSION_KEY,
                r#"{"id":"00000000-0000-0000-0000-000000000000","handle":"X001","display_name":"Nobody","email":null,"role":"janitor"}"#,
            )
            .unwrap();

        let store = initialized(vault);
        assert_eq!(store.state(), &SessionState::Anonymous);
    }

    #[test]
    fn initialize_is_idempotent() {
        let vault = Arc::new(crate::MemoryVault::new());
        let mut store = store(vault.clone());
        store.initialize();
        assert_eq!(store.state(), &SessionState::Anonymous);

        // A record appearing later must not be picked up by a second call.
        vault
            .write(SESSION_KEY, &serde_json::to_string("junk").unwrap())
            .unwrap();
        store.initialize();
        assert_eq!(store.state(), &SessionState::Anonymous);
    }
}
