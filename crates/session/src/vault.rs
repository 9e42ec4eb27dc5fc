//! Persisted session record storage.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Context;

/// Key under which the serialized identity is persisted.
pub const SESSION_KEY: &str = "schoolUser";

/// Opaque key-value store backing the persisted session record.
///
/// The session store is the only permitted consumer. Implementations must
/// tolerate concurrent handles to the same backing storage (the store itself
/// serializes its own mutations).
pub trait SessionVault: Send + Sync {
    fn read(&self, key: &str) -> anyhow::Result<Option<String>>;
    fn write(&self, key: &str, value: &str) -> anyhow::Result<()>;
    fn remove(&self, key: &str) -> anyhow::Result<()>;
}

/// In-memory vault for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryVault {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryVault {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionVault for MemoryVault {
    fn read(&self, key: &str) -> anyhow::Result<Option<String>> {
        let entries = self.entries.lock().expect("vault mutex poisoned");
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> anyhow::Result<()> {
        let mut entries = self.entries.lock().expect("vault mutex poisoned");
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> anyhow::Result<()> {
        let mut entries = self.entries.lock().expect("vault mutex poisoned");
        entries.remove(key);
        Ok(())
    }
}

/// File-backed vault: a single JSON object persisted under the OS data dir.
#[derive(Debug)]
pub struct FileVault {
    path: PathBuf,
}

impl FileVault {
    /// Open the vault at its default location:
    /// `{app_data_dir}/edumanage/session.json`.
    pub fn open_default() -> anyhow::Result<Self> {
        Ok(Self::at_path(default_vault_path()?))
    }

    /// Open a vault at an explicit path (tests, portable installs).
    pub fn at_path(path: PathBuf) -> Self {
        Self { path }
    }

    fn load(&self) -> anyhow::Result<HashMap<String, String>> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }
        let raw = std::fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read session vault at {:?}", self.path))?;
        let entries = serde_json::from_str(&raw)
            .with_context(|| format!("session vault at {:?} is not valid JSON", self.path))?;
        Ok(entries)
    }

    fn persist(&self, entries: &HashMap<String, String>) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create vault directory at {:?}", parent))?;
        }
        let raw = serde_json::to_string_pretty(entries)
            .context("failed to serialize session vault")?;
        std::fs::write(&self.path, raw)
            .with_context(|| format!("failed to write session vault at {:?}", self.path))?;
        Ok(())
    }
}

impl SessionVault for FileVault {
    fn read(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.load()?.remove(key))
    }

    fn write(&self, key: &str, value: &str) -> anyhow::Result<()> {
        // A corrupt vault file must not block a fresh login; start over.
        let mut entries = self.load().unwrap_or_default();
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries)
    }

    fn remove(&self, key: &str) -> anyhow::Result<()> {
        let mut entries = match self.load() {
            Ok(entries) => entries,
            Err(_) => return Ok(()),
        };
        if entries.remove(key).is_some() {
            self.persist(&entries)?;
        }
        Ok(())
    }
}

/// Resolve the default vault path: `{app_data_dir}/edumanage/session.json`.
fn default_vault_path() -> anyhow::Result<PathBuf> {
    let base = dirs::data_dir()
        .or_else(|| {
            dirs::home_dir().map(|mut h| {
                h.push(".local");
                h.push("share");
                h
            })
        })
        .context("failed to resolve OS app data directory - tried data_dir() and home_dir()/.local/share")?;

    let mut path = base;
    path.push("edumanage");
    path.push("session.json");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_vault_round_trip() {
        let vault = MemoryVault::new();
        assert_eq!(vault.read(SESSION_KEY).unwrap(), None);

        vault.write(SESSION_KEY, "{}").unwrap();
        assert_eq!(vault.read(SESSION_KEY).unwrap().as_deref(), Some("{}"));

        vault.remove(SESSION_KEY).unwrap();
        assert_eq!(vault.read(SESSION_KEY).unwrap(), None);
    }

    #[test]
    fn file_vault_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let vault = FileVault::at_path(dir.path().join("session.json"));

        assert_eq!(vault.read(SESSION_KEY).unwrap(), None);
        vault.write(SESSION_KEY, "record").unwrap();

        // A second handle over the same file sees the write.
        let reopened = FileVault::at_path(dir.path().join("session.json"));
        assert_eq!(
            reopened.read(SESSION_KEY).unwrap().as_deref(),
            Some("record")
        );

        reopened.remove(SESSION_KEY).unwrap();
        assert_eq!(vault.read(SESSION_KEY).unwrap(), None);
    }

    #[test]
    fn file_vault_read_surfaces_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "not json at all").unwrap();

        let vault = FileVault::at_path(path);
        assert!(vault.read(SESSION_KEY).is_err());
    }

    #[test]
    fn file_vault_write_recovers_from_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "not json at all").unwrap();

        let vault = FileVault::at_path(path);
        vault.write(SESSION_KEY, "fresh").unwrap();
        assert_eq!(vault.read(SESSION_KEY).unwrap().as_deref(), Some("fresh"));
    }

    #[test]
    fn remove_on_missing_key_is_a_no_op() {
        let dir = tempfile::tempdir().unwrap();
        let vault = FileVault::at_path(dir.path().join("session.json"));
        vault.remove(SESSION_KEY).unwrap();
    }
}
