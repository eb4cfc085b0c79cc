//! Access-token types and the process-wide token store.

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::debug;

/// Opaque bearer credential.
///
/// The raw value never appears in `Debug` output.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessToken(String);

impl AccessToken {
    /// Wrap a raw token string.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Return the raw token value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the token carries no value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AccessToken").field(&"<redacted>").finish()
    }
}

/// Durable storage for the access token.
///
/// Backends stand in for the browser cookie and its local-storage mirror:
/// every write goes to every backend, reads come from the in-memory slot.
/// A corrupt or unreadable backend degrades to "no token".
pub trait TokenPersistence: Send + Sync {
    /// Load the persisted token, if any.
    fn load(&self) -> Option<AccessToken>;
    /// Persist a new token value.
    fn save(&self, token: &AccessToken);
    /// Remove the persisted token.
    fn clear(&self);
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredTokenRecord {
    token: String,
    issued_at: DateTime<Utc>,
}

/// File-backed token persistence (JSON record with an issue timestamp).
#[derive(Debug, Clone)]
pub struct FileTokenPersistence {
    path: PathBuf,
}

impl FileTokenPersistence {
    /// Create a backend writing to the given path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TokenPersistence for FileTokenPersistence {
    fn load(&self) -> Option<AccessToken> {
        let bytes = std::fs::read(&self.path).ok()?;
        let record: StoredTokenRecord = serde_json::from_slice(&bytes).ok()?;
        if record.token.is_empty() {
            return None;
        }
        Some(AccessToken::new(record.token))
    }

    fn save(&self, token: &AccessToken) {
        let record = StoredTokenRecord {
            token: token.as_str().to_string(),
            issued_at: Utc::now(),
        };
        if let Ok(bytes) = serde_json::to_vec(&record) {
            if let Err(err) = std::fs::write(&self.path, bytes) {
                debug!(path = %self.path.display(), %err, "token persistence write failed");
            }
        }
    }

    fn clear(&self) {
        if let Err(err) = std::fs::remove_file(&self.path) {
            if err.kind() != std::io::ErrorKind::NotFound {
                debug!(path = %self.path.display(), %err, "token persistence clear failed");
            }
        }
    }
}

struct TokenStoreInner {
    slot: RwLock<Option<AccessToken>>,
    changed: watch::Sender<Option<AccessToken>>,
    backends: Vec<Box<dyn TokenPersistence>>,
}

/// Process-wide access-token slot.
///
/// Cheap to clone; all clones observe the same token. At most one token
/// value is authoritative at any instant: writes are serialized under the
/// slot lock and mirrored to every persistence backend before observers
/// are notified.
#[derive(Clone)]
pub struct TokenStore {
    inner: Arc<TokenStoreInner>,
}

impl fmt::Debug for TokenStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenStore")
            .field("has_token", &self.get().is_some())
            .field("backends", &self.inner.backends.len())
            .finish()
    }
}

impl Default for TokenStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenStore {
    /// Create an in-memory store with no persistence.
    #[must_use]
    pub fn new() -> Self {
        Self::with_persistence(Vec::new())
    }

    /// Create a store backed by the given persistence backends.
    ///
    /// The initial token is loaded from the first backend that has one.
    #[must_use]
    pub fn with_persistence(backends: Vec<Box<dyn TokenPersistence>>) -> Self {
        let initial = backends.iter().find_map(|backend| backend.load());
        let (changed, _) = watch::channel(initial.clone());
        Self {
            inner: Arc::new(TokenStoreInner {
                slot: RwLock::new(initial),
                changed,
                backends,
            }),
        }
    }

    /// Read the current token.
    #[must_use]
    pub fn get(&self) -> Option<AccessToken> {
        self.inner.slot.read().clone()
    }

    /// Replace the current token; observers see it immediately.
    pub fn set(&self, token: AccessToken) {
        {
            let mut slot = self.inner.slot.write();
            *slot = Some(token.clone());
            for backend in &self.inner.backends {
                backend.save(&token);
            }
        }
        self.inner.changed.send_replace(Some(token));
    }

    /// Remove the current token from the slot and every backend. Idempotent.
    pub fn clear(&self) {
        {
            let mut slot = self.inner.slot.write();
            *slot = None;
            for backend in &self.inner.backends {
                backend.clear();
            }
        }
        self.inner.changed.send_replace(None);
    }

    /// Subscribe to token changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Option<AccessToken>> {
        self.inner.changed.subscribe()
    }
}
