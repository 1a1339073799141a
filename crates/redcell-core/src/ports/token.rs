//! Token persistence and lookup ports.

use async_trait::async_trait;
use thiserror::Error;

/// Durable storage for the bearer token. Exactly one value lives here;
/// `save` overwrites and `remove` is a no-op when nothing is stored.
#[async_trait]
pub trait TokenStore: Send + Sync {
    async fn load(&self) -> Result<Option<String>, TokenStoreError>;
    async fn save(&self, token: &str) -> Result<(), TokenStoreError>;
    async fn remove(&self) -> Result<(), TokenStoreError>;
}

#[derive(Debug, Error)]
pub enum TokenStoreError {
    #[error("token storage failure: {0}")]
    Io(String),
}

/// In-memory token lookup used when decorating outgoing requests.
/// Implemented by the store's state handle.
pub trait TokenProvider: Send + Sync {
    /// Current token, `None` when the session holds none.
    fn token(&self) -> Option<String>;

    /// Authorization scheme, e.g. `Bearer`, exactly as the backend
    /// issued it.
    fn scheme(&self) -> String;
}
