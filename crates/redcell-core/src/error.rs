//! Error types shared by the store and the backend adapters.

use serde_json::Value;
use thiserror::Error;

use crate::ports::TokenStoreError;

/// Anything a backend call can fail with.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend answered with a non-success status.
    #[error("backend rejected the request ({status}): {errors}")]
    Api { status: u16, errors: Value },

    /// The request never produced a usable response.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The response arrived but could not be interpreted.
    #[error("invalid response: {0}")]
    Decode(String),

    #[error(transparent)]
    TokenStore(#[from] TokenStoreError),
}

impl ApiError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }

    /// HTTP status, when the backend got far enough to send one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}
