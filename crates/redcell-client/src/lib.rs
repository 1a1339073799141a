//! # Redcell Client
//!
//! Adapters over the wire: the authenticated HTTP client implementing
//! the backend API ports, and the file-backed token store.

pub mod config;
pub mod endpoints;
pub mod form;
pub mod http;
pub mod token;

pub use config::ClientConfig;
pub use form::FormSpec;
pub use http::ApiClient;
pub use token::{FileTokenStore, MemoryTokenStore};
