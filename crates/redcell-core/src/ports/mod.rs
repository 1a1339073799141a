//! Ports implemented by the adapter crates.

pub mod api;
pub mod navigator;
pub mod notify;
pub mod token;

pub use api::{ApiResult, AuthApi, BackendApi, ConfigApi, DomainApi, ModuleApi, UserApi, VpsApi};
pub use navigator::Navigator;
pub use notify::NotificationSink;
pub use token::{TokenProvider, TokenStore, TokenStoreError};
