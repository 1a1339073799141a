//! # Redcell Core
//!
//! The client's domain layer: session and notification state, the route
//! table, ports to the backend, and the store that coordinates them. No
//! HTTP or filesystem code lives here; adapters implement the ports.

pub mod domain;
pub mod error;
pub mod ports;
pub mod routes;
pub mod store;

pub use error::ApiError;
