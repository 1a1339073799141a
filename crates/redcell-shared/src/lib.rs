//! # Redcell Shared
//!
//! The wire contract shared by every crate that talks to the backend:
//! response envelope, pagination shapes, per-resource DTOs and the
//! declarative form-validation rules.

pub mod dto;
pub mod envelope;
pub mod pagination;
pub mod validation;

pub use envelope::{CrudStatus, EnumItem, Envelope, TaskTicket};
pub use pagination::{Page, PageQuery};
