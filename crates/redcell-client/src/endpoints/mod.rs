//! Port implementations over [`ApiClient`](crate::http::ApiClient),
//! one file per resource family. Paths here are relative to the
//! versioned API base.

mod auth;
mod config;
mod domains;
mod modules;
mod users;
mod vps;
