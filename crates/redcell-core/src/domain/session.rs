//! Point-in-time view of the authentication state.

use serde::Serialize;

/// Snapshot handed to consumers that only need to know where the
/// session stands. The token itself stays inside the store.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// `None` until the first bootstrap or login settles it.
    pub logged_in: Option<bool>,
    pub login_error: bool,
    pub scheme: String,
    pub has_token: bool,
}
