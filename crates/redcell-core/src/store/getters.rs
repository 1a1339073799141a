//! Read-side accessors over the state. All pure.

use redcell_shared::dto::{IspAvailable, IspProfile, UserProfile};

use crate::domain::{Notification, Session};
use crate::store::state::{AdminState, MainState};

/// Admin access needs a profile that is both superuser and active.
/// Missing flags count as `false`.
pub fn has_admin_access(state: &MainState) -> bool {
    state.user_profile.as_ref().is_some_and(|profile| {
        profile.is_superuser.unwrap_or(false) && profile.is_active.unwrap_or(false)
    })
}

pub fn is_logged_in(state: &MainState) -> Option<bool> {
    state.logged_in
}

pub fn login_error(state: &MainState) -> bool {
    state.login_error
}

pub fn token(state: &MainState) -> String {
    state.token.clone()
}

pub fn token_scheme(state: &MainState) -> String {
    state.token_scheme.clone()
}

pub fn user_profile(state: &MainState) -> Option<UserProfile> {
    state.user_profile.clone()
}

pub fn dashboard_show_drawer(state: &MainState) -> bool {
    state.dashboard_show_drawer
}

pub fn dashboard_mini_drawer(state: &MainState) -> bool {
    state.dashboard_mini_drawer
}

/// Oldest queued notification, the next one a consumer should show.
pub fn first_notification(state: &MainState) -> Option<Notification> {
    state.notifications.first().cloned()
}

pub fn available_isp(state: &MainState) -> Option<IspAvailable> {
    state.available_isp.clone()
}

pub fn domain_isp_list(state: &MainState) -> Vec<IspProfile> {
    state.domain_isp_list.clone()
}

pub fn vps_isp_list(state: &MainState) -> Vec<IspProfile> {
    state.vps_isp_list.clone()
}

pub fn session(state: &MainState) -> Session {
    Session {
        logged_in: state.logged_in,
        login_error: state.login_error,
        scheme: state.token_scheme.clone(),
        has_token: !state.token.is_empty(),
    }
}

pub fn admin_users(state: &AdminState) -> Vec<UserProfile> {
    state.users.clone()
}

pub fn admin_one_user(state: &AdminState, user_id: i64) -> Option<UserProfile> {
    state
        .users
        .iter()
        .find(|user| user.id == Some(user_id))
        .cloned()
}
