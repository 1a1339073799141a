//! Write-side state transitions. Synchronous, no I/O.

use uuid::Uuid;

use redcell_shared::dto::{IspAvailable, IspProfile, UserProfile};

use crate::domain::Notification;
use crate::store::state::{AdminState, MainState};

pub fn set_token(state: &mut MainState, token: String) {
    state.token = token;
}

pub fn set_token_scheme(state: &mut MainState, scheme: String) {
    state.token_scheme = scheme;
}

pub fn set_logged_in(state: &mut MainState, logged_in: bool) {
    state.logged_in = Some(logged_in);
}

pub fn set_login_error(state: &mut MainState, login_error: bool) {
    state.login_error = login_error;
}

pub fn set_user_profile(state: &mut MainState, profile: UserProfile) {
    state.user_profile = Some(profile);
}

pub fn set_dashboard_mini_drawer(state: &mut MainState, value: bool) {
    state.dashboard_mini_drawer = value;
}

pub fn set_dashboard_show_drawer(state: &mut MainState, value: bool) {
    state.dashboard_show_drawer = value;
}

pub fn add_notification(state: &mut MainState, notification: Notification) {
    state.notifications.push(notification);
}

/// Remove by id, keeping the rest in order. Returns whether it was queued.
pub fn remove_notification(state: &mut MainState, id: Uuid) -> bool {
    let before = state.notifications.len();
    state.notifications.retain(|notification| notification.id != id);
    state.notifications.len() != before
}

pub fn set_available_isp(state: &mut MainState, available: IspAvailable) {
    state.available_isp = Some(available);
}

pub fn set_domain_isp_list(state: &mut MainState, list: Vec<IspProfile>) {
    state.domain_isp_list = list;
}

pub fn set_vps_isp_list(state: &mut MainState, list: Vec<IspProfile>) {
    state.vps_isp_list = list;
}

pub fn set_users(state: &mut AdminState, users: Vec<UserProfile>) {
    state.users = users;
}

/// Insert or replace one user, matching on id.
pub fn set_user(state: &mut AdminState, user: UserProfile) {
    state.users.retain(|existing| existing.id != user.id);
    state.users.push(user);
}
