//! Application state and the shared handle it is accessed through.

use std::sync::{Arc, RwLock};

use redcell_shared::dto::{IspAvailable, IspProfile, UserProfile};

use crate::domain::Notification;
use crate::ports::{NotificationSink, TokenProvider};
use crate::store::mutations;

/// Session, UI and reference-cache state. One instance per process.
#[derive(Debug, Clone)]
pub struct MainState {
    pub token: String,
    pub token_scheme: String,
    /// Tri-state: `None` until bootstrap or login settles it.
    pub logged_in: Option<bool>,
    pub login_error: bool,
    pub user_profile: Option<UserProfile>,
    pub dashboard_mini_drawer: bool,
    pub dashboard_show_drawer: bool,
    pub notifications: Vec<Notification>,
    pub available_isp: Option<IspAvailable>,
    pub domain_isp_list: Vec<IspProfile>,
    pub vps_isp_list: Vec<IspProfile>,
}

impl Default for MainState {
    fn default() -> Self {
        Self {
            token: String::new(),
            token_scheme: "Bearer".to_string(),
            logged_in: None,
            login_error: false,
            user_profile: None,
            dashboard_mini_drawer: false,
            dashboard_show_drawer: true,
            notifications: Vec::new(),
            available_isp: None,
            domain_isp_list: Vec::new(),
            vps_isp_list: Vec::new(),
        }
    }
}

/// Admin-only state, kept apart from the main module.
#[derive(Debug, Clone, Default)]
pub struct AdminState {
    pub users: Vec<UserProfile>,
}

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub main: MainState,
    pub admin: AdminState,
}

/// Cloneable handle to the process-wide state.
///
/// Reads and commits take the lock for the duration of the closure
/// only; nothing ever holds it across an await point.
#[derive(Clone, Default)]
pub struct StateHandle {
    inner: Arc<RwLock<AppState>>,
}

impl StateHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn read<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        f(&self.inner.read().unwrap())
    }

    pub fn commit<R>(&self, f: impl FnOnce(&mut AppState) -> R) -> R {
        f(&mut self.inner.write().unwrap())
    }
}

impl TokenProvider for StateHandle {
    fn token(&self) -> Option<String> {
        self.read(|state| {
            let token = &state.main.token;
            (!token.is_empty()).then(|| token.clone())
        })
    }

    fn scheme(&self) -> String {
        self.read(|state| state.main.token_scheme.clone())
    }
}

impl NotificationSink for StateHandle {
    fn push(&self, notification: Notification) {
        self.commit(|state| mutations::add_notification(&mut state.main, notification));
    }
}
