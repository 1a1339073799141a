//! Actions: the only store layer that performs I/O.
//!
//! Session lifecycle lives here; resource actions are split by module
//! in the sibling files.

mod admin;
mod config;
mod domain;
mod modules;
mod vps;

use std::sync::Arc;
use std::time::Duration;

use tokio::time;
use uuid::Uuid;

use redcell_shared::dto::{Credentials, UserUpdate};

use crate::domain::Notification;
use crate::error::ApiError;
use crate::ports::{BackendApi, Navigator, TokenStore};
use crate::routes::Route;
use crate::store::state::StateHandle;
use crate::store::{getters, mutations};

/// Floor applied to profile saves so the progress notification is
/// visible even when the backend answers immediately.
const SAVING_FLOOR: Duration = Duration::from_millis(500);

/// Coordinates state commits, backend calls and navigation.
///
/// Every dependency is injected; nothing reaches for process globals.
#[derive(Clone)]
pub struct Store {
    state: StateHandle,
    api: Arc<dyn BackendApi>,
    tokens: Arc<dyn TokenStore>,
    navigator: Arc<dyn Navigator>,
}

impl Store {
    pub fn new(
        state: StateHandle,
        api: Arc<dyn BackendApi>,
        tokens: Arc<dyn TokenStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            state,
            api,
            tokens,
            navigator,
        }
    }

    pub fn state(&self) -> &StateHandle {
        &self.state
    }

    pub(crate) fn api(&self) -> &dyn BackendApi {
        self.api.as_ref()
    }

    pub(crate) fn notify(&self, notification: Notification) {
        self.state
            .commit(|state| mutations::add_notification(&mut state.main, notification));
    }

    /// Log in and settle the session one way or the other.
    ///
    /// Any failure past this point leaves exactly one terminal state:
    /// `login_error` set and the session fully logged out.
    pub async fn log_in(&self, username: &str, password: &str) -> Result<(), ApiError> {
        match self.try_log_in(username, password).await {
            Ok(()) => Ok(()),
            Err(err) => {
                tracing::warn!(error = %err, "login failed");
                self.state
                    .commit(|state| mutations::set_login_error(&mut state.main, true));
                self.log_out().await;
                Err(err)
            }
        }
    }

    async fn try_log_in(&self, username: &str, password: &str) -> Result<(), ApiError> {
        let credentials = Credentials {
            username: username.to_string(),
            password: password.to_string(),
        };
        let token = self.api.log_in(&credentials).await?;
        if token.access_token.is_empty() {
            return Err(ApiError::decode("login response carried an empty access token"));
        }
        self.tokens.save(&token.access_token).await?;
        self.state.commit(|state| {
            mutations::set_token(&mut state.main, token.access_token.clone());
            mutations::set_token_scheme(&mut state.main, token.token_type.clone());
            mutations::set_logged_in(&mut state.main, true);
            mutations::set_login_error(&mut state.main, false);
        });
        let profile = self.api.get_me().await?;
        self.state
            .commit(|state| mutations::set_user_profile(&mut state.main, profile));
        self.route_logged_in();
        self.notify(Notification::success("Logged in"));
        Ok(())
    }

    pub async fn get_user_profile(&self) -> Result<(), ApiError> {
        match self.api.get_me().await {
            Ok(profile) => {
                self.state
                    .commit(|state| mutations::set_user_profile(&mut state.main, profile));
                Ok(())
            }
            Err(err) => {
                self.check_api_error(&err).await;
                Err(err)
            }
        }
    }

    /// Save the caller's own profile, holding the progress notification
    /// on screen for at least [`SAVING_FLOOR`].
    pub async fn update_user_profile(&self, update: &UserUpdate) -> Result<(), ApiError> {
        let saving = Notification::progress("saving");
        let saving_id = saving.id;
        self.notify(saving);

        let (result, _) = tokio::join!(self.api.update_me(update), time::sleep(SAVING_FLOOR));
        match result {
            Ok(profile) => {
                self.state.commit(|state| {
                    mutations::set_user_profile(&mut state.main, profile);
                    mutations::remove_notification(&mut state.main, saving_id);
                    mutations::add_notification(
                        &mut state.main,
                        Notification::success("Profile successfully updated"),
                    );
                });
                Ok(())
            }
            Err(err) => {
                self.check_api_error(&err).await;
                Err(err)
            }
        }
    }

    /// Settle `logged_in` on startup: recover the persisted token,
    /// prove it against the backend, or end up logged out. Never fails;
    /// an unusable token simply resolves to the logged-out state.
    pub async fn check_logged_in(&self) {
        if self.state.read(|state| getters::is_logged_in(&state.main)) == Some(true) {
            return;
        }

        let mut token = self.state.read(|state| getters::token(&state.main));
        if token.is_empty() {
            match self.tokens.load().await {
                Ok(Some(stored)) => {
                    self.state
                        .commit(|state| mutations::set_token(&mut state.main, stored.clone()));
                    token = stored;
                }
                Ok(None) => {}
                Err(err) => {
                    tracing::warn!(error = %err, "token store unavailable, treating as absent");
                }
            }
        }
        if token.is_empty() {
            self.remove_log_in().await;
            return;
        }

        match self.api.get_me().await {
            Ok(profile) => {
                self.state.commit(|state| {
                    mutations::set_logged_in(&mut state.main, true);
                    mutations::set_user_profile(&mut state.main, profile);
                });
            }
            Err(err) => {
                tracing::info!(error = %err, "stored token rejected, logging out");
                self.remove_log_in().await;
            }
        }
    }

    /// Drop the token everywhere and mark the session logged out.
    pub async fn remove_log_in(&self) {
        if let Err(err) = self.tokens.remove().await {
            tracing::warn!(error = %err, "failed to remove stored token");
        }
        self.state.commit(|state| {
            mutations::set_token(&mut state.main, String::new());
            mutations::set_logged_in(&mut state.main, false);
        });
    }

    pub async fn log_out(&self) {
        self.remove_log_in().await;
        self.route_log_out();
    }

    /// User-initiated logout, which also says goodbye.
    pub async fn user_log_out(&self) {
        self.log_out().await;
        self.notify(Notification::success("Logged out"));
    }

    pub fn route_log_out(&self) {
        if self.navigator.current() != Route::Login {
            self.navigator.navigate(Route::Login);
        }
    }

    /// Leave the entry routes for the post-login landing page. A deep
    /// link that is already past them stays put.
    pub fn route_logged_in(&self) {
        let current = self.navigator.current();
        if current == Route::Login || current == Route::Root {
            self.navigator.navigate(Route::HOME);
        }
    }

    /// A 401 means the session is gone no matter what the state says.
    pub async fn check_api_error(&self, error: &ApiError) {
        if error.is_unauthorized() {
            self.log_out().await;
        }
    }

    /// Dismiss a queued notification after `timeout`. Returns whether
    /// it was still queued.
    pub async fn remove_notification(&self, id: Uuid, timeout: Duration) -> bool {
        time::sleep(timeout).await;
        self.state
            .commit(|state| mutations::remove_notification(&mut state.main, id))
    }
}
