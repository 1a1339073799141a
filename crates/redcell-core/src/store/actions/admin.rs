//! Admin actions, gated behind `has_admin_access` by the caller.

use redcell_shared::dto::{UserCreate, UserProfile, UserUpdate};

use crate::domain::Notification;
use crate::error::ApiError;
use crate::store::actions::Store;
use crate::store::mutations;

impl Store {
    pub async fn get_users(&self) -> Result<Vec<UserProfile>, ApiError> {
        match self.api().get_users().await {
            Ok(users) => {
                self.state()
                    .commit(|state| mutations::set_users(&mut state.admin, users.clone()));
                Ok(users)
            }
            Err(err) => {
                self.check_api_error(&err).await;
                Err(err)
            }
        }
    }

    pub async fn create_user(&self, user: &UserCreate) -> Result<UserProfile, ApiError> {
        let saving = Notification::progress("saving");
        let saving_id = saving.id;
        self.notify(saving);

        match self.api().create_user(user).await {
            Ok(created) => {
                self.state().commit(|state| {
                    mutations::set_user(&mut state.admin, created.clone());
                    mutations::remove_notification(&mut state.main, saving_id);
                    mutations::add_notification(
                        &mut state.main,
                        Notification::success("User successfully created"),
                    );
                });
                Ok(created)
            }
            Err(err) => {
                self.check_api_error(&err).await;
                Err(err)
            }
        }
    }

    pub async fn update_user(
        &self,
        user_id: i64,
        update: &UserUpdate,
    ) -> Result<UserProfile, ApiError> {
        let saving = Notification::progress("saving");
        let saving_id = saving.id;
        self.notify(saving);

        match self.api().update_user(user_id, update).await {
            Ok(updated) => {
                self.state().commit(|state| {
                    mutations::set_user(&mut state.admin, updated.clone());
                    mutations::remove_notification(&mut state.main, saving_id);
                    mutations::add_notification(
                        &mut state.main,
                        Notification::success("User successfully updated"),
                    );
                });
                Ok(updated)
            }
            Err(err) => {
                self.check_api_error(&err).await;
                Err(err)
            }
        }
    }
}
