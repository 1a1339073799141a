//! User endpoints, own profile and admin management.

use async_trait::async_trait;
use reqwest::Method;

use redcell_core::ports::{ApiResult, UserApi};
use redcell_shared::dto::{UserCreate, UserProfile, UserUpdate};

use crate::http::ApiClient;

#[async_trait]
impl UserApi for ApiClient {
    async fn get_me(&self) -> ApiResult<UserProfile> {
        self.execute(self.request(Method::GET, "users/me")).await
    }

    async fn update_me(&self, update: &UserUpdate) -> ApiResult<UserProfile> {
        self.execute(self.request(Method::PUT, "users/me").json(update))
            .await
    }

    async fn get_users(&self) -> ApiResult<Vec<UserProfile>> {
        self.execute(self.request(Method::GET, "users/")).await
    }

    async fn create_user(&self, user: &UserCreate) -> ApiResult<UserProfile> {
        self.execute(self.request(Method::POST, "users/").json(user))
            .await
    }

    async fn update_user(&self, user_id: i64, update: &UserUpdate) -> ApiResult<UserProfile> {
        self.execute(
            self.request(Method::PUT, &format!("users/{user_id}"))
                .json(update),
        )
        .await
    }
}
