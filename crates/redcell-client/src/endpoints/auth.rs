//! Login endpoint.

use async_trait::async_trait;
use reqwest::Method;

use redcell_core::ports::{ApiResult, AuthApi};
use redcell_shared::dto::{Credentials, Token};

use crate::http::ApiClient;

#[async_trait]
impl AuthApi for ApiClient {
    /// Password flow: credentials go out as form fields, not JSON.
    async fn log_in(&self, credentials: &Credentials) -> ApiResult<Token> {
        let params = [
            ("username", credentials.username.as_str()),
            ("password", credentials.password.as_str()),
        ];
        self.execute(self.request(Method::POST, "login/access-token").form(&params))
            .await
    }
}
