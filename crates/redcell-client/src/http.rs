//! Authenticated HTTP transport for the backend API.
//!
//! Every call funnels through [`ApiClient::execute`], which owns the
//! request decoration (request id, bearer token), envelope unwrapping,
//! the failed-request notification and the 401 redirect. Endpoint
//! implementations in [`crate::endpoints`] stay one-liners.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use uuid::Uuid;

use redcell_core::ApiError;
use redcell_core::domain::Notification;
use redcell_core::ports::{Navigator, NotificationSink, TokenProvider, TokenStore};
use redcell_core::routes::Route;
use redcell_shared::Envelope;

use crate::config::ClientConfig;

/// How long a failed-request notification stays up.
const ERROR_NOTIFICATION_TIMEOUT: Duration = Duration::from_secs(10);

pub struct ApiClient {
    http: reqwest::Client,
    config: ClientConfig,
    session: Arc<dyn TokenProvider>,
    fallback: Arc<dyn TokenStore>,
    notifier: Arc<dyn NotificationSink>,
    navigator: Arc<dyn Navigator>,
}

impl ApiClient {
    pub fn new(
        config: ClientConfig,
        session: Arc<dyn TokenProvider>,
        fallback: Arc<dyn TokenStore>,
        notifier: Arc<dyn NotificationSink>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|err| ApiError::transport(err.to_string()))?;
        Ok(Self {
            http,
            config,
            session,
            fallback,
            notifier,
            navigator,
        })
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.api_base(), path.trim_start_matches('/'))
    }

    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http.request(method, self.url(path))
    }

    /// Authorization header value: the live session token first, the
    /// persisted one as fallback, `None` when neither exists.
    async fn authorization(&self) -> Option<String> {
        let scheme = self.session.scheme();
        if let Some(token) = self.session.token() {
            return Some(format!("{scheme} {token}"));
        }
        match self.fallback.load().await {
            Ok(Some(token)) => Some(format!("{scheme} {token}")),
            Ok(None) => None,
            Err(err) => {
                tracing::warn!(error = %err, "persisted token unavailable");
                None
            }
        }
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<Envelope<T>, ApiError> {
        let request_id = Uuid::new_v4();
        let mut request = request.header("X-Request-ID", request_id.to_string());
        if let Some(authorization) = self.authorization().await {
            request = request.header("Authorization", authorization);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(err) => {
                let failure = ApiError::transport(err.to_string());
                tracing::warn!(%request_id, error = %failure, "request never completed");
                self.report(&failure);
                return Err(failure);
            }
        };

        let status = response.status();
        tracing::debug!(%request_id, status = status.as_u16(), "api response");
        if status.is_success() {
            return response
                .json::<Envelope<T>>()
                .await
                .map_err(|err| ApiError::decode(err.to_string()));
        }

        let body = response.text().await.unwrap_or_default();
        let failure = ApiError::Api {
            status: status.as_u16(),
            errors: error_content(&body),
        };
        self.report(&failure);
        if status == StatusCode::UNAUTHORIZED {
            // the session is dead regardless of where the user is
            self.navigator.navigate(Route::Login);
        }
        Err(failure)
    }

    /// Send a decorated request and unwrap the envelope. A missing
    /// result on a success response is a decode failure.
    pub(crate) async fn execute<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        resolve(self.send(request).await?)
    }

    /// Like [`execute`](Self::execute), for endpoints whose result is
    /// legitimately absent.
    pub(crate) async fn execute_optional<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<Option<T>, ApiError> {
        Ok(self.send::<T>(request).await?.result)
    }

    fn report(&self, failure: &ApiError) {
        self.notifier.push(
            Notification::error(format!("Request failed: {failure}"))
                .with_timeout(ERROR_NOTIFICATION_TIMEOUT),
        );
    }
}

/// Unwrap an envelope into its result. The `success` flag is advisory;
/// the HTTP status already decided how the response is handled.
fn resolve<T>(envelope: Envelope<T>) -> Result<T, ApiError> {
    match envelope.result {
        Some(result) => Ok(result),
        None => Err(ApiError::decode("response envelope carried no result")),
    }
}

/// Pull the most specific error payload out of a failure body: the
/// envelope `errors` field, a bare `detail`, the parsed body, or the
/// raw text.
fn error_content(body: &str) -> Value {
    if let Ok(parsed) = serde_json::from_str::<Value>(body) {
        if let Some(errors) = parsed.get("errors") {
            if !errors.is_null() {
                return errors.clone();
            }
        }
        if let Some(detail) = parsed.get("detail") {
            return detail.clone();
        }
        return parsed;
    }
    if body.is_empty() {
        Value::String("Unknown error".to_string())
    } else {
        Value::String(body.to_string())
    }
}
