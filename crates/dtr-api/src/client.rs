//! HTTP client for the attendance backend's admin endpoints.
//!
//! One method per endpoint, typed request/response bodies, and the bearer
//! credential passed into every call. Read-only fetches retry transient
//! failures with back-off; writes are dispatched exactly once so a slow
//! response never turns into a duplicate create.

use std::time::Duration;

use reqwest::{header, Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use dtr_core::{AppConfig, AttendanceLog, Branch, UserAccount, UserStatus};

use crate::error::ApiError;
use crate::retry::retry_with_backoff;
use crate::token::AccessToken;

/// Client for the admin REST surface (users, branches, attendance logs).
///
/// Use [`AdminApiClient::new`] with the backend's base URL (including the
/// `/api/v1` prefix), or [`AdminApiClient::from_config`] to take every knob
/// from the loaded [`AppConfig`].
pub struct AdminApiClient {
    client: Client,
    base_url: String,
    max_retries: u32,
    backoff_base_ms: u64,
}

#[derive(Serialize)]
struct StatusUpdate {
    status: UserStatus,
}

impl AdminApiClient {
    /// Creates a client with configured timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed.
    pub fn new(
        base_url: &str,
        timeout_secs: u64,
        user_agent: &str,
        max_retries: u32,
        backoff_base_ms: u64,
    ) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
            max_retries,
            backoff_base_ms,
        })
    }

    /// Creates a client from the loaded application configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed.
    pub fn from_config(config: &AppConfig) -> Result<Self, ApiError> {
        Self::new(
            &config.api_base_url,
            config.request_timeout_secs,
            &config.user_agent,
            config.max_retries,
            config.retry_backoff_base_ms,
        )
    }

    /// Fetches every employee account.
    ///
    /// The backend returns all statuses; use [`crate::pending_only`] to
    /// narrow the list down to the approval queue.
    ///
    /// # Errors
    ///
    /// [`ApiError::Http`]/[`ApiError::Unauthorized`]/[`ApiError::Rejected`]
    /// on request failure, [`ApiError::Deserialize`] on an unexpected body.
    pub async fn list_users(&self, token: &AccessToken) -> Result<Vec<UserAccount>, ApiError> {
        self.get_with_retry(&format!("{}/users/", self.base_url), token)
            .await
    }

    /// Approves or rejects a registration by patching the account status.
    ///
    /// # Errors
    ///
    /// [`ApiError::Rejected`] carries the backend's detail message (e.g. an
    /// unknown user id) verbatim.
    pub async fn update_user_status(
        &self,
        token: &AccessToken,
        user_id: Uuid,
        status: UserStatus,
    ) -> Result<UserAccount, ApiError> {
        let url = format!("{}/admin/users/{user_id}/status", self.base_url);
        let response = self
            .client
            .patch(&url)
            .header(header::AUTHORIZATION, token.bearer())
            .json(&StatusUpdate { status })
            .send()
            .await?;
        Self::decode(&url, response).await
    }

    /// Fetches all configured branches.
    ///
    /// # Errors
    ///
    /// See [`AdminApiClient::list_users`].
    pub async fn list_branches(&self, token: &AccessToken) -> Result<Vec<Branch>, ApiError> {
        self.get_with_retry(&format!("{}/branches/", self.base_url), token)
            .await
    }

    /// Creates a branch from a draft without an id; returns the stored
    /// record, id assigned.
    ///
    /// # Errors
    ///
    /// [`ApiError::Rejected`] carries the backend's detail message (e.g.
    /// "The branch with this name already exists.") verbatim for the form to
    /// surface.
    pub async fn create_branch(
        &self,
        token: &AccessToken,
        draft: &Branch,
    ) -> Result<Branch, ApiError> {
        let url = format!("{}/branches/", self.base_url);
        let response = self
            .client
            .post(&url)
            .header(header::AUTHORIZATION, token.bearer())
            .json(draft)
            .send()
            .await?;
        Self::decode(&url, response).await
    }

    /// Updates an existing branch; returns the stored record.
    ///
    /// # Errors
    ///
    /// See [`AdminApiClient::create_branch`].
    pub async fn update_branch(
        &self,
        token: &AccessToken,
        branch_id: i64,
        draft: &Branch,
    ) -> Result<Branch, ApiError> {
        let url = format!("{}/branches/{branch_id}", self.base_url);
        let response = self
            .client
            .patch(&url)
            .header(header::AUTHORIZATION, token.bearer())
            .json(draft)
            .send()
            .await?;
        Self::decode(&url, response).await
    }

    /// Deletes a branch; the backend echoes the removed record.
    ///
    /// # Errors
    ///
    /// [`ApiError::Rejected`] with a 404 detail when the id is unknown.
    pub async fn delete_branch(
        &self,
        token: &AccessToken,
        branch_id: i64,
    ) -> Result<Branch, ApiError> {
        let url = format!("{}/branches/{branch_id}", self.base_url);
        let response = self
            .client
            .delete(&url)
            .header(header::AUTHORIZATION, token.bearer())
            .send()
            .await?;
        Self::decode(&url, response).await
    }

    /// Fetches the attendance review feed.
    ///
    /// # Errors
    ///
    /// See [`AdminApiClient::list_users`].
    pub async fn list_attendance(
        &self,
        token: &AccessToken,
    ) -> Result<Vec<AttendanceLog>, ApiError> {
        self.get_with_retry(&format!("{}/admin/attendance", self.base_url), token)
            .await
    }

    /// GET with transient-failure retry; list endpoints are idempotent.
    async fn get_with_retry<T: DeserializeOwned>(
        &self,
        url: &str,
        token: &AccessToken,
    ) -> Result<T, ApiError> {
        retry_with_backoff(self.max_retries, self.backoff_base_ms, || {
            let url = url.to_owned();
            let bearer = token.bearer();
            async move {
                let response = self
                    .client
                    .get(&url)
                    .header(header::AUTHORIZATION, bearer)
                    .send()
                    .await?;
                Self::decode(&url, response).await
            }
        })
        .await
    }

    /// Asserts a 2xx status and parses the body, or converts the backend's
    /// error envelope into a typed rejection.
    async fn decode<T: DeserializeOwned>(
        context: &str,
        response: Response,
    ) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            return Err(Self::rejection(status, response).await);
        }
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Deserialize {
            context: context.to_owned(),
            source: e,
        })
    }

    /// Decodes the backend's `{"detail": "..."}` envelope; the detail is kept
    /// verbatim so it can be shown to the operator unchanged.
    async fn rejection(status: StatusCode, response: Response) -> ApiError {
        if status == StatusCode::UNAUTHORIZED {
            return ApiError::Unauthorized;
        }
        let body = response.text().await.unwrap_or_default();
        let detail = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| {
                v.get("detail")
                    .and_then(serde_json::Value::as_str)
                    .map(str::to_owned)
            })
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("request rejected")
                    .to_owned()
            });
        tracing::warn!(status = status.as_u16(), detail, "backend rejected request");
        ApiError::Rejected {
            status: status.as_u16(),
            detail,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client(base_url: &str) -> AdminApiClient {
        AdminApiClient::new(base_url, 30, "dtr-admin-test/0.1", 0, 0)
            .expect("client construction should not fail")
    }

    #[test]
    fn base_url_trailing_slash_is_normalised() {
        let client = test_client("https://attendance.example.com/api/v1/");
        assert_eq!(client.base_url, "https://attendance.example.com/api/v1");
    }

    #[test]
    fn status_update_serializes_wire_vocabulary() {
        let body = serde_json::to_value(StatusUpdate {
            status: UserStatus::Approved,
        })
        .expect("serialize");
        assert_eq!(body, serde_json::json!({ "status": "APPROVED" }));
    }
}
