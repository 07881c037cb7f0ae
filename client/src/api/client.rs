//! HTTP transport shared by the repositories.
//!
//! [`ApiClient`] is constructed once by whoever composes the repositories and
//! handed to each of them behind an `Arc`. It knows how to reach the backend
//! and how to read a response; deciding what a status code *means* for a
//! given resource is left to the repository that made the call.

use std::time::Duration;

use reqwest::StatusCode;
use serde::{de::DeserializeOwned, Serialize};

use super::error::ApiError;
use crate::config::ApiConfig;

/// Raw outcome of one request, before repository policy is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiResponse<T> {
    /// 2xx. `None` when the body was empty or JSON `null`.
    Ok(Option<T>),
    /// Non-2xx status.
    Failed(StatusCode),
}

impl<T> ApiResponse<T> {
    /// Turn a non-2xx status into [`ApiError::Status`].
    ///
    /// # Errors
    /// Returns [`ApiError::Status`] for [`ApiResponse::Failed`].
    pub fn into_result(self) -> Result<Option<T>, ApiError> {
        match self {
            Self::Ok(body) => Ok(body),
            Self::Failed(status) => Err(ApiError::status(status)),
        }
    }
}

/// Client for the savings backend REST API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client with default transport settings.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a client with a custom `reqwest::Client` (for testing with custom config).
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Create a client from configuration.
    ///
    /// # Errors
    /// Returns [`ApiError::Unexpected`] if the HTTP client cannot be built.
    pub fn from_config(config: &ApiConfig) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let client = builder
            .build()
            .map_err(|e| ApiError::Unexpected(e.to_string()))?;

        Ok(Self::with_client(client, config.base_url.as_str()))
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `GET {base_url}{path}`.
    ///
    /// # Errors
    /// Returns an [`ApiError`] if the request fails in transit or the body
    /// cannot be decoded as `T`.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<ApiResponse<T>, ApiError> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");

        let response = self.client.get(&url).send().await?;
        Self::read_response(response).await
    }

    /// `POST {base_url}{path}` with a JSON body.
    ///
    /// # Errors
    /// Returns an [`ApiError`] if the request fails in transit or the body
    /// cannot be decoded as `T`.
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<ApiResponse<T>, ApiError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        tracing::debug!(%url, "POST");

        let response = self.client.post(&url).json(body).send().await?;
        Self::read_response(response).await
    }

    async fn read_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<ApiResponse<T>, ApiError> {
        let status = response.status();
        tracing::debug!(status = status.as_u16(), "backend response");

        if !status.is_success() {
            return Ok(ApiResponse::Failed(status));
        }

        // JSON is decoded below, so a failed read here is always the transport.
        let body = response.text().await.map_err(|e| {
            if e.is_body() || e.is_decode() {
                tracing::warn!(error = %e, "connection lost while reading response");
                ApiError::Connection
            } else {
                ApiError::from(e)
            }
        })?;
        if body.trim().is_empty() {
            return Ok(ApiResponse::Ok(None));
        }

        let parsed: Option<T> = serde_json::from_str(&body).map_err(|e| {
            tracing::warn!(error = %e, "failed to decode backend response");
            ApiError::from(e)
        })?;
        Ok(ApiResponse::Ok(parsed))
    }
}

/// Percent-encode a single path segment.
pub(crate) fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}
