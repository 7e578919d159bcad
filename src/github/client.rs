//! GitHub API client
//!
//! Provides a typed HTTP client bound to `{host}/repos/{owner}`. Every call
//! is a single request: failures are classified and returned, never retried.

use crate::auth::BoxedAuthProvider;
use crate::config::GitHubConfig;
use crate::error::{DEFAULT_RETRY_AFTER_SECS, GitHubError, GitHubResult};
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, RETRY_AFTER};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{Serialize, de::DeserializeOwned};
use std::time::Duration;
use tracing::{debug, instrument};

/// Media type GitHub recommends for REST calls
const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";

/// REST API version pinned on every request
const GITHUB_API_VERSION: &str = "2022-11-28";

/// GitHub API client
pub struct GitHubClient {
    http: Client,
    base_url: String,
    auth: BoxedAuthProvider,
}

impl GitHubClient {
    /// Create a new GitHub client from configuration
    pub fn new(config: &GitHubConfig, auth: BoxedAuthProvider) -> GitHubResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_MEDIA_TYPE));
        headers.insert(
            "x-github-api-version",
            HeaderValue::from_static(GITHUB_API_VERSION),
        );

        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .danger_accept_invalid_certs(!config.verify_ssl)
            .user_agent(format!("issue-probe/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(GitHubError::Request)?;

        let base_url = config.repos_url();
        debug!(base_url = %base_url, auth = auth.auth_type(), "Created GitHub client");

        Ok(Self {
            http,
            base_url,
            auth,
        })
    }

    /// Build a URL for an API endpoint
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Add authentication to a request
    async fn authenticate(&self, request: RequestBuilder) -> GitHubResult<RequestBuilder> {
        let header = self.auth.get_auth_header().await.map_err(|e| {
            debug!(error = %e, "Could not produce credentials");
            GitHubError::Unauthorized
        })?;

        Ok(request.header(header.header_name(), header.header_value()))
    }

    /// Send a request once and turn non-success statuses into errors
    async fn execute(&self, request: RequestBuilder, endpoint: &str) -> GitHubResult<Response> {
        let request = self.authenticate(request).await?;
        let response = request.send().await?;
        let status = response.status();

        debug!(status = status.as_u16(), "Received response");

        if status.is_success() {
            return Ok(response);
        }

        if let Some(retry_after) = rate_limit_retry_after(status, response.headers()) {
            return Err(GitHubError::RateLimited { retry_after });
        }

        let body = response.text().await.unwrap_or_default();
        Err(GitHubError::from_response(status.as_u16(), endpoint, &body))
    }

    /// Read the full body and deserialize it
    async fn parse<T: DeserializeOwned>(response: Response) -> GitHubResult<T> {
        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|source| GitHubError::Deserialization { source })
    }

    /// Make a GET request
    #[instrument(skip(self), fields(method = "GET", endpoint = %endpoint))]
    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> GitHubResult<T> {
        let request = self.http.get(self.url(endpoint));
        let response = self.execute(request, endpoint).await?;
        Self::parse(response).await
    }

    /// Make a POST request with a JSON body
    #[instrument(skip(self, body), fields(method = "POST", endpoint = %endpoint))]
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> GitHubResult<T> {
        let request = self.http.post(self.url(endpoint)).json(body);
        let response = self.execute(request, endpoint).await?;
        Self::parse(response).await
    }

    /// Make a PATCH request with a JSON body
    #[instrument(skip(self, body), fields(method = "PATCH", endpoint = %endpoint))]
    pub async fn patch<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> GitHubResult<T> {
        let request = self.http.patch(self.url(endpoint)).json(body);
        let response = self.execute(request, endpoint).await?;
        Self::parse(response).await
    }

    /// Make a DELETE request, returning the success status GitHub answered with
    #[instrument(skip(self), fields(method = "DELETE", endpoint = %endpoint))]
    pub async fn delete(&self, endpoint: &str) -> GitHubResult<StatusCode> {
        let request = self.http.delete(self.url(endpoint));
        let response = self.execute(request, endpoint).await?;
        Ok(response.status())
    }
}

/// Detect GitHub's two rate limit signals: 429, and 403 with an exhausted quota
fn rate_limit_retry_after(status: StatusCode, headers: &HeaderMap) -> Option<u64> {
    let exhausted = headers
        .get("x-ratelimit-remaining")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.trim() == "0");

    if status != StatusCode::TOO_MANY_REQUESTS && !(status == StatusCode::FORBIDDEN && exhausted)
    {
        return None;
    }

    let retry_after = headers
        .get(RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(DEFAULT_RETRY_AFTER_SECS);

    Some(retry_after)
}

/// Reject identifiers GitHub never assigns before sending a request
pub(crate) fn require_positive(field: &'static str, value: u64) -> GitHubResult<()> {
    if value == 0 {
        return Err(GitHubError::InvalidInput {
            field,
            reason: "must be greater than 0",
        });
    }
    Ok(())
}

/// Reject blank text arguments before sending a request
pub(crate) fn require_non_empty(field: &'static str, value: &str) -> GitHubResult<()> {
    if value.trim().is_empty() {
        return Err(GitHubError::InvalidInput {
            field,
            reason: "must not be empty",
        });
    }
    Ok(())
}
