//! The placeholder API client.

use std::time::Duration;

use serde::de::DeserializeOwned;
use taskflow_core::generate::RawPost;
use taskflow_core::model::User;

use crate::error::ClientError;

/// Public test endpoint serving mock users and posts.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Read-only client for the placeholder API.
///
/// Holds a shared `reqwest::Client` and the base URL. No auth, retry, or
/// pagination is performed; both endpoints return their full collections
/// in one response.
#[derive(Debug, Clone)]
pub struct PlaceholderClient {
    http: reqwest::Client,
    base_url: String,
}

impl PlaceholderClient {
    /// Create a client against `base_url` with a per-request timeout.
    ///
    /// Trailing slashes on the base URL are ignored.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// The resolved endpoint for a collection path.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// GET `/users`.
    pub async fn fetch_users(&self) -> Result<Vec<User>, ClientError> {
        self.fetch_collection("users").await
    }

    /// GET `/posts`.
    pub async fn fetch_posts(&self) -> Result<Vec<RawPost>, ClientError> {
        self.fetch_collection("posts").await
    }

    /// Fetch users and posts in parallel, all-or-nothing.
    ///
    /// Either failure fails the whole load; the caller is expected to log
    /// and fall back to an empty store rather than surface the error.
    pub async fn fetch_dashboard_data(&self) -> Result<(Vec<User>, Vec<RawPost>), ClientError> {
        let (users, posts) = tokio::try_join!(self.fetch_users(), self.fetch_posts())?;

        tracing::info!(
            users = users.len(),
            posts = posts.len(),
            "Fetched dashboard source data from {}",
            self.base_url,
        );

        Ok((users, posts))
    }

    async fn fetch_collection<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, ClientError> {
        let url = self.endpoint(path);
        tracing::debug!(%url, "Fetching collection");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status { url, status });
        }

        Ok(response.json().await?)
    }
}
