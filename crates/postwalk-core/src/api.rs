//! Client for the upstream content API.
//!
//! One `reqwest::Client` is built at startup and shared; every call is a
//! fresh round trip (no caching, no retries). Failures are classified at
//! this boundary and logged before they propagate.

use serde::de::DeserializeOwned;

use crate::{
    domain::{Comment, Post, PostId},
    errors::Error,
    Result,
};

#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    api_token: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, api_token: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            api_token: api_token.into(),
        }
    }

    /// `GET <base>/posts/`
    pub async fn fetch_posts(&self) -> Result<Vec<Post>> {
        let url = format!("{}/posts/", self.base_url);
        self.get_json(&url).await
    }

    /// `GET <base>/posts/{id}/comments`
    ///
    /// The client does not validate `post_id` locally; a non-existent id is
    /// whatever the server returns for it.
    pub async fn fetch_comments(&self, post_id: PostId) -> Result<Vec<Comment>> {
        let url = format!("{}/posts/{}/comments", self.base_url, post_id);
        self.get_json(&url).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let resp = self
            .http
            .get(url)
            .bearer_auth(&self.api_token)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(%url, error = %e, "connection to content API failed");
                Error::Connection(format!("GET {url}: {e}"))
            })?;

        let status = resp.status();
        if !status.is_success() {
            tracing::error!(%url, %status, "content API returned an error status");
            return Err(Error::Connection(format!("GET {url}: status {status}")));
        }

        resp.json::<T>().await.map_err(|e| {
            tracing::error!(%url, error = %e, "failed to decode content API response");
            Error::Decode(format!("GET {url}: {e}"))
        })
    }
}
