//! Typed HTTP client for the `/api/v1` endpoints.
//!
//! Each entity module adds its fetch and mutation methods to [`ApiClient`]
//! and exposes the [`CacheKey`](crate::cache::CacheKey) builders the data
//! layer caches those fetches under.

pub mod authors;
pub mod books;
pub mod consts;
pub mod episodes;
pub mod images;
pub mod rankings;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

/// Path prefix shared by every API route.
pub const API_PREFIX: &str = "/api/v1";

/// HTTP client for one Cyber TOON API server.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the server at `base_url`, e.g.
    /// `http://localhost:8000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.api_base_url.clone())
    }

    /// Absolute URL of an API path such as `/books/{id}`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{API_PREFIX}{path}", self.base_url)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ClientResult<T> {
        tracing::debug!(path, "GET");
        let response = self.client.get(self.url(path)).query(query).send().await?;
        Self::parse_response(response).await
    }

    pub(crate) async fn get_text(&self, path: &str) -> ClientResult<String> {
        tracing::debug!(path, "GET");
        let response = self.client.get(self.url(path)).send().await?;
        let response = Self::ensure_success(response).await?;
        Ok(response.text().await?)
    }

    pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        tracing::debug!(path, "POST");
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::parse_response(response).await
    }

    pub(crate) async fn patch_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        tracing::debug!(path, "PATCH");
        let response = self.client.patch(self.url(path)).json(body).send().await?;
        Self::parse_response(response).await
    }

    pub(crate) async fn delete(&self, path: &str) -> ClientResult<()> {
        tracing::debug!(path, "DELETE");
        let response = self.client.delete(self.url(path)).send().await?;
        Self::check_status(response).await
    }

    pub(crate) async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> ClientResult<T> {
        tracing::debug!(path, "POST multipart");
        let response = self
            .client
            .post(self.url(path))
            .multipart(form)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    // ---- private helpers ----

    /// Return the response unchanged on a success status, or a
    /// [`ClientError::Api`] carrying the status and body text.
    async fn ensure_success(response: reqwest::Response) -> ClientResult<reqwest::Response> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ClientError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    async fn parse_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }

    async fn check_status(response: reqwest::Response) -> ClientResult<()> {
        Self::ensure_success(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_prefix_without_double_slash() {
        let api = ApiClient::new("http://localhost:8000/");
        assert_eq!(api.url("/books"), "http://localhost:8000/api/v1/books");
    }
}
