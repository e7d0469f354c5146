use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Method, RequestBuilder};
use serde::Serialize;

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::response::ApiResponse;

/// Configured HTTP context: base URL plus a client sending
/// `Content-Type: application/json` on every request.
///
/// Cheap to clone; clones share the connection pool. The run orchestrator
/// creates one before the first scenario and drops it after the last.
#[derive(Debug, Clone)]
pub struct ApiContext {
    client: reqwest::Client,
    base_url: String,
}

impl ApiContext {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        if let Err(e) = reqwest::Url::parse(&base_url) {
            return Err(ClientError::InvalidBaseUrl {
                url: base_url,
                reason: e.to_string(),
            });
        }

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let client = reqwest::Client::builder().default_headers(headers).build()?;

        Ok(Self { client, base_url })
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, ClientError> {
        Self::new(config.base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a path starting with `/`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `GET` an arbitrary path, query string included verbatim.
    pub async fn get(&self, path: &str) -> Result<ApiResponse, ClientError> {
        self.send(Method::GET, path, self.client.get(self.url(path))).await
    }

    /// `GET` with query pairs. An empty pair list leaves the URL without `?`.
    pub async fn get_with_query<Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<ApiResponse, ClientError> {
        let request = self.client.get(self.url(path)).query(query);
        self.send(Method::GET, path, request).await
    }

    pub async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<ApiResponse, ClientError> {
        let request = self.client.post(self.url(path)).json(body);
        self.send(Method::POST, path, request).await
    }

    pub async fn patch_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<ApiResponse, ClientError> {
        let request = self.client.patch(self.url(path)).json(body);
        self.send(Method::PATCH, path, request).await
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        request: RequestBuilder,
    ) -> Result<ApiResponse, ClientError> {
        let response = request.send().await?;
        let response = ApiResponse::read(response).await?;
        tracing::debug!(%method, path, status = response.status(), "HTTP call completed");
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let ctx = ApiContext::new("http://localhost:3001/").unwrap();
        assert_eq!(ctx.base_url(), "http://localhost:3001");
        assert_eq!(ctx.url("/characters"), "http://localhost:3001/characters");
    }

    #[test]
    fn unparsable_base_url_is_rejected() {
        assert_matches!(
            ApiContext::new("not a url"),
            Err(ClientError::InvalidBaseUrl { .. })
        );
    }
}
