use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::error::ClientError;

/// A fully read HTTP response: status, headers, final URL and raw body.
///
/// The body is buffered once so it can be decoded as many times, and into as
/// many shapes, as a scenario needs.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status: StatusCode,
    headers: HeaderMap,
    url: String,
    body: Vec<u8>,
}

impl ApiResponse {
    pub(crate) async fn read(response: reqwest::Response) -> Result<Self, ClientError> {
        let status = response.status();
        let headers = response.headers().clone();
        let url = response.url().to_string();
        let body = response.bytes().await?.to_vec();

        Ok(Self {
            status,
            headers,
            url,
            body,
        })
    }

    /// Build a response by hand (used by tests that do not go over the wire).
    pub fn from_parts(status: StatusCode, url: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            url: url.into(),
            body: body.into(),
        }
    }

    pub fn status(&self) -> u16 {
        self.status.as_u16()
    }

    pub fn status_code(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Body as text, with invalid UTF-8 replaced.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Decode the body into `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ClientError> {
        serde_json::from_slice(&self.body).map_err(|source| ClientError::Decode {
            url: self.url.clone(),
            status: self.status(),
            source,
        })
    }

    /// Decode the body as untyped JSON.
    pub fn json_value(&self) -> Result<serde_json::Value, ClientError> {
        self.json()
    }
}
