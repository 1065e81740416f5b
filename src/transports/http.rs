use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::error::LinkedInError;
use crate::transport::{Headers, HttpResponse, HttpTransport};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_USER_AGENT: &str = concat!("linkedin-oauth/", env!("CARGO_PKG_VERSION"));

/// Default transport backed by a pooled `reqwest::Client`.
///
/// Non-2xx answers become [`LinkedInError::Http`] carrying the status and the
/// response body; connection failures and timeouts become
/// [`LinkedInError::TransportError`].
pub struct ReqwestTransport {
    client: reqwest::Client,
    timeout: Duration,
}

impl std::fmt::Debug for ReqwestTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestTransport")
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, LinkedInError> {
        Self::with_options(DEFAULT_TIMEOUT, DEFAULT_USER_AGENT)
    }

    pub fn with_options(timeout: Duration, user_agent: &str) -> Result<Self, LinkedInError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| LinkedInError::TransportError(Box::new(e)))?;

        Ok(Self { client, timeout })
    }

    /// Wrap an already configured client, e.g. one with a proxy.
    pub fn from_client(client: reqwest::Client) -> Self {
        Self {
            client,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<HttpResponse, LinkedInError> {
        let response = request
            .send()
            .await
            .map_err(|e| LinkedInError::TransportError(Box::new(e)))?;

        let status = response.status();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response
            .text()
            .await
            .map_err(|e| LinkedInError::TransportError(Box::new(e)))?;

        tracing::debug!(status = status.as_u16(), "LinkedIn response received");

        if !status.is_success() {
            return Err(LinkedInError::Http {
                status: status.as_u16(),
                body,
            });
        }

        Ok(HttpResponse {
            status: status.as_u16(),
            headers,
            body,
        })
    }
}

fn header_map(headers: &Headers<'_>) -> Result<HeaderMap, LinkedInError> {
    let mut map = HeaderMap::new();
    for (key, value) in headers {
        let name = HeaderName::from_bytes(key.as_bytes()).map_err(|e| {
            LinkedInError::ValidationError(format!("Invalid header name '{key}': {e}"))
        })?;
        let val = HeaderValue::from_str(value).map_err(|e| {
            LinkedInError::ValidationError(format!("Invalid header value for '{key}': {e}"))
        })?;
        map.insert(name, val);
    }
    Ok(map)
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str, headers: &Headers<'_>) -> Result<HttpResponse, LinkedInError> {
        tracing::debug!(method = "GET", url, "Sending LinkedIn request");
        let request = self.client.get(url).headers(header_map(headers)?);
        self.send(request).await
    }

    async fn post(
        &self,
        url: &str,
        body: String,
        headers: &Headers<'_>,
    ) -> Result<HttpResponse, LinkedInError> {
        tracing::debug!(method = "POST", url, "Sending LinkedIn request");
        let request = self
            .client
            .post(url)
            .headers(header_map(headers)?)
            .body(body);
        self.send(request).await
    }
}
