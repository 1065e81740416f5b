use async_trait::async_trait;

use crate::error::LinkedInError;

/// Request headers as ordered name/value pairs.
pub type Headers<'a> = [(&'a str, &'a str)];

/// Raw HTTP response handed back to the caller untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Case-insensitive header lookup. Returns the first match.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Deserialize the body into one of the typed views in [`crate::types`]
    /// or any other `Deserialize` type.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, LinkedInError> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

impl std::fmt::Debug for dyn HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport").finish()
    }
}

/// The HTTP calling convention used by [`crate::OAuthClient`].
///
/// Implementations surface a non-2xx answer as [`LinkedInError::Http`] and a
/// network failure as [`LinkedInError::TransportError`]. The client returns
/// whatever the transport produced without remapping it.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Issue a GET request without a body.
    async fn get(&self, url: &str, headers: &Headers<'_>) -> Result<HttpResponse, LinkedInError>;

    /// Issue a POST request with an already encoded body.
    async fn post(
        &self,
        url: &str,
        body: String,
        headers: &Headers<'_>,
    ) -> Result<HttpResponse, LinkedInError>;
}
