use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::LinkedInError;
use crate::transport::{Headers, HttpResponse, HttpTransport};

/// A request captured by [`MockTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: &'static str,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// In-memory transport that records every call and replays queued outcomes.
///
/// With nothing queued it answers `200 {}`.
#[derive(Debug, Default)]
pub struct MockTransport {
    requests: Mutex<Vec<RecordedRequest>>,
    outcomes: Mutex<VecDeque<Result<HttpResponse, LinkedInError>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond_with(self, outcome: Result<HttpResponse, LinkedInError>) -> Self {
        self.push(outcome);
        self
    }

    pub fn push(&self, outcome: Result<HttpResponse, LinkedInError>) {
        if let Ok(mut guard) = self.outcomes.lock() {
            guard.push_back(outcome);
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().map(|guard| guard.len()).unwrap_or(0)
    }

    fn record(
        &self,
        method: &'static str,
        url: &str,
        body: Option<String>,
        headers: &Headers<'_>,
    ) -> Result<HttpResponse, LinkedInError> {
        if let Ok(mut guard) = self.requests.lock() {
            guard.push(RecordedRequest {
                method,
                url: url.to_string(),
                headers: headers
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
                body,
            });
        }
        self.outcomes
            .lock()
            .ok()
            .and_then(|mut guard| guard.pop_front())
            .unwrap_or_else(|| Ok(HttpResponse::new(200, "{}")))
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn get(&self, url: &str, headers: &Headers<'_>) -> Result<HttpResponse, LinkedInError> {
        self.record("GET", url, None, headers)
    }

    async fn post(
        &self,
        url: &str,
        body: String,
        headers: &Headers<'_>,
    ) -> Result<HttpResponse, LinkedInError> {
        self.record("POST", url, Some(body), headers)
    }
}
