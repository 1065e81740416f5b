#![allow(dead_code)]

use async_trait::async_trait;
use linkedin_oauth::{Headers, HttpResponse, HttpTransport, LinkedInError, ReqwestTransport};
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Sends requests meant for LinkedIn to a local mock server instead.
pub struct RewriteTransport {
    inner: ReqwestTransport,
    base_url: String,
}

impl RewriteTransport {
    pub fn new(base_url: &str) -> Self {
        Self {
            inner: ReqwestTransport::new().unwrap(),
            base_url: base_url.to_string(),
        }
    }

    fn rewrite(&self, url: &str) -> String {
        let path = url
            .strip_prefix("https://www.linkedin.com")
            .or_else(|| url.strip_prefix("https://api.linkedin.com"))
            .unwrap_or(url);
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl HttpTransport for RewriteTransport {
    async fn get(&self, url: &str, headers: &Headers<'_>) -> Result<HttpResponse, LinkedInError> {
        self.inner.get(&self.rewrite(url), headers).await
    }

    async fn post(
        &self,
        url: &str,
        body: String,
        headers: &Headers<'_>,
    ) -> Result<HttpResponse, LinkedInError> {
        self.inner.post(&self.rewrite(url), body, headers).await
    }
}

/// Mock of the three LinkedIn endpoints the client talks to.
pub async fn start_mock_linkedin() -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/oauth/v2/accessToken"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string(
            "grant_type=authorization_code&code=good-code\
             &redirect_uri=https%3A%2F%2Fapp.example%2Fcb&client_id=CID&client_secret=SECRET",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "AQX-access",
            "expires_in": 5184000,
            "refresh_token": "AQW-refresh",
            "refresh_token_expires_in": 31536000,
            "scope": "r_liteprofile,w_member_social"
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/oauth/v2/accessToken"))
        .and(body_string(
            "grant_type=authorization_code&code=bad-code\
             &redirect_uri=https%3A%2F%2Fapp.example%2Fcb&client_id=CID&client_secret=SECRET",
        ))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "error": "invalid_request",
            "error_description": "Unable to retrieve access token: appid/redirect uri/code verifier does not match authorization code"
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/oauth/v2/accessToken"))
        .and(body_string(
            "grant_type=refresh_token&refresh_token=AQW-refresh&client_id=CID&client_secret=SECRET",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "AQX-renewed",
            "expires_in": 5184000,
            "refresh_token": "AQW-refresh",
            "refresh_token_expires_in": 30000000
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/oauth/v2/introspectToken"))
        .and(body_string("token=AQX-access&client_id=CID&client_secret=SECRET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "active": true,
            "client_id": "CID",
            "authorized_at": 1700000000,
            "created_at": 1700000000,
            "status": "active",
            "expires_at": 1705184000,
            "scope": "r_liteprofile,w_member_social",
            "auth_type": "3L"
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v2/me"))
        .and(header("authorization", "Bearer AQX-access"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "yrZCpj2Z12",
            "localizedFirstName": "Bob",
            "localizedLastName": "Smith"
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v2/me"))
        .and(header("authorization", "Bearer expired"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "serviceErrorCode": 65601,
            "message": "The token used in the request has been revoked by the user",
            "status": 401
        })))
        .mount(&server)
        .await;

    server
}
