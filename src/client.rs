use crate::credentials::ClientCredentials;
use crate::error::LinkedInError;
use crate::oauth::endpoints::{
    params, ACCESS_TOKEN_URL, FORM_CONTENT_TYPE, INTROSPECT_TOKEN_URL, PROFILE_URL,
};
use crate::oauth::url::{build_authorization_url, form_body};
use crate::transport::{HttpResponse, HttpTransport};
use crate::transports::ReqwestTransport;

/// Client for LinkedIn's OAuth 2.0 and profile endpoints.
///
/// Holds the application credentials and at most one bearer token. Every
/// network operation returns the raw [`HttpResponse`]; nothing is parsed or
/// stored automatically, so after [`Self::exchange_code_for_token`] the
/// caller reads the token from the body and hands it to [`Self::set_token`].
///
/// The single token slot is used both as the access token (profile,
/// introspection) and as the refresh token. A dedicated refresh token set
/// with [`Self::set_refresh_token`] takes precedence for refreshes.
#[derive(Debug)]
pub struct OAuthClient<T = ReqwestTransport> {
    credentials: ClientCredentials,
    token: Option<String>,
    refresh_token: Option<String>,
    transport: T,
}

impl OAuthClient<ReqwestTransport> {
    /// Build a client with the default `reqwest` transport.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        redirect_uri: impl Into<String>,
    ) -> Result<Self, LinkedInError> {
        let credentials = ClientCredentials::new(client_id, client_secret, redirect_uri)?;
        Ok(Self::with_transport(credentials, ReqwestTransport::new()?))
    }
}

impl<T: HttpTransport> OAuthClient<T> {
    pub fn with_transport(credentials: ClientCredentials, transport: T) -> Self {
        Self {
            credentials,
            token: None,
            refresh_token: None,
            transport,
        }
    }

    pub fn credentials(&self) -> &ClientCredentials {
        &self.credentials
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// URL to send the user's browser to. `state` may be empty.
    pub fn authorization_url<S: AsRef<str>>(&self, scopes: &[S], state: &str) -> String {
        build_authorization_url(
            self.credentials.client_id(),
            self.credentials.redirect_uri(),
            scopes,
            state,
        )
    }

    /// Store the bearer token used by every token-dependent call.
    pub fn set_token(&mut self, token: impl Into<String>) -> &mut Self {
        self.token = Some(token.into());
        self
    }

    pub fn set_refresh_token(&mut self, refresh_token: impl Into<String>) -> &mut Self {
        self.refresh_token = Some(refresh_token.into());
        self
    }

    /// Trade an authorization code for an access token.
    pub async fn exchange_code_for_token(&self, code: &str) -> Result<HttpResponse, LinkedInError> {
        if code.is_empty() {
            return Err(LinkedInError::ValidationError("code is required".to_string()));
        }

        let body = form_body(&[
            (params::GRANT_TYPE, params::GRANT_TYPE_AUTH_CODE),
            (params::CODE, code),
            (params::REDIRECT_URI, self.credentials.redirect_uri()),
            (params::CLIENT_ID, self.credentials.client_id()),
            (params::CLIENT_SECRET, self.credentials.client_secret()),
        ])?;
        self.post_form(ACCESS_TOKEN_URL, body).await
    }

    pub async fn refresh_access_token(&self) -> Result<HttpResponse, LinkedInError> {
        let refresh_token = match self.refresh_token.as_deref() {
            Some(refresh_token) => refresh_token,
            None => self.require_token()?,
        };

        let body = form_body(&[
            (params::GRANT_TYPE, params::GRANT_TYPE_REFRESH_TOKEN),
            (params::REFRESH_TOKEN, refresh_token),
            (params::CLIENT_ID, self.credentials.client_id()),
            (params::CLIENT_SECRET, self.credentials.client_secret()),
        ])?;
        self.post_form(ACCESS_TOKEN_URL, body).await
    }

    pub async fn introspect_token(&self) -> Result<HttpResponse, LinkedInError> {
        let token = self.require_token()?;

        let body = form_body(&[
            (params::TOKEN, token),
            (params::CLIENT_ID, self.credentials.client_id()),
            (params::CLIENT_SECRET, self.credentials.client_secret()),
        ])?;
        self.post_form(INTROSPECT_TOKEN_URL, body).await
    }

    /// Fetch the authenticated member's profile.
    pub async fn fetch_profile(&self) -> Result<HttpResponse, LinkedInError> {
        let token = self.require_token()?;
        let authorization = format!("Bearer {token}");
        self.transport
            .get(PROFILE_URL, &[("Authorization", authorization.as_str())])
            .await
    }

    fn require_token(&self) -> Result<&str, LinkedInError> {
        self.token
            .as_deref()
            .ok_or_else(|| LinkedInError::StateError("token is required".to_string()))
    }

    async fn post_form(&self, url: &str, body: String) -> Result<HttpResponse, LinkedInError> {
        self.transport
            .post(url, body, &[("content-type", FORM_CONTENT_TYPE)])
            .await
    }
}
