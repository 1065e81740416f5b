use std::time::Duration;

use crate::client::OAuthClient;
use crate::config::OAuthConfig;
use crate::credentials::ClientCredentials;
use crate::error::LinkedInError;
use crate::oauth::flow::{run_login_flow, LoginOptions};
use crate::oauth::state::generate_state;
use crate::transport::{HttpResponse, HttpTransport};
use crate::transports::http::{ReqwestTransport, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};

/// Build a client from resolved configuration.
pub fn build_client(config: &OAuthConfig) -> Result<OAuthClient<ReqwestTransport>, LinkedInError> {
    let credentials = ClientCredentials::from_parts(
        config.client_id.clone(),
        config.client_secret.clone(),
        config.redirect_uri.clone(),
    )?;
    let timeout = config
        .timeout_ms
        .map(Duration::from_millis)
        .unwrap_or(DEFAULT_TIMEOUT);
    let user_agent = config.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT);
    let transport = ReqwestTransport::with_options(timeout, user_agent)?;
    Ok(OAuthClient::with_transport(credentials, transport))
}

/// Scopes given on the command line, falling back to the configured ones.
pub fn effective_scopes(cli_scopes: Vec<String>, config: &OAuthConfig) -> Vec<String> {
    if cli_scopes.is_empty() {
        config.scopes.clone()
    } else {
        cli_scopes
    }
}

pub fn run_auth_url<T: HttpTransport>(
    client: &OAuthClient<T>,
    scopes: &[String],
    state: Option<&str>,
    random_state: bool,
) -> String {
    let state = match state {
        Some(state) => state.to_string(),
        None if random_state => generate_state(),
        None => String::new(),
    };
    client.authorization_url(scopes, &state)
}

pub async fn run_exchange<T: HttpTransport>(
    client: &OAuthClient<T>,
    code: &str,
) -> Result<HttpResponse, LinkedInError> {
    client.exchange_code_for_token(code).await
}

pub async fn run_refresh<T: HttpTransport>(
    client: &mut OAuthClient<T>,
    token: &str,
) -> Result<HttpResponse, LinkedInError> {
    client.set_refresh_token(token).refresh_access_token().await
}

pub async fn run_introspect<T: HttpTransport>(
    client: &mut OAuthClient<T>,
    token: &str,
) -> Result<HttpResponse, LinkedInError> {
    client.set_token(token).introspect_token().await
}

pub async fn run_profile<T: HttpTransport>(
    client: &mut OAuthClient<T>,
    token: &str,
) -> Result<HttpResponse, LinkedInError> {
    client.set_token(token).fetch_profile().await
}

pub async fn run_login<T: HttpTransport>(
    client: &OAuthClient<T>,
    scopes: &[String],
    open_browser: bool,
    timeout: Duration,
) -> Result<HttpResponse, LinkedInError> {
    let options = LoginOptions {
        open_browser,
        timeout,
    };
    run_login_flow(client, scopes, &options).await
}

pub fn run_config_show(config: &OAuthConfig) -> Result<String, LinkedInError> {
    Ok(serde_json::to_string_pretty(&config.redacted())?)
}
