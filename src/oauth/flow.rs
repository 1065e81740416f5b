use std::time::Duration;

use reqwest::Url;

use crate::client::OAuthClient;
use crate::error::LinkedInError;
use crate::oauth::callback::{listen_for_callback, LoopbackRedirect};
use crate::oauth::state::generate_state;
use crate::transport::{HttpResponse, HttpTransport};

#[derive(Debug, Clone)]
pub struct LoginOptions {
    pub open_browser: bool,
    pub timeout: Duration,
}

impl Default for LoginOptions {
    fn default() -> Self {
        Self {
            open_browser: true,
            timeout: Duration::from_secs(120),
        }
    }
}

/// Where to listen for a loopback redirect URI such as
/// `http://localhost:8080/callback`.
pub fn loopback_redirect(redirect_uri: &str) -> Result<LoopbackRedirect, LinkedInError> {
    let url = Url::parse(redirect_uri).map_err(|e| {
        LinkedInError::ValidationError(format!("Invalid redirect_uri '{redirect_uri}': {e}"))
    })?;

    let dual_stack = match url.host_str() {
        Some("localhost") if url.scheme() == "http" => true,
        Some("127.0.0.1") if url.scheme() == "http" => false,
        _ => {
            return Err(LinkedInError::ValidationError(format!(
                "redirect_uri '{redirect_uri}' is not a loopback http:// address; \
                 complete the redirect yourself and run `exchange <CODE>`"
            )));
        }
    };

    let port = url.port().ok_or_else(|| {
        LinkedInError::ValidationError(format!(
            "redirect_uri '{redirect_uri}' must include an explicit port"
        ))
    })?;

    Ok(LoopbackRedirect {
        port,
        path: url.path().to_string(),
        dual_stack,
    })
}

/// Run the browser authorization flow against a loopback redirect URI and
/// exchange the returned code. The token response is returned unparsed.
pub async fn run_login_flow<T: HttpTransport, S: AsRef<str>>(
    client: &OAuthClient<T>,
    scopes: &[S],
    options: &LoginOptions,
) -> Result<HttpResponse, LinkedInError> {
    let redirect = loopback_redirect(client.credentials().redirect_uri())?;
    let state = generate_state();
    let auth_url = client.authorization_url(scopes, &state);

    if options.open_browser {
        if webbrowser::open(&auth_url).is_err() {
            tracing::warn!("Could not open browser automatically. Please visit:\n{auth_url}");
        }
    } else {
        eprintln!("Open this URL in your browser:\n{auth_url}");
    }

    let code = listen_for_callback(&redirect, Some(&state), options.timeout).await?;
    tracing::info!("Authorization code received, exchanging for a token");

    client.exchange_code_for_token(&code).await
}
