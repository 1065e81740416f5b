use std::net::{Ipv4Addr, Ipv6Addr};
use std::time::Duration;

use reqwest::Url;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use crate::error::LinkedInError;

/// Extract the authorization code from the URL LinkedIn redirected to.
///
/// Fails when the provider reported an `error`, when no `code` is present,
/// or when `expected_state` is given and the returned `state` differs.
pub fn parse_redirect(url: &str, expected_state: Option<&str>) -> Result<String, LinkedInError> {
    let url = Url::parse(url.trim())
        .map_err(|e| LinkedInError::Callback(format!("Invalid redirect URL: {e}")))?;

    let mut code = None;
    let mut state = None;
    let mut error = None;
    let mut error_description = None;
    for (key, value) in url.query_pairs() {
        match key.as_ref() {
            "code" => code = Some(value.into_owned()),
            "state" => state = Some(value.into_owned()),
            "error" => error = Some(value.into_owned()),
            "error_description" => error_description = Some(value.into_owned()),
            _ => {}
        }
    }

    if let Some(error) = error {
        return Err(LinkedInError::Callback(match error_description {
            Some(desc) => format!("Authorization denied: {error} ({desc})"),
            None => format!("Authorization denied: {error}"),
        }));
    }

    if let Some(expected) = expected_state {
        if state.as_deref() != Some(expected) {
            tracing::error!("Request state does not match the callback state");
            return Err(LinkedInError::Callback(
                "State mismatch in authorization callback".to_string(),
            ));
        }
    }

    code.filter(|c| !c.is_empty()).ok_or_else(|| {
        LinkedInError::Callback("No authorization code found in callback request".to_string())
    })
}

/// Where the browser is expected to land after authorization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoopbackRedirect {
    pub port: u16,
    /// Path component of the redirect URI, e.g. `/callback`.
    pub path: String,
    /// `localhost` may resolve to `::1` as well as `127.0.0.1`.
    pub dual_stack: bool,
}

const REQUEST_READ_TIMEOUT: Duration = Duration::from_secs(2);
const MAX_REQUEST_LINE: usize = 8192;

/// Wait for the redirect on the loopback interface and return its code.
///
/// Connections that never send a request line, or that ask for a path other
/// than `redirect.path` (favicon, preconnect), are answered or dropped and the
/// listener keeps waiting until `timeout`.
pub async fn listen_for_callback(
    redirect: &LoopbackRedirect,
    expected_state: Option<&str>,
    timeout: Duration,
) -> Result<String, LinkedInError> {
    let port = redirect.port;
    let v4 = TcpListener::bind((Ipv4Addr::LOCALHOST, port)).await?;
    let v6 = if redirect.dual_stack {
        match TcpListener::bind((Ipv6Addr::LOCALHOST, port)).await {
            Ok(listener) => Some(listener),
            Err(e) => {
                tracing::debug!(error = %e, "IPv6 loopback unavailable, listening on IPv4 only");
                None
            }
        }
    } else {
        None
    };
    tracing::debug!(port, path = %redirect.path, "Waiting for OAuth redirect");

    let accept_future = async {
        loop {
            let mut stream = accept(&v4, v6.as_ref()).await?;

            let target = match tokio::time::timeout(
                REQUEST_READ_TIMEOUT,
                read_request_target(&mut stream),
            )
            .await
            {
                Ok(Ok(Some(target))) => target,
                Ok(Ok(None)) => {
                    tracing::debug!("Ignoring connection without a request line");
                    continue;
                }
                Ok(Err(e)) => {
                    tracing::debug!(error = %e, "Ignoring unreadable connection");
                    continue;
                }
                Err(_) => {
                    tracing::debug!("Ignoring idle connection");
                    continue;
                }
            };

            if target_path(&target) != redirect.path {
                tracing::debug!(target = %target, "Ignoring request for another path");
                if let Err(e) = respond(&mut stream, "404 Not Found", "Not found.").await {
                    tracing::debug!(error = %e, "Failed to answer stray request");
                }
                continue;
            }

            let outcome =
                parse_redirect(&format!("http://localhost:{port}{target}"), expected_state);
            let (status, message) = match &outcome {
                Ok(_) => (
                    "200 OK",
                    "Authentication successful! You can close this window and return to the terminal.",
                ),
                Err(_) => (
                    "400 Bad Request",
                    "Authentication failed. Return to the terminal for details.",
                ),
            };
            respond(&mut stream, status, message).await?;

            return outcome;
        }
    };

    tokio::time::timeout(timeout, accept_future)
        .await
        .map_err(|_| {
            LinkedInError::Callback(format!(
                "Timed out waiting for OAuth callback after {}s",
                timeout.as_secs()
            ))
        })?
}

async fn accept(v4: &TcpListener, v6: Option<&TcpListener>) -> std::io::Result<TcpStream> {
    let (stream, _) = match v6 {
        Some(v6) => tokio::select! {
            accepted = v4.accept() => accepted?,
            accepted = v6.accept() => accepted?,
        },
        None => v4.accept().await?,
    };
    Ok(stream)
}

/// Read until the end of the request line and return its target.
async fn read_request_target(stream: &mut TcpStream) -> std::io::Result<Option<String>> {
    let mut buf = Vec::with_capacity(1024);
    let mut chunk = [0u8; 1024];
    while !buf.contains(&b'\n') && buf.len() < MAX_REQUEST_LINE {
        let n = stream.read(&mut chunk).await?;
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }
    let request = String::from_utf8_lossy(&buf);
    Ok(request_target(&request).map(str::to_string))
}

async fn respond(stream: &mut TcpStream, status: &str, message: &str) -> std::io::Result<()> {
    let body = format!("<!DOCTYPE html><html><body><h1>{message}</h1></body></html>");
    let response = format!(
        "HTTP/1.1 {status}\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        body.len(),
        body
    );
    stream.write_all(response.as_bytes()).await?;
    stream.shutdown().await
}

/// Request target from "GET /callback?code=... HTTP/1.1".
fn request_target(request: &str) -> Option<&str> {
    let first_line = request.lines().next()?;
    let mut parts = first_line.split_whitespace();
    let _method = parts.next()?;
    parts.next().filter(|target| target.starts_with('/'))
}

fn target_path(target: &str) -> &str {
    target.split_once('?').map_or(target, |(path, _)| path)
}
