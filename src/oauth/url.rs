use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::LinkedInError;

use super::endpoints::{params, AUTHORIZATION_URL};

/// Characters left as-is when encoding a single URI component:
/// `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode one query component.
pub fn encode_component(input: &str) -> String {
    utf8_percent_encode(input, COMPONENT).to_string()
}

/// Build the authorization redirect URL.
///
/// `client_id` and `redirect_uri` are inserted verbatim; the comma-joined
/// scopes and the state are component-encoded.
pub fn build_authorization_url<S: AsRef<str>>(
    client_id: &str,
    redirect_uri: &str,
    scopes: &[S],
    state: &str,
) -> String {
    let scope = scopes
        .iter()
        .map(|s| s.as_ref())
        .collect::<Vec<&str>>()
        .join(",");

    format!(
        "{AUTHORIZATION_URL}?{}={}&{}={client_id}&{}={redirect_uri}&{}={}&{}={}",
        params::RESPONSE_TYPE,
        params::RESPONSE_TYPE_CODE,
        params::CLIENT_ID,
        params::REDIRECT_URI,
        params::STATE,
        encode_component(state),
        params::SCOPE,
        encode_component(&scope),
    )
}

/// Encode ordered pairs as an `application/x-www-form-urlencoded` body.
pub fn form_body(pairs: &[(&str, &str)]) -> Result<String, LinkedInError> {
    serde_urlencoded::to_string(pairs)
        .map_err(|e| LinkedInError::ValidationError(format!("Cannot encode form body: {e}")))
}
