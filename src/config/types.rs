use serde::{Deserialize, Serialize};

/// Settings for the command-line front end.
///
/// Every field is optional in the file; credentials usually come from the
/// environment instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OAuthConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect_uri: Option<String>,
    #[serde(default)]
    pub scopes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

impl OAuthConfig {
    /// Overlay `other` on top of `self`; set fields in `other` win.
    pub fn merge(mut self, other: OAuthConfig) -> Self {
        if other.client_id.is_some() {
            self.client_id = other.client_id;
        }
        if other.client_secret.is_some() {
            self.client_secret = other.client_secret;
        }
        if other.redirect_uri.is_some() {
            self.redirect_uri = other.redirect_uri;
        }
        if !other.scopes.is_empty() {
            self.scopes = other.scopes;
        }
        if other.timeout_ms.is_some() {
            self.timeout_ms = other.timeout_ms;
        }
        if other.user_agent.is_some() {
            self.user_agent = other.user_agent;
        }
        self
    }

    /// Copy safe to print: the secret is masked.
    pub fn redacted(&self) -> Self {
        Self {
            client_secret: self.client_secret.as_ref().map(|_| "********".to_string()),
            ..self.clone()
        }
    }
}
