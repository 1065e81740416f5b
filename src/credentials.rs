use crate::error::LinkedInError;

/// Application credentials registered with LinkedIn.
///
/// All three values are required; they never change after construction.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientCredentials {
    client_id: String,
    client_secret: String,
    redirect_uri: String,
}

impl std::fmt::Debug for ClientCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("redirect_uri", &self.redirect_uri)
            .finish()
    }
}

impl ClientCredentials {
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        redirect_uri: impl Into<String>,
    ) -> Result<Self, LinkedInError> {
        let client_id = required("client_id", client_id.into())?;
        let client_secret = required("client_secret", client_secret.into())?;
        let redirect_uri = required("redirect_uri", redirect_uri.into())?;

        Ok(Self {
            client_id,
            client_secret,
            redirect_uri,
        })
    }

    /// Like [`Self::new`] but for values that may be absent, e.g. unset
    /// configuration entries.
    pub fn from_parts(
        client_id: Option<String>,
        client_secret: Option<String>,
        redirect_uri: Option<String>,
    ) -> Result<Self, LinkedInError> {
        Self::new(
            client_id.ok_or(LinkedInError::ConfigurationError { field: "client_id" })?,
            client_secret.ok_or(LinkedInError::ConfigurationError {
                field: "client_secret",
            })?,
            redirect_uri.ok_or(LinkedInError::ConfigurationError {
                field: "redirect_uri",
            })?,
        )
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }

    pub fn redirect_uri(&self) -> &str {
        &self.redirect_uri
    }
}

fn required(field: &'static str, value: String) -> Result<String, LinkedInError> {
    if value.is_empty() {
        return Err(LinkedInError::ConfigurationError { field });
    }
    Ok(value)
}
