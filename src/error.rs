use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum LinkedInError {
    #[error("{field} is required")]
    ConfigurationError { field: &'static str },

    #[error("Invalid argument: {0}")]
    ValidationError(String),

    #[error("Invalid client state: {0}")]
    StateError(String),

    #[error("{}", format_http(.status, .body))]
    Http { status: u16, body: String },

    #[error("Transport error: {0}")]
    TransportError(Box<dyn std::error::Error + Send + Sync>),

    #[error("Error in config {}: {detail}", path.display())]
    ConfigFile { path: PathBuf, detail: String },

    #[error("OAuth callback error: {0}")]
    Callback(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn format_http(status: &u16, body: &str) -> String {
    if body.is_empty() {
        format!("HTTP {status}")
    } else {
        format!("HTTP {status}: {body}")
    }
}

impl LinkedInError {
    /// Error code string for structured JSON output.
    pub fn code(&self) -> &'static str {
        match self {
            LinkedInError::ConfigurationError { .. } => "configuration_error",
            LinkedInError::ValidationError(_) => "validation_error",
            LinkedInError::StateError(_) => "state_error",
            LinkedInError::Http { .. } => "http_error",
            LinkedInError::TransportError(_) => "transport_error",
            LinkedInError::ConfigFile { .. } => "config_error",
            LinkedInError::Callback(_) => "callback_error",
            LinkedInError::Json(_) => "parse_error",
            LinkedInError::Io(_) => "io_error",
        }
    }

    /// HTTP status attached by the transport, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            LinkedInError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        let mut obj = serde_json::Map::new();
        if let Some(status) = self.status() {
            obj.insert("status".into(), serde_json::Value::from(status));
        }
        if let LinkedInError::Http { body, .. } = self {
            obj.insert("body".into(), serde_json::Value::String(body.clone()));
        }
        obj.insert("message".into(), serde_json::Value::String(self.to_string()));
        obj.insert("code".into(), serde_json::Value::String(self.code().to_string()));
        serde_json::json!({ "error": obj })
    }
}
