use std::path::{Path, PathBuf};

use crate::error::LinkedInError;

use super::types::OAuthConfig;

pub const CONFIG_ENV: &str = "LINKEDIN_OAUTH_CONFIG";
pub const CLIENT_ID_ENV: &str = "LINKEDIN_CLIENT_ID";
pub const CLIENT_SECRET_ENV: &str = "LINKEDIN_CLIENT_SECRET";
pub const REDIRECT_URI_ENV: &str = "LINKEDIN_REDIRECT_URI";

/// Pick the config file to read, highest precedence first:
/// 1. `--config` CLI flag
/// 2. `LINKEDIN_OAUTH_CONFIG` env var
/// 3. `~/.linkedin-oauth/config.json`
///
/// An explicit `--config` path is returned as-is; the other candidates only
/// when they exist on disk.
pub fn discover_config_file(cli_config: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = cli_config {
        return Some(path.to_path_buf());
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV) {
        let p = PathBuf::from(env_path);
        if p.exists() {
            return Some(p);
        }
    }

    let home_config = dirs::home_dir()?.join(".linkedin-oauth").join("config.json");
    home_config.exists().then_some(home_config)
}

/// Read one config file. A missing file yields the default config.
pub fn load_config_file(path: &Path) -> Result<OAuthConfig, LinkedInError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "Config file not found, using defaults");
            return Ok(OAuthConfig::default());
        }
        Err(e) => return Err(LinkedInError::Io(e)),
    };

    serde_json::from_str(&content).map_err(|e| LinkedInError::ConfigFile {
        path: path.to_path_buf(),
        detail: e.to_string(),
    })
}

/// Credentials supplied through the environment. Empty values count as unset.
pub fn env_overrides<F>(lookup: F) -> OAuthConfig
where
    F: Fn(&str) -> Option<String>,
{
    let var = |name: &str| lookup(name).filter(|v| !v.is_empty());
    OAuthConfig {
        client_id: var(CLIENT_ID_ENV),
        client_secret: var(CLIENT_SECRET_ENV),
        redirect_uri: var(REDIRECT_URI_ENV),
        ..Default::default()
    }
}

/// Resolve the effective config: file, then environment on top.
pub fn load_config(cli_config: Option<&Path>) -> Result<OAuthConfig, LinkedInError> {
    let file_config = match discover_config_file(cli_config) {
        Some(path) => {
            tracing::debug!(path = %path.display(), "Loading config file");
            load_config_file(&path)?
        }
        None => OAuthConfig::default(),
    };

    Ok(file_config.merge(env_overrides(|name| std::env::var(name).ok())))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn missing_file_yields_default() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_config_file(&dir.path().join("absent.json")).unwrap();
        assert_eq!(cfg, OAuthConfig::default());
    }

    #[test]
    fn malformed_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = load_config_file(&path).unwrap_err();
        assert_eq!(err.code(), "config_error");
        assert!(err.to_string().contains("config.json"));
    }

    #[test]
    fn valid_file_is_parsed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"clientId": "CID", "scopes": ["r_liteprofile"]}"#).unwrap();
        let cfg = load_config_file(&path).unwrap();
        assert_eq!(cfg.client_id.as_deref(), Some("CID"));
        assert_eq!(cfg.scopes, vec!["r_liteprofile"]);
    }

    #[test]
    fn cli_path_wins_even_if_missing() {
        let path = PathBuf::from("/definitely/not/here.json");
        assert_eq!(discover_config_file(Some(path.as_path())), Some(path));
    }

    #[test]
    fn env_overrides_read_credentials() {
        let env: HashMap<&str, &str> = HashMap::from([
            (CLIENT_ID_ENV, "env-id"),
            (CLIENT_SECRET_ENV, "env-secret"),
            (REDIRECT_URI_ENV, ""),
        ]);
        let cfg = env_overrides(|name| env.get(name).map(|v| v.to_string()));
        assert_eq!(cfg.client_id.as_deref(), Some("env-id"));
        assert_eq!(cfg.client_secret.as_deref(), Some("env-secret"));
        assert!(cfg.redirect_uri.is_none());
    }

    #[test]
    fn env_overrides_win_over_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(
            &path,
            r#"{"clientId": "file-id", "redirectUri": "http://localhost:9000/cb"}"#,
        )
        .unwrap();
        let file = load_config_file(&path).unwrap();
        let merged = file.merge(env_overrides(|name| {
            (name == CLIENT_ID_ENV).then(|| "env-id".to_string())
        }));
        assert_eq!(merged.client_id.as_deref(), Some("env-id"));
        assert_eq!(merged.redirect_uri.as_deref(), Some("http://localhost:9000/cb"));
    }
}
