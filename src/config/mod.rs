pub mod loader;
pub mod types;

pub use loader::{discover_config_file, env_overrides, load_config, load_config_file};
pub use types::OAuthConfig;
