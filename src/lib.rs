//! Client for LinkedIn's OAuth 2.0 and profile REST endpoints.
//!
//! ```no_run
//! # async fn demo() -> Result<(), linkedin_oauth::LinkedInError> {
//! use linkedin_oauth::{AccessToken, OAuthClient};
//!
//! let mut client = OAuthClient::new("CID", "SECRET", "https://app.example/cb")?;
//! let url = client.authorization_url(&["r_liteprofile"], "xyz");
//! # let _ = url;
//! let token: AccessToken = client.exchange_code_for_token("CODE").await?.json()?;
//! let profile = client.set_token(token.access_token).fetch_profile().await?;
//! println!("{}", profile.body);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod client;
pub mod config;
pub mod credentials;
pub mod error;
pub mod oauth;
pub mod transport;
pub mod transports;
pub mod types;

pub use client::OAuthClient;
pub use config::{load_config, OAuthConfig};
pub use credentials::ClientCredentials;
pub use error::LinkedInError;
pub use transport::{Headers, HttpResponse, HttpTransport};
pub use transports::ReqwestTransport;
pub use types::{AccessToken, Profile, TokenIntrospection};
