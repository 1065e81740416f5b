//! Fixed LinkedIn endpoints and the OAuth parameter names sent to them.

pub const AUTHORIZATION_URL: &str = "https://www.linkedin.com/oauth/v2/authorization";
pub const ACCESS_TOKEN_URL: &str = "https://www.linkedin.com/oauth/v2/accessToken";
pub const INTROSPECT_TOKEN_URL: &str = "https://www.linkedin.com/oauth/v2/introspectToken";
pub const PROFILE_URL: &str = "https://api.linkedin.com/v2/me";

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

pub(crate) mod params {
    pub const CLIENT_ID: &str = "client_id";
    pub const CLIENT_SECRET: &str = "client_secret";
    pub const CODE: &str = "code";
    pub const GRANT_TYPE: &str = "grant_type";
    pub const GRANT_TYPE_AUTH_CODE: &str = "authorization_code";
    pub const GRANT_TYPE_REFRESH_TOKEN: &str = "refresh_token";
    pub const REDIRECT_URI: &str = "redirect_uri";
    pub const REFRESH_TOKEN: &str = "refresh_token";
    pub const RESPONSE_TYPE: &str = "response_type";
    pub const RESPONSE_TYPE_CODE: &str = "code";
    pub const SCOPE: &str = "scope";
    pub const STATE: &str = "state";
    pub const TOKEN: &str = "token";
}
