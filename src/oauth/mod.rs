pub mod callback;
pub mod endpoints;
pub mod flow;
pub mod state;
pub mod url;

pub use callback::{listen_for_callback, parse_redirect, LoopbackRedirect};
pub use endpoints::{ACCESS_TOKEN_URL, AUTHORIZATION_URL, INTROSPECT_TOKEN_URL, PROFILE_URL};
pub use flow::{loopback_redirect, run_login_flow, LoginOptions};
pub use state::generate_state;
pub use url::{build_authorization_url, encode_component};
