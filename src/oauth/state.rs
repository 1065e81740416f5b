use rand::distr::Alphanumeric;
use rand::Rng;

pub const STATE_LENGTH: usize = 16;

/// Generate an opaque anti-CSRF `state` value for the authorization request.
/// Characters are drawn uniformly from `[A-Za-z0-9]`.
pub fn generate_state() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(STATE_LENGTH)
        .map(char::from)
        .collect()
}
