pub mod health;
pub use self::health::health;

pub mod login;
pub use self::login::login;

pub mod logout;
pub use self::logout::logout;

pub mod profile;
pub use self::profile::profile;

// common functions for the handlers
use axum::http::{header::AUTHORIZATION, HeaderMap};

/// Extract the bearer token from the `Authorization` header. Returns `None`
/// when the header is missing, not valid ASCII, or uses another scheme.
pub(crate) fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}
