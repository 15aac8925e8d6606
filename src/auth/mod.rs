//! Authentication core: the seeded user directory plus credential
//! verification and the token lifecycle. Transport concerns live in
//! [`crate::api`]; nothing in here touches HTTP.

pub mod directory;
pub mod service;

pub use directory::{Account, Role, UserDirectory};
pub use service::{AuthResult, AuthService, Credentials, TOKEN_PREFIX};
