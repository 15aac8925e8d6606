//! Credential verification and the token lifecycle.
//!
//! Tokens are opaque strings, never stored server-side: validity is decided
//! purely by shape (prefix + minimum length). A token carries the username as
//! its trailing `_`-separated segment so the profile endpoint can recover the
//! identity without a session table. There is no expiry and no revocation;
//! that laxness is the contract of this mock service, not an oversight.

use crate::auth::directory::{Account, Role, UserDirectory};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;
use uuid::Uuid;

/// Every issued token starts with this literal.
pub const TOKEN_PREFIX: &str = "token_";

/// Structural minimum: a token must be strictly longer than this.
const TOKEN_MIN_TOTAL_LEN: usize = 10;

/// Transient (username, password) pair supplied per request. Fields are
/// optional so an absent field in the wire payload maps to `None` instead of
/// a decode failure.
#[derive(ToSchema, Serialize, Deserialize, Debug, Default)]
pub struct Credentials {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Outcome of an authentication attempt. `token` and `role` are either both
/// present (success) or both absent.
#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct AuthResult {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

impl AuthResult {
    #[must_use]
    pub fn failure(message: &str) -> Self {
        Self {
            success: false,
            message: message.to_string(),
            token: None,
            role: None,
        }
    }

    #[must_use]
    fn granted(token: String, role: Role) -> Self {
        Self {
            success: true,
            message: "Login successful".to_string(),
            token: Some(token),
            role: Some(role),
        }
    }
}

/// Stateless authentication core over the shared, read-only directory.
#[derive(Debug)]
pub struct AuthService {
    directory: UserDirectory,
}

impl AuthService {
    #[must_use]
    pub fn new(directory: UserDirectory) -> Self {
        Self { directory }
    }

    #[must_use]
    pub fn directory(&self) -> &UserDirectory {
        &self.directory
    }

    /// Turn credentials into an [`AuthResult`]. Rules apply in strict order,
    /// first match wins:
    ///
    /// 1. absent request or absent field
    /// 2. empty/whitespace-only field after trimming
    /// 3. unknown username or password mismatch (same message for both)
    /// 4. success: fresh token + account role
    #[must_use]
    pub fn authenticate(&self, request: Option<&Credentials>) -> AuthResult {
        let Some(request) = request else {
            return AuthResult::failure("Username and password are required");
        };

        let (Some(username), Some(password)) = (&request.username, &request.password) else {
            return AuthResult::failure("Username and password are required");
        };

        let username = username.trim();
        let password = password.trim();

        if username.is_empty() || password.is_empty() {
            return AuthResult::failure("Username and password cannot be empty");
        }

        match self.directory.lookup(username) {
            Some(account) if account.password_matches(password) => {
                debug!("Login successful for {username}");

                AuthResult::granted(self.issue_token(username), account.role)
            }

            // Same message whether the username is unknown or the password is
            // wrong: do not leak which field missed.
            _ => AuthResult::failure("Invalid username or password"),
        }
    }

    /// Structural token check: prefix plus minimum length, nothing else. It
    /// does not verify the token was issued by this process and does not
    /// bind it to a user.
    #[must_use]
    pub fn validate_token(&self, token: Option<&str>) -> bool {
        token.is_some_and(|token| {
            token.starts_with(TOKEN_PREFIX) && token.len() > TOKEN_MIN_TOTAL_LEN
        })
    }

    /// Recover the username encoded as the trailing `_`-separated segment of
    /// a structurally valid token.
    #[must_use]
    pub fn username_from_token<'t>(&self, token: &'t str) -> Option<&'t str> {
        if !self.validate_token(Some(token)) {
            return None;
        }

        token.rsplit('_').next().filter(|segment| !segment.is_empty())
    }

    /// Directory lookup for profile display.
    #[must_use]
    pub fn user_details(&self, username: &str) -> Option<&Account> {
        self.directory.lookup(username)
    }

    // UUIDv4 gives 122 random bits per token, rendered as 32 lowercase hex
    // characters, so collisions within a process lifetime are negligible.
    fn issue_token(&self, username: &str) -> String {
        format!("{TOKEN_PREFIX}{}_{username}", Uuid::new_v4().simple())
    }
}
