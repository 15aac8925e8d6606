//! Fixed, in-memory user directory seeded at startup.
//!
//! The directory is immutable after construction: lookups take `&self` and no
//! method mutates the account set, so it can be shared across request handlers
//! without locking.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use utoipa::ToSchema;

/// Display/authorization hint attached to an account. Authentication
/// decisions never depend on it.
#[derive(ToSchema, Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Admin,
    Manager,
    User,
}

impl Role {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Manager => "MANAGER",
            Role::User => "USER",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One directory entry. The password is a plaintext mock credential, kept
/// behind `SecretString` so it never shows up in Debug output or serialized
/// responses.
#[derive(Debug, Clone)]
pub struct Account {
    pub username: String,
    password: SecretString,
    pub role: Role,
    pub email: Option<String>,
}

impl Account {
    fn new(username: &str, password: &str, role: Role, email: &str) -> Self {
        Self {
            username: username.to_string(),
            password: SecretString::from(password.to_string()),
            role,
            email: Some(email.to_string()),
        }
    }

    /// Exact string equality, no hashing and no timing guarantees. This is a
    /// mock directory, not a credential store.
    #[must_use]
    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password.expose_secret() == candidate
    }
}

/// Username-keyed account set, seeded once and read-only afterwards.
#[derive(Debug, Clone)]
pub struct UserDirectory {
    accounts: HashMap<String, Account>,
}

impl UserDirectory {
    /// Build the directory with the fixed demo seed set.
    #[must_use]
    pub fn with_default_accounts() -> Self {
        let seed = [
            Account::new("admin", "admin123", Role::Admin, "admin@example.com"),
            Account::new("user", "password", Role::User, "user@example.com"),
            Account::new("demo", "demo", Role::User, "demo@example.com"),
            Account::new("test", "test123", Role::User, "test@example.com"),
            Account::new(
                "manager",
                "manager123",
                Role::Manager,
                "manager@example.com",
            ),
        ];

        let accounts = seed
            .into_iter()
            .map(|account| (account.username.clone(), account))
            .collect();

        Self { accounts }
    }

    /// Exact-match lookup, keyed by the literal username supplied by the
    /// caller. Case normalization is the caller's business.
    #[must_use]
    pub fn lookup(&self, username: &str) -> Option<&Account> {
        self.accounts.get(username)
    }

    /// Deep, independent copy of the account set. Callers may mutate the
    /// result freely without affecting the directory or other snapshots.
    #[must_use]
    pub fn snapshot(&self) -> HashMap<String, Account> {
        self.accounts.clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

impl Default for UserDirectory {
    fn default() -> Self {
        Self::with_default_accounts()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_contains_all_default_accounts() {
        let directory = UserDirectory::with_default_accounts();
        assert_eq!(directory.len(), 5);

        for (username, password, role) in [
            ("admin", "admin123", Role::Admin),
            ("user", "password", Role::User),
            ("demo", "demo", Role::User),
            ("test", "test123", Role::User),
            ("manager", "manager123", Role::Manager),
        ] {
            let account = directory.lookup(username);
            assert!(account.is_some(), "missing seed account: {username}");
            if let Some(account) = account {
                assert_eq!(account.username, username);
                assert_eq!(account.role, role);
                assert!(account.password_matches(password));
                assert_eq!(
                    account.email.as_deref(),
                    Some(format!("{username}@example.com").as_str())
                );
            }
        }
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let directory = UserDirectory::with_default_accounts();
        assert!(directory.lookup("demo").is_some());
        assert!(directory.lookup("DEMO").is_none());
        assert!(directory.lookup("Demo").is_none());
    }

    #[test]
    fn lookup_misses_unknown_username() {
        let directory = UserDirectory::with_default_accounts();
        assert!(directory.lookup("nobody").is_none());
        assert!(directory.lookup("").is_none());
    }

    #[test]
    fn password_matches_is_exact() {
        let directory = UserDirectory::with_default_accounts();
        let Some(account) = directory.lookup("demo") else {
            panic!("demo account missing");
        };
        assert!(account.password_matches("demo"));
        assert!(!account.password_matches("DEMO"));
        assert!(!account.password_matches("demo "));
        assert!(!account.password_matches(""));
    }

    #[test]
    fn password_never_leaks_through_debug() {
        let directory = UserDirectory::with_default_accounts();
        let printed = format!("{directory:?}");
        for password in ["admin123", "password", "test123", "manager123"] {
            assert!(!printed.contains(password), "Debug output leaks {password}");
        }
    }

    #[test]
    fn snapshots_are_independent_copies() {
        let directory = UserDirectory::with_default_accounts();

        let mut first = directory.snapshot();
        let second = directory.snapshot();
        assert_eq!(first.len(), second.len());

        first.remove("demo");
        first.insert(
            "intruder".to_string(),
            Account::new("intruder", "pw", Role::User, "intruder@example.com"),
        );

        // Mutating one snapshot affects neither the other nor the directory.
        assert!(second.contains_key("demo"));
        assert!(!second.contains_key("intruder"));
        assert!(directory.lookup("demo").is_some());
        assert!(directory.lookup("intruder").is_none());
        assert_eq!(directory.snapshot().len(), 5);
    }

    #[test]
    fn role_labels_round_trip() {
        assert_eq!(Role::Admin.as_str(), "ADMIN");
        assert_eq!(Role::Manager.to_string(), "MANAGER");

        let role: Role = serde_json::from_str(r#""USER""#).expect("role should deserialize");
        assert_eq!(role, Role::User);
        let json = serde_json::to_string(&Role::Admin).expect("role should serialize");
        assert_eq!(json, r#""ADMIN""#);
    }
}
