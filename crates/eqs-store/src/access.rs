//! Sign-in gate.
//!
//! Two fixed roles and a static account list. This only decides which
//! commands are offered; it is not a security boundary.

use std::fmt;

use serde::{Deserialize, Serialize};

/// What a signed-in user may do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessRole {
    /// Every action, including dataset replacement.
    Full,
    /// Status updates and listings only.
    StatusOnly,
}

impl AccessRole {
    pub const fn label(&self) -> &'static str {
        match self {
            AccessRole::Full => "full",
            AccessRole::StatusOnly => "status_only",
        }
    }

    /// Whether this role may perform `action`.
    pub const fn permits(&self, action: Action) -> bool {
        match self {
            AccessRole::Full => true,
            AccessRole::StatusOnly => !matches!(action, Action::ReplaceDataset),
        }
    }
}

impl fmt::Display for AccessRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Store operation subject to the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    ListRecords,
    UpdateStatus,
    ReplaceDataset,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Action::ListRecords => "list records",
            Action::UpdateStatus => "update status",
            Action::ReplaceDataset => "replace the dataset",
        })
    }
}

/// One configured sign-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub login: String,
    pub password: String,
    pub role: AccessRole,
}

impl Account {
    pub fn new(login: impl Into<String>, password: impl Into<String>, role: AccessRole) -> Self {
        Self {
            login: login.into(),
            password: password.into(),
            role,
        }
    }

    /// The two stock accounts of a fresh install.
    pub fn defaults() -> Vec<Account> {
        vec![
            Account::new("admin", "admin", AccessRole::Full),
            Account::new("operador", "operador", AccessRole::StatusOnly),
        ]
    }
}

/// Resolves a login/password pair to a role.
pub trait CredentialVerifier {
    /// Returns the role, or `None` when the pair is unknown.
    fn verify(&self, login: &str, password: &str) -> Option<AccessRole>;
}

/// Verifier over a fixed account list.
///
/// Logins are trimmed and compared case-insensitively; passwords must match
/// exactly.
#[derive(Debug, Clone, Default)]
pub struct StaticCredentials {
    accounts: Vec<Account>,
}

impl StaticCredentials {
    pub fn new(accounts: Vec<Account>) -> Self {
        Self { accounts }
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

impl CredentialVerifier for StaticCredentials {
    fn verify(&self, login: &str, password: &str) -> Option<AccessRole> {
        let login = login.trim().to_lowercase();
        let role = self
            .accounts
            .iter()
            .find(|account| {
                account.login.trim().to_lowercase() == login && account.password == password
            })
            .map(|account| account.role);

        match role {
            Some(role) => tracing::info!(login = %login, role = %role, "signed in"),
            None => tracing::warn!(login = %login, "sign-in refused"),
        }
        role
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_is_trimmed_and_case_insensitive() {
        let credentials = StaticCredentials::new(Account::defaults());
        assert_eq!(credentials.verify("  ADMIN ", "admin"), Some(AccessRole::Full));
        assert_eq!(
            credentials.verify("Operador", "operador"),
            Some(AccessRole::StatusOnly)
        );
    }

    #[test]
    fn password_is_exact() {
        let credentials = StaticCredentials::new(Account::defaults());
        assert_eq!(credentials.verify("admin", "Admin"), None);
        assert_eq!(credentials.verify("admin", " admin"), None);
        assert_eq!(credentials.verify("ninguem", "admin"), None);
    }

    #[test]
    fn status_only_cannot_replace() {
        assert!(AccessRole::Full.permits(Action::ReplaceDataset));
        assert!(AccessRole::StatusOnly.permits(Action::UpdateStatus));
        assert!(AccessRole::StatusOnly.permits(Action::ListRecords));
        assert!(!AccessRole::StatusOnly.permits(Action::ReplaceDataset));
    }
}
