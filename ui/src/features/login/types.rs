// Core types for the login form - no dioxus imports needed here
use std::fmt;

use serde::{Deserialize, Serialize};

/// Normalized credential handed to the authenticator.
///
/// Field names follow the Lemmy login form so the value can be posted as-is.
#[derive(Serialize, Deserialize, Clone, PartialEq)]
pub struct Credential {
    pub username_or_email: String,
    pub password: String,
}

impl Credential {
    /// Build a credential from raw field values: the identifier is trimmed and
    /// the password keeps only its first `max_password_chars` characters.
    pub fn from_fields(identifier: &str, secret: &str, max_password_chars: usize) -> Self {
        Self {
            username_or_email: identifier.trim().to_string(),
            password: secret.chars().take(max_password_chars).collect(),
        }
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("username_or_email", &self.username_or_email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// What a successful `submit` hands to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct LoginSubmission {
    pub credential: Credential,
    pub instance: String,
}

/// Values pushed by an external autofill provider. Either half may be absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AutofillCredential {
    pub identifier: Option<String>,
    pub secret: Option<String>,
}

/// A signed-in account known to the hosting application.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Account {
    pub id: i32,
    pub name: String,
    pub instance: String,
    pub current: bool,
}

/// Returns the account marked current, if any.
pub fn current_account(accounts: &[Account]) -> Option<&Account> {
    accounts.iter().find(|account| account.current)
}

// Action enum for state mutations
#[derive(Clone, Debug, PartialEq)]
pub enum LoginAction {
    SetInstance(String),
    SetIdentifier(String),
    SetSecret(String),
    ToggleSuggestions,
    DismissSuggestions,
    ChooseSuggestion(String),
    ToggleSecretVisibility,
    Autofill(AutofillCredential),
    Resolve,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_trims_identifier_and_caps_password() {
        let credential = Credential::from_fields("  bob  ", &"x".repeat(65), 60);
        assert_eq!(credential.username_or_email, "bob");
        assert_eq!(credential.password, "x".repeat(60));
    }

    #[test]
    fn test_credential_counts_characters_not_bytes() {
        let secret = "é".repeat(61);
        let credential = Credential::from_fields("alice", &secret, 60);
        assert_eq!(credential.password.chars().count(), 60);
        assert!(secret.starts_with(&credential.password));
    }

    #[test]
    fn test_credential_wire_shape() {
        let credential = Credential::from_fields("alice", "hunter2", 60);
        let value = serde_json::to_value(&credential).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "username_or_email": "alice", "password": "hunter2" })
        );
    }

    #[test]
    fn test_debug_output_redacts_password() {
        let submission = LoginSubmission {
            credential: Credential::from_fields("alice", "hunter2", 60),
            instance: "lemmy.ml".to_string(),
        };
        let printed = format!("{:?}", submission);
        assert!(!printed.contains("hunter2"));
        assert!(printed.contains("<redacted>"));
        assert!(printed.contains("alice"));
    }

    #[test]
    fn test_current_account() {
        let accounts = vec![
            Account { id: 1, name: "alice".to_string(), instance: "lemmy.ml".to_string(), current: false },
            Account { id: 2, name: "bob".to_string(), instance: "beehaw.org".to_string(), current: true },
        ];
        assert_eq!(current_account(&accounts).map(|a| a.id), Some(2));
        assert!(current_account(&accounts[..1]).is_none());
        assert!(current_account(&[]).is_none());
    }
}
