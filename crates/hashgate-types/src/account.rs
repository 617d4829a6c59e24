use chrono::{DateTime, Utc};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use std::fmt;
use std::str::FromStr;

/// Unique identifier for an account, wrapping a UUID v7 (time-sortable).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountId(pub Uuid);

impl AccountId {
    /// Create a new AccountId using UUID v7 (time-sortable, guaranteed ordering).
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Create an AccountId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for AccountId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for AccountId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// A user account with credential attributes that are hashed before
/// persistence.
///
/// The `password` and `security_answer` fields hold plaintext only
/// transiently, between the moment a caller sets them and the pre-persist
/// hashing hook replacing them with their hashed (PHC string) forms. Every
/// account returned by the service layer carries hashed values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: AccountId,
    /// Unique login email (lowercased on creation).
    pub email: String,
    /// Freeform display name.
    pub display_name: String,
    /// Credential; PHC-formatted hash once persisted.
    pub password: String,
    /// Optional recovery credential; PHC-formatted hash once persisted.
    pub security_answer: Option<String>,
    /// Current lifecycle state.
    pub status: AccountStatus,
    /// Hashing policy flag: when false, credential attributes are persisted
    /// as given and the hashing hook does not run for this account.
    pub hashing: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Account lifecycle states.
///
/// - Active: account can authenticate
/// - Suspended: visible but cannot authenticate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    Active,
    Suspended,
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountStatus::Active => write!(f, "active"),
            AccountStatus::Suspended => write!(f, "suspended"),
        }
    }
}

impl FromStr for AccountStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(AccountStatus::Active),
            "suspended" => Ok(AccountStatus::Suspended),
            other => Err(format!("invalid account status: '{other}'")),
        }
    }
}

impl Default for AccountStatus {
    fn default() -> Self {
        AccountStatus::Active
    }
}

/// Request to create a new account.
///
/// Plaintext credentials arrive wrapped in [`SecretString`] so they are
/// redacted from Debug output and never logged. The request is consumed by
/// value; the plaintext is exposed exactly once, when the account struct is
/// built for the pre-persist hashing hook.
#[derive(Debug, Deserialize)]
pub struct CreateAccountRequest {
    pub email: String,
    pub display_name: String,
    pub password: SecretString,
    #[serde(default)]
    pub security_answer: Option<SecretString>,
    /// Overrides the configured default hashing policy when set.
    #[serde(default)]
    pub hashing: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_id_roundtrips_through_string() {
        let id = AccountId::new();
        let parsed: AccountId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn account_ids_are_unique() {
        let a = AccountId::new();
        let b = AccountId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn status_parses_case_insensitively() {
        assert_eq!(
            "Active".parse::<AccountStatus>().unwrap(),
            AccountStatus::Active
        );
        assert_eq!(
            "SUSPENDED".parse::<AccountStatus>().unwrap(),
            AccountStatus::Suspended
        );
        assert!("deleted".parse::<AccountStatus>().is_err());
    }

    #[test]
    fn status_display_matches_serde_rename() {
        let json = serde_json::to_string(&AccountStatus::Suspended).unwrap();
        assert_eq!(json, format!("\"{}\"", AccountStatus::Suspended));
    }

    #[test]
    fn create_request_debug_redacts_password() {
        let request = CreateAccountRequest {
            email: "luna@example.com".to_string(),
            display_name: "Luna".to_string(),
            password: SecretString::from("hunter2".to_string()),
            security_answer: None,
            hashing: None,
        };
        let debug = format!("{request:?}");
        assert!(!debug.contains("hunter2"), "Debug leaks plaintext: {debug}");
    }
}
