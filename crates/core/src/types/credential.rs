//! Registration credential types.

use core::fmt;

use chrono::{DateTime, Utc};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use super::username::Username;

/// Kind of secret a user registered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CredentialType {
    #[default]
    Password,
    Pin,
}

impl CredentialType {
    /// Wire name of the credential type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Password => "password",
            Self::Pin => "pin",
        }
    }
}

impl fmt::Display for CredentialType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A registered user's credential record.
///
/// The secret is kept exactly as supplied at registration and is only
/// reachable through [`Credential::verify_secret`]. `Debug` output redacts it.
#[derive(Debug, Clone)]
pub struct Credential {
    pub username: Username,
    secret: SecretString,
    pub first_name: String,
    pub last_name: String,
    pub credential_type: CredentialType,
    /// When the record was created.
    pub registered_at: DateTime<Utc>,
}

impl Credential {
    /// Create a credential record stamped with the current time.
    #[must_use]
    pub fn new(
        username: Username,
        secret: SecretString,
        first_name: String,
        last_name: String,
        credential_type: CredentialType,
    ) -> Self {
        Self {
            username,
            secret,
            first_name,
            last_name,
            credential_type,
            registered_at: Utc::now(),
        }
    }

    /// Whether `candidate` is exactly the stored secret.
    #[must_use]
    pub fn verify_secret(&self, candidate: &str) -> bool {
        self.secret.expose_secret() == candidate
    }

    /// First and last name joined by a space, skipping empty parts.
    #[must_use]
    pub fn full_name(&self) -> String {
        [self.first_name.trim(), self.last_name.trim()]
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
    }
}
