//! Authentication service.
//!
//! Registers credentials and checks login attempts against the
//! [`CredentialStore`]. Secrets are stored exactly as supplied.

mod error;

pub use error::AuthError;

use secrecy::SecretString;
use serde::Deserialize;
use tracing::{info, warn};

use rigo_core::format::credential_public_info;
use rigo_core::{Credential, CredentialType, Username};

use crate::store::{CredentialStore, StoreError};

/// A registration request as submitted by a client.
///
/// Implements `Debug` manually to redact the password.
#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub credential_type: CredentialType,
}

impl std::fmt::Debug for Registration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registration")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("credential_type", &self.credential_type)
            .finish()
    }
}

/// Authentication service.
///
/// Handles credential registration and login.
pub struct AuthService<'a> {
    credentials: &'a CredentialStore,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(credentials: &'a CredentialStore) -> Self {
        Self { credentials }
    }

    /// Register a new credential.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidUsername` if the username format is invalid.
    /// Returns `AuthError::EmptySecret` if the password is empty.
    /// Returns `AuthError::UserAlreadyExists` if the username is taken.
    pub fn register(&self, registration: Registration) -> Result<Credential, AuthError> {
        let username = Username::parse(&registration.username)?;

        if registration.password.is_empty() {
            return Err(AuthError::EmptySecret);
        }

        let credential = Credential::new(
            username,
            SecretString::from(registration.password),
            registration.first_name.trim().to_string(),
            registration.last_name.trim().to_string(),
            registration.credential_type,
        );

        self.credentials
            .register(credential.clone())
            .map_err(|e| match e {
                StoreError::Conflict(_) => AuthError::UserAlreadyExists,
                other => AuthError::Store(other),
            })?;

        info!(
            username = %credential.username,
            credential_type = %credential.credential_type,
            "User registered"
        );
        Ok(credential)
    }

    /// Login with username and secret.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidUsername` if the username format is invalid.
    /// Returns `AuthError::InvalidCredentials` if the user does not exist or
    /// the secret does not match exactly.
    pub fn login(&self, username: &str, secret: &str) -> Result<Credential, AuthError> {
        let username = Username::parse(username)?;

        let credential = self
            .credentials
            .find_by_username(&username)
            .map_err(|e| match e {
                StoreError::NotFound(_) => AuthError::InvalidCredentials,
                other => AuthError::Store(other),
            })?;

        if !credential.verify_secret(secret) {
            warn!(username = %username, "Login rejected");
            return Err(AuthError::InvalidCredentials);
        }

        info!(user = %credential_public_info(&credential), "User logged in");
        Ok(credential)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn registration(username: &str, password: &str) -> Registration {
        Registration {
            username: username.to_string(),
            password: password.to_string(),
            first_name: " Ana ".to_string(),
            last_name: "López".to_string(),
            credential_type: CredentialType::Password,
        }
    }

    #[test]
    fn test_register_then_duplicate() {
        let store = CredentialStore::new();
        let auth = AuthService::new(&store);

        let credential = auth.register(registration("ana", "pw")).unwrap();
        assert_eq!(credential.username.as_str(), "ana");
        assert_eq!(credential.first_name, "Ana");

        let again = auth.register(registration("ana", "other"));
        assert!(matches!(again, Err(AuthError::UserAlreadyExists)));
        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn test_register_trimmed_username_collides() {
        let store = CredentialStore::new();
        let auth = AuthService::new(&store);

        auth.register(registration("ana", "pw")).unwrap();
        let again = auth.register(registration("  ana  ", "pw"));
        assert!(matches!(again, Err(AuthError::UserAlreadyExists)));
    }

    #[test]
    fn test_register_rejects_malformed_input() {
        let store = CredentialStore::new();
        let auth = AuthService::new(&store);

        assert!(matches!(
            auth.register(registration("", "pw")),
            Err(AuthError::InvalidUsername(_))
        ));
        assert!(matches!(
            auth.register(registration("ana", "")),
            Err(AuthError::EmptySecret)
        ));
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn test_login_exact_match() {
        let store = CredentialStore::new();
        let auth = AuthService::new(&store);
        auth.register(registration("ana", "Secreto1")).unwrap();

        let credential = auth.login("ana", "Secreto1").unwrap();
        assert_eq!(credential.username.as_str(), "ana");

        assert!(matches!(
            auth.login("ana", "secreto1"),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_login_unknown_user_is_invalid_credentials() {
        let store = CredentialStore::new();
        let auth = AuthService::new(&store);
        assert!(matches!(
            auth.login("ghost", "whatever"),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_registration_debug_redacts_password() {
        let debug_output = format!("{:?}", registration("ana", "topsecret"));
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("topsecret"));
    }

    #[test]
    fn test_registration_json_defaults() {
        let registration: Registration =
            serde_json::from_str(r#"{"username":"ana","password":"1234"}"#).unwrap();
        assert_eq!(registration.credential_type, CredentialType::Password);
        assert!(registration.first_name.is_empty());

        let registration: Registration = serde_json::from_str(
            r#"{"username":"ana","password":"1234","firstName":"Ana","lastName":"L","credentialType":"pin"}"#,
        )
        .unwrap();
        assert_eq!(registration.credential_type, CredentialType::Pin);
        assert_eq!(registration.last_name, "L");
    }
}
