//! Credential store keyed by username.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use tracing::{info, warn};

use rigo_core::{Credential, Username};

use super::StoreError;

/// Registered credentials, at most one per username.
///
/// Records only move from absent to present; there is no update or delete.
#[derive(Clone, Default)]
pub struct CredentialStore {
    inner: Arc<RwLock<HashMap<Username, Credential>>>,
}

impl CredentialStore {
    /// Create an empty credential store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a credential unless its username is already taken.
    ///
    /// The duplicate check and the insert happen under one write guard, so
    /// concurrent registrations of the same username admit exactly one.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Conflict` if the username exists; the stored
    /// record is left untouched.
    pub fn register(&self, credential: Credential) -> Result<(), StoreError> {
        let mut credentials = self.inner.write().map_err(|_| StoreError::LockPoisoned)?;

        if credentials.contains_key(&credential.username) {
            drop(credentials);
            warn!(username = %credential.username, "Duplicate registration rejected");
            return Err(StoreError::Conflict(format!(
                "username {} already registered",
                credential.username
            )));
        }

        let username = credential.username.clone();
        credentials.insert(username.clone(), credential);
        drop(credentials);

        info!(username = %username, "Credential registered");
        Ok(())
    }

    /// Look up a credential by username.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no record has this username.
    pub fn find_by_username(&self, username: &Username) -> Result<Credential, StoreError> {
        self.inner
            .read()
            .map_err(|_| StoreError::LockPoisoned)?
            .get(username)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("user {username}")))
    }

    /// Number of registered credentials.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::LockPoisoned` if a writer panicked.
    pub fn count(&self) -> Result<usize, StoreError> {
        Ok(self
            .inner
            .read()
            .map_err(|_| StoreError::LockPoisoned)?
            .len())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Barrier;
    use std::thread;

    use rigo_core::CredentialType;
    use secrecy::SecretString;

    use super::*;

    fn credential(username: &str, secret: &str) -> Credential {
        Credential::new(
            Username::parse(username).unwrap(),
            SecretString::from(secret),
            "Ana".to_string(),
            "López".to_string(),
            CredentialType::Password,
        )
    }

    #[test]
    fn test_register_then_duplicate_conflicts() {
        let store = CredentialStore::new();

        store.register(credential("ana", "first")).unwrap();
        let second = store.register(credential("ana", "second"));

        assert!(matches!(second, Err(StoreError::Conflict(_))));
        assert_eq!(store.count().unwrap(), 1);

        // The original record survives
        let stored = store
            .find_by_username(&Username::parse("ana").unwrap())
            .unwrap();
        assert!(stored.verify_secret("first"));
    }

    #[test]
    fn test_find_missing_is_not_found() {
        let store = CredentialStore::new();
        let result = store.find_by_username(&Username::parse("nobody").unwrap());
        assert!(matches!(result, Err(StoreError::NotFound(_))));
    }

    #[test]
    fn test_usernames_are_case_sensitive() {
        let store = CredentialStore::new();
        store.register(credential("ana", "a")).unwrap();
        store.register(credential("Ana", "b")).unwrap();
        assert_eq!(store.count().unwrap(), 2);
    }

    #[test]
    fn test_concurrent_registrations_admit_exactly_one() {
        const CONTENDERS: usize = 16;

        let store = CredentialStore::new();
        let barrier = Barrier::new(CONTENDERS);

        let outcomes: Vec<Result<(), StoreError>> = thread::scope(|scope| {
            let handles: Vec<_> = (0..CONTENDERS)
                .map(|n| {
                    let store = store.clone();
                    let barrier = &barrier;
                    scope.spawn(move || {
                        barrier.wait();
                        store.register(credential("ana", &format!("secret-{n}")))
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        let successes = outcomes.iter().filter(|r| r.is_ok()).count();
        let conflicts = outcomes
            .iter()
            .filter(|r| matches!(r, Err(StoreError::Conflict(_))))
            .count();

        assert_eq!(successes, 1);
        assert_eq!(conflicts, CONTENDERS - 1);
        assert_eq!(store.count().unwrap(), 1);
    }
}
