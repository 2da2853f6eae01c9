//! Username type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Username`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum UsernameError {
    /// The input is empty after trimming.
    #[error("username cannot be empty")]
    Empty,
    /// The input is too long.
    #[error("username must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
    /// The input contains whitespace between other characters.
    #[error("username cannot contain whitespace")]
    ContainsWhitespace,
}

/// A registered account name.
///
/// Usernames are the uniqueness key of the credential store. Surrounding
/// whitespace is trimmed; comparison is otherwise exact (case-sensitive).
///
/// ## Constraints
///
/// - Length: 1-64 characters after trimming
/// - No interior whitespace
///
/// ## Examples
///
/// ```
/// use rigo_core::Username;
///
/// assert_eq!(Username::parse("  ana ").unwrap().as_str(), "ana");
///
/// assert!(Username::parse("").is_err());
/// assert!(Username::parse("ana maria").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct Username(String);

impl Username {
    /// Maximum length of a username, in characters.
    pub const MAX_LENGTH: usize = 64;

    /// Parse a `Username` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the trimmed input is empty, longer than
    /// [`Self::MAX_LENGTH`] characters, or contains whitespace.
    pub fn parse(s: &str) -> Result<Self, UsernameError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(UsernameError::Empty);
        }

        if trimmed.chars().count() > Self::MAX_LENGTH {
            return Err(UsernameError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        if trimmed.chars().any(char::is_whitespace) {
            return Err(UsernameError::ContainsWhitespace);
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Get the username as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
