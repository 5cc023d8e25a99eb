//! User identity types.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Surrogate user identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
pub struct UserId(pub i32);

impl UserId {
    /// Access the raw database id.
    pub fn as_i32(self) -> i32 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validation errors returned by [`ApiKey::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiKeyValidationError {
    Empty,
}

impl fmt::Display for ApiKeyValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "api key must not be empty"),
        }
    }
}

impl std::error::Error for ApiKeyValidationError {}

/// Opaque static bearer credential identifying a user.
///
/// There is no expiry or rotation; the key is looked up verbatim against the
/// user table on every request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ApiKey(String);

impl ApiKey {
    /// Validate and construct an [`ApiKey`]; the raw header value must be
    /// non-empty once trimmed.
    pub fn new(raw: impl Into<String>) -> Result<Self, ApiKeyValidationError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(ApiKeyValidationError::Empty);
        }
        Ok(Self(raw))
    }

    /// Borrow the key as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// A registered user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Surrogate id.
    pub id: UserId,
    /// Display name shown in feeds and profiles.
    pub name: String,
}

impl User {
    /// Construct a user record.
    pub fn new(id: UserId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn blank_api_keys_are_rejected(#[case] raw: &str) {
        assert_eq!(ApiKey::new(raw), Err(ApiKeyValidationError::Empty));
    }

    #[rstest]
    fn api_key_round_trips_raw_value() {
        let key = ApiKey::new("test1").expect("valid key");
        assert_eq!(key.as_str(), "test1");
        assert_eq!(key.to_string(), "test1");
    }
}
