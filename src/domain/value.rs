use crate::domain::validation::ValidationError;

#[derive(Clone, PartialEq, Eq, Hash)]
/// Jusibe access token, sent as the Basic-auth password.
///
/// Invariant: not blank. The value is sent exactly as provided.
pub struct AccessToken(String);

impl AccessToken {
    /// Field name used in configuration and error messages (`access_token`).
    pub const FIELD: &'static str = "access_token";

    /// Create a validated [`AccessToken`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the token as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AccessToken(***)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Jusibe public key, sent as the Basic-auth username.
///
/// Invariant: not blank. The value is sent exactly as provided.
pub struct PublicKey(String);

impl PublicKey {
    /// Field name used in configuration and error messages (`public_key`).
    pub const FIELD: &'static str = "public_key";

    /// Create a validated [`PublicKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the key as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Jusibe sender id (`from`).
///
/// Invariant: at most [`SenderId::MAX_CHARS`] characters. The value is sent as provided.
pub struct SenderId(String);

impl SenderId {
    /// Query parameter name used by Jusibe (`from`).
    pub const FIELD: &'static str = "from";

    /// Maximum sender id length accepted by Jusibe.
    pub const MAX_CHARS: usize = 11;

    /// Create a validated [`SenderId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let actual = value.chars().count();
        if actual > Self::MAX_CHARS {
            return Err(ValidationError::SenderIdTooLong {
                max: Self::MAX_CHARS,
                actual,
            });
        }
        Ok(Self(value))
    }

    /// Borrow the sender id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
