use std::fmt;

use crate::domain::encoding::utf16_units;
use crate::domain::validation::ValidationError;

/// Maximum message body length, in UTF-16 code units.
pub const MAX_BODY_UNITS: usize = 1600;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Twilio account SID.
///
/// Stored verbatim; Twilio rejects malformed values itself.
pub struct AccountSid(String);

impl AccountSid {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the SID as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// Twilio auth token.
///
/// `Debug` is redacted so the token never ends up in logs.
pub struct AuthToken(String);

impl AuthToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the token as provided.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(<redacted>)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Account SID and auth token pair used for Basic authentication.
pub struct Credentials {
    account_sid: AccountSid,
    auth_token: AuthToken,
}

impl Credentials {
    pub fn new(account_sid: impl Into<String>, auth_token: impl Into<String>) -> Self {
        Self {
            account_sid: AccountSid::new(account_sid),
            auth_token: AuthToken::new(auth_token),
        }
    }

    pub fn account_sid(&self) -> &AccountSid {
        &self.account_sid
    }

    pub fn auth_token(&self) -> &AuthToken {
        &self.auth_token
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Message body that passed the UTF-8 and length checks.
///
/// Invariant: valid UTF-8 with at most [`MAX_BODY_UNITS`] UTF-16 code units.
pub struct MessageBody {
    text: String,
    units: usize,
}

impl MessageBody {
    /// Form field name used by Twilio (`Body`).
    pub const FIELD: &'static str = "Body";

    /// Validate raw bytes as a message body.
    pub fn parse(bytes: &[u8]) -> Result<Self, ValidationError> {
        let units = utf16_units(bytes)?.len();
        if units > MAX_BODY_UNITS {
            return Err(ValidationError::BodyTooLong {
                max: MAX_BODY_UNITS,
                actual: units,
            });
        }
        // utf16_units already proved the bytes are UTF-8.
        let text = String::from_utf8_lossy(bytes).into_owned();
        Ok(Self { text, units })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length in UTF-16 code units.
    pub fn utf16_len(&self) -> usize {
        self.units
    }
}
