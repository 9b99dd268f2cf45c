use crate::shared::Result;
use std::fmt;

/// Opaque OAuth2 bearer token
///
/// `Debug` never prints the token itself.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn secret(&self) -> &str {
        &self.0
    }

    /// First `len` characters followed by an ellipsis, for console output
    pub fn preview(&self, len: usize) -> String {
        let head: String = self.0.chars().take(len).collect();
        format!("{}...", head)
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(<redacted>)")
    }
}

/// AccessTokenProvider port for obtaining a bearer token
///
/// Implementations exchange client credentials for a token on every call;
/// no token is cached between lookups.
pub trait AccessTokenProvider {
    /// Requests a fresh access token
    ///
    /// # Returns
    /// `Some(token)` when the identity provider issued one, `None` when the
    /// success response carried no `access_token` field
    ///
    /// # Errors
    /// Returns an error if:
    /// - The identity provider answers with a non-success status
    /// - The request fails at the transport level
    /// - The response body is not valid JSON
    fn fetch_token(&self) -> Result<Option<AccessToken>>;
}

impl<T: AccessTokenProvider + ?Sized> AccessTokenProvider for &T {
    fn fetch_token(&self) -> Result<Option<AccessToken>> {
        (**self).fetch_token()
    }
}
