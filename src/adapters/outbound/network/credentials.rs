use crate::shared::error::PsirtError;
use crate::shared::Result;
use std::fmt;

/// Environment variable holding the openVuln client id
pub const CLIENT_ID_VAR: &str = "OPENVULN_CLIENT_ID";
/// Environment variable holding the openVuln client secret
pub const CLIENT_SECRET_VAR: &str = "OPENVULN_CLIENT_SECRET";

/// OAuth2 client credentials for the openVuln API
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    client_id: String,
    client_secret: String,
}

impl Credentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    /// Loads credentials from `OPENVULN_CLIENT_ID` / `OPENVULN_CLIENT_SECRET`
    ///
    /// # Errors
    /// Returns [`PsirtError::MissingCredentials`] when either variable is
    /// unset or blank
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads credentials through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |variable: &str| -> Result<String> {
            lookup(variable)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or_else(|| {
                    PsirtError::MissingCredentials {
                        variable: variable.to_string(),
                    }
                    .into()
                })
        };

        Ok(Self::new(read(CLIENT_ID_VAR)?, read(CLIENT_SECRET_VAR)?))
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}
