use serde::Deserialize;

/// A single security advisory as returned by the openVuln API.
///
/// Only the fields needed for severity counting are kept. `sir` is the
/// Security Impact Rating (`"Critical"`, `"High"`, `"Medium"`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Advisory {
    #[serde(rename = "advisoryId", default)]
    pub advisory_id: Option<String>,
    #[serde(default)]
    pub sir: String,
}

impl Advisory {
    pub fn new(advisory_id: Option<String>, sir: impl Into<String>) -> Self {
        Self {
            advisory_id,
            sir: sir.into(),
        }
    }

    pub fn with_sir(sir: impl Into<String>) -> Self {
        Self::new(None, sir)
    }
}
