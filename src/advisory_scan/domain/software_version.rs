use std::fmt;

/// NewType wrapper for a trimmed, non-empty software version string.
///
/// Versions are compared by exact string equality after trimming; no
/// semantic version parsing is attempted since device families use
/// incompatible schemes (`9.16.4`, `17.3.4a`, `15.2(7)E3`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SoftwareVersion(String);

impl SoftwareVersion {
    /// Trims the raw cell value, returning `None` for blank cells.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SoftwareVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
