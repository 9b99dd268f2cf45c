use std::fmt;

/// Cell value written when no count could be determined for a version
pub const ERROR_SENTINEL: &str = "Error";

/// High / Critical advisory counts for one device family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeverityCounts {
    pub high: usize,
    pub critical: usize,
}

impl SeverityCounts {
    pub fn new(high: usize, critical: usize) -> Self {
        Self { high, critical }
    }

    /// True when at least one High or Critical advisory was counted
    pub fn has_matches(&self) -> bool {
        self.high > 0 || self.critical > 0
    }
}

/// Outcome of an advisory lookup for one software version.
///
/// `Error` covers blank versions, exhaustion of every device family and,
/// when failures are tolerated, a failed lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvisoryResult {
    Counts(SeverityCounts),
    Error,
}

impl AdvisoryResult {
    pub fn counts(high: usize, critical: usize) -> Self {
        AdvisoryResult::Counts(SeverityCounts::new(high, critical))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, AdvisoryResult::Error)
    }

    /// Value for the `psirt_high` column
    pub fn high_cell(&self) -> String {
        match self {
            AdvisoryResult::Counts(c) => c.high.to_string(),
            AdvisoryResult::Error => ERROR_SENTINEL.to_string(),
        }
    }

    /// Value for the `psirt_critical` column
    pub fn critical_cell(&self) -> String {
        match self {
            AdvisoryResult::Counts(c) => c.critical.to_string(),
            AdvisoryResult::Error => ERROR_SENTINEL.to_string(),
        }
    }
}

impl fmt::Display for AdvisoryResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdvisoryResult::Counts(c) => write!(f, "high={} critical={}", c.high, c.critical),
            AdvisoryResult::Error => write!(f, "{}", ERROR_SENTINEL),
        }
    }
}
