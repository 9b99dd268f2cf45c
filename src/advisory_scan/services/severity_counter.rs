use crate::advisory_scan::domain::{Advisory, SeverityCounts};

/// SeverityCounter service for tallying High and Critical advisories
///
/// Matching is a case-sensitive substring test on the `sir` field, so a
/// rating like `"High"` or `"Critical"` counts while `"Medium"` does not.
pub struct SeverityCounter;

impl SeverityCounter {
    const HIGH: &'static str = "High";
    const CRITICAL: &'static str = "Critical";

    pub fn count(advisories: &[Advisory]) -> SeverityCounts {
        let high = advisories
            .iter()
            .filter(|a| a.sir.contains(Self::HIGH))
            .count();
        let critical = advisories
            .iter()
            .filter(|a| a.sir.contains(Self::CRITICAL))
            .count();
        SeverityCounts::new(high, critical)
    }
}
