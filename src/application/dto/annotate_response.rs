/// AnnotateResponse - Summary of one annotation run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotateResponse {
    /// Number of data rows in the spreadsheet
    pub rows: usize,
    /// Number of distinct non-blank versions
    pub distinct_versions: usize,
    /// Rows whose version cell was blank
    pub blank_versions: usize,
    /// Distinct versions handed to the advisory lookup
    pub lookups: usize,
    /// Distinct versions whose lookup failed (only with continue-on-error)
    pub failed_lookups: usize,
    /// Rows annotated with the "Error" sentinel
    pub error_rows: usize,
    /// Whether the spreadsheet was written back
    pub written: bool,
}
