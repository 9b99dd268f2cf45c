/// Column holding the software version of each row
pub const DEFAULT_VERSION_COLUMN: &str = "software_version";

/// AnnotateRequest - Internal request DTO for the spreadsheet annotation use case
#[derive(Debug, Clone)]
pub struct AnnotateRequest {
    /// Name of the column holding software versions
    pub version_column: String,
    /// Record "Error" for a version whose lookup fails instead of aborting the run
    pub continue_on_error: bool,
    /// Read and validate the spreadsheet only; no lookups, no write
    pub dry_run: bool,
}

impl AnnotateRequest {
    pub fn new(version_column: String, continue_on_error: bool, dry_run: bool) -> Self {
        Self {
            version_column,
            continue_on_error,
            dry_run,
        }
    }
}

impl Default for AnnotateRequest {
    fn default() -> Self {
        Self::new(DEFAULT_VERSION_COLUMN.to_string(), false, false)
    }
}
