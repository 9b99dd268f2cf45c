pub mod advisory;
pub mod advisory_result;
pub mod os_type;
pub mod software_version;
pub mod spreadsheet_table;

pub use advisory::Advisory;
pub use advisory_result::{AdvisoryResult, SeverityCounts, ERROR_SENTINEL};
pub use os_type::OsType;
pub use software_version::SoftwareVersion;
pub use spreadsheet_table::SpreadsheetTable;
