use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow schedulers and CI jobs to distinguish between a
/// successful annotation run and the different failure classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the spreadsheet was annotated (or validated in dry-run mode)
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (credentials, API error, network error, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for advisory annotation.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// keeping the user-facing hint next to each failure class.
#[derive(Debug, Error)]
pub enum PsirtError {
    #[error("Missing API credential: {variable} is not set\n\n💡 Hint: Export {variable} or add it to a .env file in the working directory")]
    MissingCredentials { variable: String },

    #[error("Token request failed with status code {status}\nResponse: {body}\n\n💡 Hint: Verify that the openVuln client id and secret are valid")]
    TokenRequestFailed { status: u16, body: String },

    #[error("Token response did not contain an access_token field\n\n💡 Hint: The identity provider accepted the request but issued no bearer token; no advisory request was sent")]
    MissingAccessToken,

    #[error("Spreadsheet not found: {path}\n\n💡 Hint: Specify the spreadsheet with the --path option or the `spreadsheet` config key")]
    SpreadsheetNotFound { path: PathBuf },

    #[error("Spreadsheet {path} has no '{column}' column\n\n💡 Hint: The header row must contain a '{column}' column")]
    MissingColumn { path: PathBuf, column: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },

    /// Validation error for configuration and argument values
    #[error("Validation error: {message}")]
    Validation { message: String },
}
