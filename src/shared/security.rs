use crate::shared::error::PsirtError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum spreadsheet size accepted for reading (50 MB)
pub const MAX_SPREADSHEET_SIZE: u64 = 50 * 1024 * 1024;

/// Validates a spreadsheet path before it is read.
///
/// # Security
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
///
/// # Errors
/// Returns an error if:
/// - The path doesn't exist
/// - The path is a symbolic link
/// - The path is not a regular file
/// - The file is larger than [`MAX_SPREADSHEET_SIZE`]
pub fn validate_input_file(path: &Path) -> Result<()> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(PsirtError::SpreadsheetNotFound {
                path: path.to_path_buf(),
            }
            .into());
        }
        Err(e) => {
            return Err(PsirtError::FileReadError {
                path: path.to_path_buf(),
                details: format!("Failed to read metadata: {}", e),
            }
            .into());
        }
    };

    if metadata.is_symlink() {
        return Err(symlink_violation(path, "read"));
    }

    if !metadata.is_file() {
        return Err(PsirtError::FileReadError {
            path: path.to_path_buf(),
            details: "Not a regular file".to_string(),
        }
        .into());
    }

    validate_file_size(metadata.len(), path, MAX_SPREADSHEET_SIZE)
}

/// Validates that a spreadsheet can be (over)written at `path`.
///
/// An existing file must not be a symbolic link, and the parent directory
/// must already exist.
pub fn validate_output_file(path: &Path) -> Result<()> {
    if let Ok(metadata) = fs::symlink_metadata(path) {
        if metadata.is_symlink() {
            return Err(symlink_violation(path, "write"));
        }
    }

    if let Some(parent) = path.parent() {
        if parent != Path::new("") && !parent.is_dir() {
            return Err(PsirtError::FileWriteError {
                path: path.to_path_buf(),
                details: format!("Parent directory does not exist: {}", parent.display()),
            }
            .into());
        }
    }

    Ok(())
}

/// Validates file size is within acceptable limits
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        return Err(PsirtError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "File is too large ({} bytes). Maximum allowed size is {} bytes.",
                file_size, max_size
            ),
            hint: "Split the inventory into smaller spreadsheets".to_string(),
        }
        .into());
    }
    Ok(())
}

fn symlink_violation(path: &Path, operation: &str) -> anyhow::Error {
    PsirtError::SecurityError {
        path: path.to_path_buf(),
        reason: format!(
            "Path is a symbolic link. For security reasons, {} operations on symbolic links are not allowed.",
            operation
        ),
        hint: "Point the tool at the spreadsheet file itself".to_string(),
    }
    .into()
}
