/// Use cases module containing application business logic orchestration
mod annotate_spreadsheet;
mod verify_credentials;

pub use annotate_spreadsheet::{
    AnnotateSpreadsheetUseCase, PSIRT_CRITICAL_COLUMN, PSIRT_HIGH_COLUMN,
};
pub use verify_credentials::VerifyCredentialsUseCase;
