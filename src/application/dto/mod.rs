/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod annotate_request;
mod annotate_response;

pub use annotate_request::{AnnotateRequest, DEFAULT_VERSION_COLUMN};
pub use annotate_response::AnnotateResponse;
