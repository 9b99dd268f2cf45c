/// Domain layer for advisory scanning
///
/// Pure business logic: device families, software versions, severity
/// counting and the request rate limiter. Nothing here performs I/O
/// except through the `Clock` port.
pub mod domain;
pub mod services;
