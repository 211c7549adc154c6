//! Storage errors shared by the repository ports.

use thiserror::Error;

/// Errors raised by repository adapters.
///
/// Messages carry storage internals for logs. The presentation layer never
/// echoes them back to clients.
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Query failed: {0}")]
    QueryFailed(String),

    #[error("Stored data is corrupt: {0}")]
    Corrupt(String),
}
