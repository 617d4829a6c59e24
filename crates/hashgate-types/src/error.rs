use thiserror::Error;

/// Errors from credential hashing.
///
/// IMPORTANT: These errors never include plaintext or hash material in their
/// Display/Debug output to prevent accidental logging of secrets.
#[derive(Debug, Error)]
pub enum HashError {
    #[error("hashing failed")]
    HashingFailed,

    #[error("malformed hash encoding")]
    MalformedHash,

    #[error("invalid hashing parameters: {0}")]
    InvalidParams(String),
}

/// Errors related to account operations.
#[derive(Debug, Error)]
pub enum AccountError {
    #[error("account not found")]
    NotFound,

    #[error("email '{0}' already registered")]
    EmailConflict(String),

    #[error("invalid email: {0}")]
    InvalidEmail(String),

    #[error("invalid display name: {0}")]
    InvalidDisplayName(String),

    #[error("credential hashing failed: {0}")]
    Hashing(#[from] HashError),

    #[error("storage error: {0}")]
    StorageError(String),
}

/// Errors from repository operations (used by trait definitions in hashgate-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database connection error")]
    Connection,

    #[error("query error: {0}")]
    Query(String),

    #[error("entity not found")]
    NotFound,

    #[error("conflict: {0}")]
    Conflict(String),
}
