//! Catalog error taxonomy shared by the core and the HTTP server.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Unknown flavor id.
    NotFound,
    /// Flavor id already taken.
    Conflict,
    /// Request carried nothing to act on.
    BadRequest,
    /// Input could not be decoded into the expected types.
    InvalidInput,
}

impl ClientCode {
    /// String representation used in logs and tests.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::NotFound => "NOT_FOUND",
            ClientCode::Conflict => "CONFLICT",
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::InvalidInput => "INVALID_INPUT",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors raised by catalog operations. The `Display` text is the `detail`
/// message returned to HTTP clients.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("Flavor not found")]
    NotFound,
    #[error("Flavor ID already exists")]
    Conflict(i64),
    #[error("No parameters provided")]
    NoUpdateFields,
    #[error("{0}")]
    InvalidInput(String),
}

impl CatalogError {
    /// Map the error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            CatalogError::NotFound => ClientCode::NotFound,
            CatalogError::Conflict(_) => ClientCode::Conflict,
            CatalogError::NoUpdateFields => ClientCode::BadRequest,
            CatalogError::InvalidInput(_) => ClientCode::InvalidInput,
        }
    }
}
