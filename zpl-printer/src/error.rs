//! Error types for the printer library

use thiserror::Error;

/// Printer error types
#[derive(Debug, Error)]
pub enum PrintError {
    /// Device address is not a valid IPv4 address
    #[error("Invalid printer address: {0}")]
    InvalidAddress(String),

    /// Nothing to send - the generated document was empty
    #[error("Empty label document, nothing to send")]
    EmptyDocument,

    /// Network connection error
    #[error("Connection failed: {0}")]
    Connection(String),

    /// Timeout during connect or write
    #[error("Timeout: {0}")]
    Timeout(String),

    /// IO error during printing
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PrintError {
    /// Whether this error is a client-side input problem rather than a
    /// transport failure
    pub fn is_address_error(&self) -> bool {
        matches!(self, PrintError::InvalidAddress(_))
    }
}

/// Result type for printer operations
pub type PrintResult<T> = Result<T, PrintError>;
