//! Error types for the books

use rust_decimal::Decimal;
use thiserror::Error;

/// Result type for book operations
pub type Result<T> = std::result::Result<T, Error>;

/// Book errors
///
/// Every operation either commits fully or leaves state unchanged; no error
/// here is retried internally.
#[derive(Error, Debug)]
pub enum Error {
    /// Journal debit/credit totals differ beyond tolerance, or total is zero
    #[error("journal does not balance: debits {debit}, credits {credit}")]
    Unbalanced {
        /// Sum of debit amounts across the submitted lines
        debit: Decimal,
        /// Sum of credit amounts across the submitted lines
        credit: Decimal,
    },

    /// Stock item not found
    #[error("stock item not found: {0}")]
    ItemNotFound(String),

    /// Negative stock quantity requested
    #[error("invalid stock quantity: {0}")]
    InvalidQuantity(i64),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Concurrency error (actor mailbox closed, etc.)
    #[error("concurrency error: {0}")]
    Concurrency(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Telemetry error
    #[error("telemetry error: {0}")]
    Telemetry(#[from] prometheus::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl From<String> for Error {
    fn from(msg: String) -> Self {
        Error::Other(msg)
    }
}

impl From<&str> for Error {
    fn from(msg: &str) -> Self {
        Error::Other(msg.to_string())
    }
}
