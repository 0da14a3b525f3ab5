//! Ledger-specific error types

use shared::{OrderId, OrderStatus, SharedError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Order not found: {id}")]
    NotFound { id: OrderId },

    #[error("Cannot {operation} order {id}: status is {actual}, expected {expected}")]
    InvalidTransition {
        id: OrderId,
        operation: &'static str,
        expected: OrderStatus,
        actual: OrderStatus,
    },

    #[error("Invalid record for order {id}: {reason}")]
    InvalidRecord { id: OrderId, reason: String },

    #[error("Persistence failed during {operation}: {message}")]
    PersistenceFailure { operation: String, message: String },

    #[error("No order id left after {last}")]
    IdsExhausted { last: OrderId },

    #[error("Corrupt snapshot: {message}")]
    CorruptSnapshot { message: String },

    #[error("Configuration error: {field}")]
    ConfigurationError { field: String },

    #[error("Shared component error: {0}")]
    SharedError(#[from] SharedError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl LedgerError {
    pub fn config(field: impl Into<String>) -> Self {
        LedgerError::ConfigurationError {
            field: field.into(),
        }
    }

    pub fn invalid_record(id: OrderId, reason: impl Into<String>) -> Self {
        LedgerError::InvalidRecord {
            id,
            reason: reason.into(),
        }
    }

    /// Wrap a store error; errors that already describe a persistence
    /// failure pass through unchanged
    pub fn persistence(operation: &str, source: LedgerError) -> Self {
        match source {
            already @ LedgerError::PersistenceFailure { .. } => already,
            other => LedgerError::PersistenceFailure {
                operation: operation.to_string(),
                message: other.to_string(),
            },
        }
    }

    pub fn is_persistence_failure(&self) -> bool {
        matches!(self, LedgerError::PersistenceFailure { .. })
    }
}

pub type LedgerResult<T> = Result<T, LedgerError>;
