//! Shared error types for the boost order ledger

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SharedError {
    #[error("Invalid order id: {input}")]
    InvalidOrderId { input: String },

    #[error("Invalid status: {input}")]
    InvalidStatus { input: String },

    #[error("Invalid progress value: {input}")]
    InvalidProgress { input: String },
}

pub type SharedResult<T> = Result<T, SharedError>;
