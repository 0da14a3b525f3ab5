//! Boost order ledger
//!
//! Keeps the authoritative list of boost orders in memory, applies the order
//! lifecycle rules (create, assign, progress, edit, delete), derives search
//! views and aggregates, and mirrors the full list to a local store after
//! every change.

pub mod cli;
pub mod core;
pub mod error;
pub mod manager;
pub mod services;
pub mod traits;

// Re-export commonly used types
pub use core::{OrderBook, SearchView};
pub use error::{LedgerError, LedgerResult};
pub use manager::RecordManager;
pub use traits::{Clock, OrderStore};
