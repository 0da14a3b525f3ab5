//! Shared types for the boost order ledger
//!
//! Contains the order record model, the messages exchanged with the view
//! layer, and the logging utilities used by every crate in the workspace.

pub mod errors;
pub mod logging;
pub mod messages;
pub mod types;

pub use errors::*;
pub use types::*;

// Re-export the view boundary messages
pub use messages::{Intent, IntentOutcome, LedgerView, SearchQuery};
