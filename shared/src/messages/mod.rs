//! Message types exchanged with the view layer
//!
//! - `intent`: requests raised by the view (create, delete, assign, ...)
//! - `view`: data handed back for rendering (snapshots, search queries)

pub mod intent;
pub mod view;

pub use intent::{Intent, IntentOutcome};
pub use view::{LedgerView, SearchQuery};
