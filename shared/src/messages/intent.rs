//! Intents raised by the view layer and the outcomes returned for them

use crate::messages::view::SearchQuery;
use crate::types::{BoostOrder, OrderDraft, OrderId, OrderReplacement, ProgressChange};

/// A single request from the view layer
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    Create(OrderDraft),
    Delete(OrderId),
    Assign {
        id: OrderId,
        worker: String,
    },
    UpdateProgress {
        id: OrderId,
        change: ProgressChange,
    },
    /// Replace the whole record, never a field merge
    Edit {
        id: OrderId,
        replacement: OrderReplacement,
    },
    Search(SearchQuery),
}

impl Intent {
    /// Whether handling this intent may change the order sequence
    pub fn is_mutation(&self) -> bool {
        !matches!(self, Intent::Search(_))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Intent::Create(_) => "create",
            Intent::Delete(_) => "delete",
            Intent::Assign { .. } => "assign",
            Intent::UpdateProgress { .. } => "update_progress",
            Intent::Edit { .. } => "edit",
            Intent::Search(_) => "search",
        }
    }
}

/// Result of handling an intent; records are copies, never live references
#[derive(Debug, Clone, PartialEq)]
pub enum IntentOutcome {
    Created(BoostOrder),
    /// `removed` is `None` when the id was not present
    Deleted {
        id: OrderId,
        removed: Option<BoostOrder>,
    },
    Updated(BoostOrder),
    Matches(Vec<BoostOrder>),
}
