//! Data handed to the view layer

use serde::{Deserialize, Serialize};

use crate::types::{Aggregates, BoostOrder, OrderStatus, Region};

/// Filter for the search view
///
/// `term` matches username or region as a case-insensitive substring; an
/// empty term matches everything. `status` and `region` narrow the result
/// to exact values when set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub term: String,
    pub status: Option<OrderStatus>,
    pub region: Option<Region>,
}

impl SearchQuery {
    /// Matches every order
    pub fn all() -> Self {
        Self::default()
    }

    pub fn term(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            ..Self::default()
        }
    }

    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_region(mut self, region: Region) -> Self {
        self.region = Some(region);
        self
    }
}

/// Snapshot of the ledger for rendering
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerView {
    pub orders: Vec<BoostOrder>,
    pub aggregates: Aggregates,
}
