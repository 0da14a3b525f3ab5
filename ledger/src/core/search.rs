//! Filtered, read-only view over the order sequence

use shared::{BoostOrder, OrderStatus, Region, SearchQuery};

/// Lazy search result borrowing the order sequence
///
/// Nothing is filtered until the view is iterated, and it can be iterated any
/// number of times. Sequence order is preserved.
#[derive(Debug, Clone)]
pub struct SearchView<'a> {
    orders: &'a [BoostOrder],
    needle: String,
    status: Option<OrderStatus>,
    region: Option<&'a Region>,
}

impl<'a> SearchView<'a> {
    pub fn new(orders: &'a [BoostOrder], query: &'a SearchQuery) -> Self {
        Self {
            orders,
            needle: query.term.to_lowercase(),
            status: query.status,
            region: query.region.as_ref(),
        }
    }

    /// Whether a single order passes the query
    pub fn matches(&self, order: &BoostOrder) -> bool {
        if self.status.is_some_and(|status| order.status != status) {
            return false;
        }
        if self.region.is_some_and(|region| &order.region != region) {
            return false;
        }
        self.needle.is_empty()
            || order.username.to_lowercase().contains(&self.needle)
            || order.region.as_str().to_lowercase().contains(&self.needle)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a BoostOrder> + '_ {
        self.orders.iter().filter(move |order| self.matches(order))
    }

    pub fn count(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Copy the matching orders out of the view
    pub fn to_vec(&self) -> Vec<BoostOrder> {
        self.iter().cloned().collect()
    }
}
