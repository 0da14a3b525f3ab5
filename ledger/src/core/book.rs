//! In-memory order sequence and its lifecycle rules
//!
//! The book owns the authoritative sequence. Every mutation either applies in
//! full or leaves the sequence untouched and returns an error.

use std::collections::HashSet;

use shared::{
    Aggregates, BoostOrder, OrderDraft, OrderId, OrderReplacement, OrderStatus, Progress,
    ProgressChange, SearchQuery,
};

use super::ids::IdAllocator;
use super::search::SearchView;
use crate::error::{LedgerError, LedgerResult};

/// Ordered collection of boost orders, insertion order preserved
#[derive(Debug, Clone, Default)]
pub struct OrderBook {
    orders: Vec<BoostOrder>,
    ids: IdAllocator,
}

impl OrderBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopt a previously persisted sequence
    ///
    /// Rejects sequences where two orders share an id.
    pub fn from_orders(orders: Vec<BoostOrder>) -> LedgerResult<Self> {
        let mut seen = HashSet::with_capacity(orders.len());
        if let Some(duplicate) = orders.iter().find(|order| !seen.insert(order.id)) {
            return Err(LedgerError::CorruptSnapshot {
                message: format!("duplicate order id {}", duplicate.id),
            });
        }

        let ids = IdAllocator::seeded(orders.iter().map(|order| &order.id));
        Ok(Self { orders, ids })
    }

    pub fn orders(&self) -> &[BoostOrder] {
        &self.orders
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn get(&self, id: OrderId) -> Option<&BoostOrder> {
        self.orders.iter().find(|order| order.id == id)
    }

    fn position(&self, id: OrderId) -> LedgerResult<usize> {
        self.orders
            .iter()
            .position(|order| order.id == id)
            .ok_or(LedgerError::NotFound { id })
    }

    /// Append a new `Available` order built from the draft
    ///
    /// Fails without touching the sequence when no unused id is left.
    pub fn create(&mut self, draft: OrderDraft, now_millis: u64) -> LedgerResult<&BoostOrder> {
        let id = self.ids.next(now_millis)?;
        self.orders.push(BoostOrder::from_draft(id, draft));
        Ok(&self.orders[self.orders.len() - 1])
    }

    /// Remove an order; returns `None` when the id is absent
    pub fn delete(&mut self, id: OrderId) -> Option<BoostOrder> {
        let index = self.orders.iter().position(|order| order.id == id)?;
        Some(self.orders.remove(index))
    }

    /// Hand an `Available` order to a worker
    pub fn assign(&mut self, id: OrderId, worker: &str, today: String) -> LedgerResult<&BoostOrder> {
        let index = self.position(id)?;
        let order = &mut self.orders[index];

        if !order.status.can_transition_to(OrderStatus::InProgress) {
            return Err(LedgerError::InvalidTransition {
                id,
                operation: "assign",
                expected: OrderStatus::Available,
                actual: order.status,
            });
        }
        if worker.trim().is_empty() {
            return Err(LedgerError::invalid_record(id, "worker must not be empty"));
        }

        order.status = OrderStatus::InProgress;
        order.assigned_to = worker.to_string();
        order.start_date = today;
        order.progress = Progress::default();
        Ok(order)
    }

    /// Move an in-progress order's completion, clamped to `0..=100`
    ///
    /// Reaching 100 completes the order.
    pub fn update_progress(&mut self, id: OrderId, change: ProgressChange) -> LedgerResult<&BoostOrder> {
        let index = self.position(id)?;
        let order = &mut self.orders[index];

        if order.status != OrderStatus::InProgress {
            return Err(LedgerError::InvalidTransition {
                id,
                operation: "update progress of",
                expected: OrderStatus::InProgress,
                actual: order.status,
            });
        }

        order.progress = order.progress.apply(change);
        if order.progress.is_complete() {
            order.status = OrderStatus::Completed;
        }
        Ok(order)
    }

    /// Replace every field of an order with `replacement`
    ///
    /// Status cannot be changed by an edit, except that an in-progress
    /// replacement at 100% completes the order.
    pub fn edit(&mut self, id: OrderId, replacement: OrderReplacement) -> LedgerResult<&BoostOrder> {
        let index = self.position(id)?;

        if replacement.id() != id {
            return Err(LedgerError::invalid_record(
                id,
                format!("replacement carries id {}", replacement.id()),
            ));
        }

        let current_status = self.orders[index].status;
        let mut record = replacement.into_record();

        if record.status != current_status {
            return Err(LedgerError::InvalidTransition {
                id,
                operation: "edit status of",
                expected: current_status,
                actual: record.status,
            });
        }
        if record.status == OrderStatus::InProgress && record.progress.is_complete() {
            record.status = OrderStatus::Completed;
        }
        if let Some(reason) = record.invariant_violation() {
            return Err(LedgerError::invalid_record(id, reason));
        }

        self.orders[index] = record;
        Ok(&self.orders[index])
    }

    pub fn search<'a>(&'a self, query: &'a SearchQuery) -> SearchView<'a> {
        SearchView::new(&self.orders, query)
    }

    /// Recount every aggregate from the current sequence
    pub fn aggregates(&self) -> Aggregates {
        self.orders.iter().fold(
            Aggregates {
                total: self.orders.len(),
                ..Aggregates::default()
            },
            |mut counts, order| {
                match order.status {
                    OrderStatus::Available => counts.available += 1,
                    OrderStatus::InProgress => counts.active += 1,
                    OrderStatus::Completed => counts.completed += 1,
                }
                counts
            },
        )
    }
}
