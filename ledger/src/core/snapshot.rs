//! Snapshot codec for the persisted order sequence
//!
//! A snapshot is a JSON array of orders. Encoding is deterministic, so a
//! decoded snapshot encodes back to the same bytes.

use shared::{BoostOrder, Component, ledger_warn};

use crate::error::{LedgerError, LedgerResult};

pub fn encode(orders: &[BoostOrder]) -> LedgerResult<String> {
    Ok(serde_json::to_string(orders)?)
}

/// Decode a snapshot; blank input means nothing was saved yet
///
/// Id uniqueness is checked by [`crate::core::OrderBook::from_orders`].
pub fn decode(content: &str) -> LedgerResult<Vec<BoostOrder>> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    let orders: Vec<BoostOrder> =
        serde_json::from_str(content).map_err(|e| LedgerError::CorruptSnapshot {
            message: e.to_string(),
        })?;

    // Kept as-is: dropping or rewriting stored orders would lose operator data
    for order in &orders {
        if let Some(reason) = order.invariant_violation() {
            ledger_warn!(Component::Store, order_id = %order.id, "⚠️ Loaded order breaks invariant: {}", reason);
        }
    }

    Ok(orders)
}
