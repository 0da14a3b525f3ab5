//! Order id allocation

use shared::OrderId;

use crate::error::{LedgerError, LedgerResult};

/// Issues time-based ids that strictly increase
///
/// Ids are the creation time in epoch milliseconds. When the clock has not
/// advanced past the last issued id (same millisecond, or the clock stepped
/// backwards) the next id is bumped to `last + 1`. Once `u64::MAX` has been
/// issued or loaded there is no id left to bump to.
#[derive(Debug, Clone, Default)]
pub struct IdAllocator {
    last: Option<u64>,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the allocator so it never reissues any of `existing`
    pub fn seeded<'a>(existing: impl IntoIterator<Item = &'a OrderId>) -> Self {
        Self {
            last: existing.into_iter().map(|id| id.as_u64()).max(),
        }
    }

    pub fn next(&mut self, now_millis: u64) -> LedgerResult<OrderId> {
        let raw = match self.last {
            Some(last) if now_millis <= last => last
                .checked_add(1)
                .ok_or(LedgerError::IdsExhausted { last: OrderId::new(last) })?,
            _ => now_millis,
        };
        self.last = Some(raw);
        Ok(OrderId::new(raw))
    }
}
