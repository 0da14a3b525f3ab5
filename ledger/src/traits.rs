//! Trait definitions with mockall annotations for testing
//!
//! The record manager talks to its collaborators only through these traits,
//! which keeps persistence and wall-clock time injectable and mockable.

use async_trait::async_trait;
use shared::BoostOrder;

use crate::error::LedgerResult;

/// Local persistent slot holding the serialized order sequence
///
/// Implementations store the complete sequence on every save; there are no
/// partial writes.
#[mockall::automock]
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Read the persisted sequence
    ///
    /// # Returns
    /// The stored orders in their persisted order, or an empty vector when
    /// nothing has been saved yet
    async fn load(&self) -> LedgerResult<Vec<BoostOrder>>;

    /// Overwrite the slot with the complete current sequence
    ///
    /// # Parameters
    /// - `orders`: every order held by the manager, in sequence order
    async fn save(&self, orders: &[BoostOrder]) -> LedgerResult<()>;
}

/// Wall-clock source for order ids and assignment dates
#[mockall::automock]
pub trait Clock: Send + Sync {
    /// Milliseconds since the Unix epoch
    fn now_millis(&self) -> u64;

    /// Today's date stamp, `YYYY-MM-DD` in local time
    fn today(&self) -> String;
}
