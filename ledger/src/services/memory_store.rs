//! In-memory order store
//!
//! Holds the encoded snapshot rather than the orders themselves, so callers
//! see exactly the bytes a persistent slot would hold.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Mutex;

use shared::BoostOrder;

use crate::core::snapshot;
use crate::error::LedgerResult;
use crate::traits::OrderStore;

#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: Mutex<Option<String>>,
    saves: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a previously encoded snapshot in the slot
    pub fn with_snapshot(content: impl Into<String>) -> Self {
        Self {
            slot: Mutex::new(Some(content.into())),
            saves: AtomicUsize::new(0),
        }
    }

    pub async fn contents(&self) -> Option<String> {
        self.slot.lock().await.clone()
    }

    /// Number of completed saves
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl OrderStore for MemoryStore {
    async fn load(&self) -> LedgerResult<Vec<BoostOrder>> {
        match self.slot.lock().await.as_deref() {
            Some(content) => snapshot::decode(content),
            None => Ok(Vec::new()),
        }
    }

    async fn save(&self, orders: &[BoostOrder]) -> LedgerResult<()> {
        let content = snapshot::encode(orders)?;
        *self.slot.lock().await = Some(content);
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
