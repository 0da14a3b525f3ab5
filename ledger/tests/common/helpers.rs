//! Test helpers and builder patterns for ledger tests

use ledger::services::MemoryStore;
use ledger::traits::{MockClock, MockOrderStore};
use ledger::{LedgerResult, RecordManager};
use shared::{BoostOrder, OrderDraft, ProgressChange};

use super::fixtures::TestFixtures;

/// Clock ticking one millisecond per call, always on the same day
pub fn ticking_clock() -> MockClock {
    let mut clock = MockClock::new();
    let mut now = TestFixtures::START_MILLIS;
    clock.expect_now_millis().returning(move || {
        now += 1;
        now
    });
    clock
        .expect_today()
        .returning(|| TestFixtures::TODAY.to_string());
    clock
}

/// Clock frozen on a single millisecond
pub fn stalled_clock() -> MockClock {
    let mut clock = MockClock::new();
    clock
        .expect_now_millis()
        .returning(|| TestFixtures::START_MILLIS);
    clock
        .expect_today()
        .returning(|| TestFixtures::TODAY.to_string());
    clock
}

/// Builder for record managers backed by mocks
pub struct LedgerBuilder {
    store: MockOrderStore,
    clock: MockClock,
    configured_store: bool,
}

impl LedgerBuilder {
    pub fn new() -> Self {
        Self {
            store: MockOrderStore::new(),
            clock: ticking_clock(),
            configured_store: false,
        }
    }

    /// Configure the store mock; replaces the default empty-load, always-save behavior
    pub fn with_store<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut MockOrderStore),
    {
        setup(&mut self.store);
        self.configured_store = true;
        self
    }

    /// Start from a persisted sequence; saves always succeed
    pub fn with_orders(self, orders: Vec<BoostOrder>) -> Self {
        self.with_store(move |store| {
            store.expect_load().return_once(move || Ok(orders));
            store.expect_save().returning(|_| Ok(())).times(0..);
        })
    }

    pub fn with_clock(mut self, clock: MockClock) -> Self {
        self.clock = clock;
        self
    }

    pub async fn build(mut self) -> LedgerResult<RecordManager<MockOrderStore, MockClock>> {
        if !self.configured_store {
            self.store.expect_load().returning(|| Ok(Vec::new()));
            self.store.expect_save().returning(|_| Ok(())).times(0..);
        }
        RecordManager::open(self.store, self.clock).await
    }
}

impl Default for LedgerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper functions for common test operations
pub struct TestHelpers;

impl TestHelpers {
    /// Manager over an empty mock store that accepts every save
    pub async fn simple_manager() -> RecordManager<MockOrderStore, MockClock> {
        LedgerBuilder::new().build().await.expect("empty store should open")
    }

    /// Manager over an in-memory slot
    pub async fn memory_manager(store: MemoryStore) -> RecordManager<MemoryStore, MockClock> {
        RecordManager::open(store, ticking_clock())
            .await
            .expect("memory store should open")
    }

    /// Create an order and move it to in-progress
    pub async fn started_order<S>(manager: &mut RecordManager<S, MockClock>, draft: OrderDraft) -> BoostOrder
    where
        S: ledger::OrderStore + Send + Sync + 'static,
    {
        let created = manager.create(draft).await.expect("create should succeed");
        manager
            .assign(created.id, TestFixtures::WORKER)
            .await
            .expect("assign should succeed")
    }

    /// Create, assign, and finish an order
    pub async fn completed_order<S>(manager: &mut RecordManager<S, MockClock>, draft: OrderDraft) -> BoostOrder
    where
        S: ledger::OrderStore + Send + Sync + 'static,
    {
        let started = Self::started_order(manager, draft).await;
        manager
            .update_progress(started.id, ProgressChange::Set(100))
            .await
            .expect("progress should succeed")
    }
}
