//! Record manager
//!
//! Owns the order book and mirrors it to the injected store after every
//! mutation. The in-memory sequence is the source of truth: when a save
//! fails the mutation stays applied, the manager remembers it has unsaved
//! changes, and the failure is returned to the caller. The next successful
//! save (any later mutation, or [`RecordManager::flush`]) writes the complete
//! current sequence.

use shared::{
    Aggregates, BoostOrder, Component, Intent, IntentOutcome, LedgerView, OrderDraft, OrderId,
    OrderReplacement, ProgressChange, SearchQuery, ledger_debug, logging,
};

use crate::core::{OrderBook, SearchView};
use crate::error::{LedgerError, LedgerResult};
use crate::traits::{Clock, OrderStore};

/// Authoritative owner of the boost order sequence
pub struct RecordManager<S, C>
where
    S: OrderStore + Send + Sync + 'static,
    C: Clock + Send + Sync + 'static,
{
    /// Order sequence and lifecycle rules
    book: OrderBook,

    /// Injected services
    store: S,
    clock: C,

    /// Set while the store lags behind the in-memory sequence
    unsaved: bool,
}

impl<S, C> RecordManager<S, C>
where
    S: OrderStore + Send + Sync + 'static,
    C: Clock + Send + Sync + 'static,
{
    /// Load the persisted sequence once and take ownership of it
    pub async fn open(store: S, clock: C) -> LedgerResult<Self> {
        let orders = store
            .load()
            .await
            .map_err(|e| LedgerError::persistence("load", e))?;
        let book = OrderBook::from_orders(orders)?;

        ledger_debug!(Component::Manager, "📂 Loaded {} orders", book.len());

        Ok(Self {
            book,
            store,
            clock,
            unsaved: false,
        })
    }

    pub fn orders(&self) -> &[BoostOrder] {
        self.book.orders()
    }

    pub fn get(&self, id: OrderId) -> Option<&BoostOrder> {
        self.book.get(id)
    }

    pub fn aggregates(&self) -> Aggregates {
        self.book.aggregates()
    }

    pub fn search<'a>(&'a self, query: &'a SearchQuery) -> SearchView<'a> {
        self.book.search(query)
    }

    /// Copy of the current orders and aggregates for rendering
    pub fn view(&self) -> LedgerView {
        LedgerView {
            orders: self.book.orders().to_vec(),
            aggregates: self.book.aggregates(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Whether the last save attempt failed
    pub fn has_unsaved_changes(&self) -> bool {
        self.unsaved
    }

    pub async fn create(&mut self, draft: OrderDraft) -> LedgerResult<BoostOrder> {
        let now = self.clock.now_millis();
        let created = self.book.create(draft, now)?.clone();

        ledger_debug!(Component::Manager, order_id = %created.id, "➕ Created order for '{}'", created.username);

        self.persist("create").await?;
        Ok(created)
    }

    /// Delete an order; an unknown id is a no-op and returns `None`
    pub async fn delete(&mut self, id: OrderId) -> LedgerResult<Option<BoostOrder>> {
        match self.book.delete(id) {
            Some(removed) => {
                ledger_debug!(Component::Manager, order_id = %id, "🗑️ Deleted order");
                self.persist("delete").await?;
                Ok(Some(removed))
            }
            None => {
                ledger_debug!(Component::Manager, order_id = %id, "Delete ignored, no such order");
                Ok(None)
            }
        }
    }

    pub async fn assign(&mut self, id: OrderId, worker: &str) -> LedgerResult<BoostOrder> {
        let today = self.clock.today();
        let assigned = self.book.assign(id, worker, today)?.clone();

        ledger_debug!(Component::Manager, order_id = %id, "👥 Assigned to '{}'", assigned.assigned_to);

        self.persist("assign").await?;
        Ok(assigned)
    }

    pub async fn update_progress(&mut self, id: OrderId, change: ProgressChange) -> LedgerResult<BoostOrder> {
        let updated = self.book.update_progress(id, change)?.clone();

        ledger_debug!(
            Component::Manager,
            order_id = %id,
            "📈 Progress {} ({})",
            updated.progress,
            updated.status
        );

        self.persist("update_progress").await?;
        Ok(updated)
    }

    /// Replace the whole record; see [`OrderReplacement`]
    pub async fn edit(&mut self, id: OrderId, replacement: OrderReplacement) -> LedgerResult<BoostOrder> {
        let edited = self.book.edit(id, replacement)?.clone();

        ledger_debug!(Component::Manager, order_id = %id, "✏️ Replaced order record");

        self.persist("edit").await?;
        Ok(edited)
    }

    /// Retry the save after a failure; no-op when nothing is pending
    pub async fn flush(&mut self) -> LedgerResult<()> {
        if !self.unsaved {
            return Ok(());
        }
        self.persist("flush").await
    }

    /// Route a view-layer intent to the matching operation
    pub async fn dispatch(&mut self, intent: Intent) -> LedgerResult<IntentOutcome> {
        ledger_debug!(Component::Manager, intent = intent.name(), "Handling intent");

        match intent {
            Intent::Create(draft) => self.create(draft).await.map(IntentOutcome::Created),
            Intent::Delete(id) => {
                let removed = self.delete(id).await?;
                Ok(IntentOutcome::Deleted { id, removed })
            }
            Intent::Assign { id, worker } => self.assign(id, &worker).await.map(IntentOutcome::Updated),
            Intent::UpdateProgress { id, change } => {
                self.update_progress(id, change).await.map(IntentOutcome::Updated)
            }
            Intent::Edit { id, replacement } => {
                self.edit(id, replacement).await.map(IntentOutcome::Updated)
            }
            Intent::Search(query) => Ok(IntentOutcome::Matches(self.search(&query).to_vec())),
        }
    }

    async fn persist(&mut self, operation: &str) -> LedgerResult<()> {
        match self.store.save(self.book.orders()).await {
            Ok(()) => {
                self.unsaved = false;
                Ok(())
            }
            Err(e) => {
                self.unsaved = true;
                let err = LedgerError::persistence(operation, e);
                logging::log_error(Component::Manager, "Saving orders", &err);
                Err(err)
            }
        }
    }
}
