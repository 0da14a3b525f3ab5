//! Real file store service implementation
//!
//! Keeps the order snapshot in a single JSON file per slot key. Saves write a
//! temporary sibling and rename it over the slot, so a crash mid-write leaves
//! the previous snapshot intact.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::fs;

use shared::{BoostOrder, Component, ledger_debug};

use crate::core::snapshot;
use crate::error::{LedgerError, LedgerResult};
use crate::traits::OrderStore;

/// Slot key used when none is configured
pub const DEFAULT_SLOT: &str = "valorantAccounts";

/// File-backed order store
#[derive(Debug, Clone)]
pub struct RealFileStore {
    /// Directory holding slot files
    base_dir: PathBuf,
    /// Slot key, also the file stem
    slot: String,
}

impl RealFileStore {
    /// Create new file store (slots live in ./data)
    pub fn new() -> Self {
        Self {
            base_dir: PathBuf::from("./data"),
            slot: DEFAULT_SLOT.to_string(),
        }
    }

    /// Create with custom base directory
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self {
            base_dir,
            slot: DEFAULT_SLOT.to_string(),
        }
    }

    /// Use a different slot key
    ///
    /// Keys become file names, so they are limited to ASCII letters, digits,
    /// `-` and `_`.
    pub fn with_slot(mut self, slot: &str) -> LedgerResult<Self> {
        let valid = !slot.is_empty()
            && slot
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(LedgerError::config(format!("slot key '{slot}'")));
        }
        self.slot = slot.to_string();
        Ok(self)
    }

    /// Path of the slot file
    pub fn slot_path(&self) -> PathBuf {
        self.base_dir.join(format!("{}.json", self.slot))
    }

    fn temp_path(&self) -> PathBuf {
        self.base_dir.join(format!(".{}.json.tmp", self.slot))
    }

    /// Raw slot contents, `None` when nothing has been saved
    pub async fn read_raw(&self) -> LedgerResult<Option<String>> {
        match fs::read_to_string(self.slot_path()).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(LedgerError::persistence("read", e.into())),
        }
    }
}

impl Default for RealFileStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OrderStore for RealFileStore {
    async fn load(&self) -> LedgerResult<Vec<BoostOrder>> {
        let Some(content) = self.read_raw().await? else {
            ledger_debug!(Component::Store, "📭 No saved slot at {}", self.slot_path().display());
            return Ok(Vec::new());
        };

        let orders = snapshot::decode(&content)?;
        ledger_debug!(Component::Store, "📂 Read {} orders from {}", orders.len(), self.slot_path().display());
        Ok(orders)
    }

    async fn save(&self, orders: &[BoostOrder]) -> LedgerResult<()> {
        let content = snapshot::encode(orders)?;

        fs::create_dir_all(&self.base_dir)
            .await
            .map_err(|e| LedgerError::persistence("create slot directory", e.into()))?;

        let temp_path = self.temp_path();
        fs::write(&temp_path, content.as_bytes())
            .await
            .map_err(|e| LedgerError::persistence("write slot", e.into()))?;
        if let Err(e) = fs::rename(&temp_path, self.slot_path()).await {
            // Best effort; the rename error is the one worth reporting
            let _ = fs::remove_file(&temp_path).await;
            return Err(LedgerError::persistence("replace slot", e.into()));
        }

        ledger_debug!(Component::Store, "💾 Wrote {} orders to {}", orders.len(), self.slot_path().display());
        Ok(())
    }
}
