//! Core types used throughout the ledger

use std::fmt;

pub mod order;
pub mod tags;

pub use order::{
    Aggregates, BoostOrder, OrderDraft, OrderId, OrderReplacement, Progress, ProgressChange,
};
pub use tags::{OrderStatus, Rank, Region};

/// Component tag attached to every log line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    /// Record manager: owns the order sequence
    Manager,
    /// Store collaborator implementations
    Store,
    /// Command-line view layer
    Cli,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::Manager => write!(f, "manager"),
            Component::Store => write!(f, "store"),
            Component::Cli => write!(f, "cli"),
        }
    }
}
