//! Core ledger logic
//!
//! Pure, synchronous rules over the in-memory order sequence. Nothing in this
//! module performs I/O; persistence is layered on top by the record manager.

pub mod book;
pub mod ids;
pub mod search;
pub mod snapshot;

pub use book::OrderBook;
pub use ids::IdAllocator;
pub use search::SearchView;
