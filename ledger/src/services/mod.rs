//! Service implementations
//!
//! Real implementations of the collaborator traits. These are the production
//! implementations that handle actual I/O and wall-clock time.

pub mod clock;
pub mod file_store;
pub mod memory_store;

#[cfg(test)]
mod tests;

// Re-export all service implementations
pub use clock::RealClock;
pub use file_store::{DEFAULT_SLOT, RealFileStore};
pub use memory_store::MemoryStore;
