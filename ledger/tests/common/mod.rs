//! Common test utilities and infrastructure
//!
//! Fixtures and builders shared by the ledger test suites.

#![allow(dead_code)]

pub mod fixtures;
pub mod helpers;

pub use fixtures::TestFixtures;
pub use helpers::{LedgerBuilder, TestHelpers, stalled_clock};
