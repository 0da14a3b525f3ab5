//! Test fixtures and data for ledger tests

use shared::{BoostOrder, OrderDraft, OrderId, Rank, Region};

/// Standard test data
pub struct TestFixtures;

impl TestFixtures {
    /// First millisecond stamp handed out by the test clock
    pub const START_MILLIS: u64 = 1_760_000_000_000;
    pub const TODAY: &'static str = "2026-10-19";

    pub const WORKER: &'static str = "Worker1";
    pub const OTHER_WORKER: &'static str = "Worker2";

    pub fn draft(username: &str, region: Region) -> OrderDraft {
        OrderDraft {
            username: username.to_string(),
            password: "hunter2".to_string(),
            region,
            current_rank: Rank::Gold,
            target_rank: Rank::Platinum,
            price: "45.00".to_string(),
        }
    }

    pub fn nate_draft() -> OrderDraft {
        Self::draft("nate123", Region::NA)
    }

    pub fn bob_draft() -> OrderDraft {
        OrderDraft {
            username: "bob".to_string(),
            password: "pw".to_string(),
            region: Region::EU,
            current_rank: Rank::Diamond,
            target_rank: Rank::Immortal,
            price: "120".to_string(),
        }
    }

    /// A mix of regions and usernames for search tests
    pub fn roster() -> Vec<OrderDraft> {
        vec![
            Self::nate_draft(),
            Self::bob_draft(),
            Self::draft("Hannah", Region::EU),
            Self::draft("zed", Region::NA),
        ]
    }

    /// Persisted order as the store would hand it back
    pub fn stored_order(id: u64, username: &str) -> BoostOrder {
        BoostOrder::from_draft(OrderId::new(id), Self::draft(username, Region::NA))
    }

    /// Snapshot written by an older build: string price, numeric-string progress
    pub fn legacy_snapshot() -> &'static str {
        r#"[
  {"username":"oldie","password":"pw","currentRank":"silver","targetRank":"gold","region":"NA",
   "price":"30","id":1700000000000,"status":"In Progress","assignedTo":"Worker2",
   "startDate":"2025-01-02","progress":"40"},
  {"username":"fresh","password":"pw","currentRank":"iron","targetRank":"bronze","region":"EU",
   "price":15,"id":1700000000001,"status":"Available","assignedTo":"","startDate":"","progress":0}
]"#
    }
}
