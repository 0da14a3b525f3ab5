//! Service-specific tests
//!
//! Each service has its own test file; shared fixtures live in `common`.


// Common test utilities for services
pub mod common {
    use shared::{BoostOrder, OrderDraft, OrderId, Rank, Region};

    /// Build an `Available` order with the given id and username
    pub fn order(id: u64, username: &str) -> BoostOrder {
        BoostOrder::from_draft(
            OrderId::new(id),
            OrderDraft {
                username: username.to_string(),
                password: "pw".to_string(),
                region: Region::NA,
                current_rank: Rank::Silver,
                target_rank: Rank::Gold,
                price: "20".to_string(),
            },
        )
    }
}
