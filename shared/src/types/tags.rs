//! Enumerated tags carried by an order: region, rank tier and status
//!
//! Region and rank come straight from operator input and are never rejected.
//! Known values map to dedicated variants; anything else is preserved verbatim
//! in `Other` so a snapshot survives a load/save cycle unchanged.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::SharedError;

/// Service region of the boosted account
///
/// Build from text with `From`, which maps the canonical codes onto the
/// dedicated variants.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Region {
    NA,
    EU,
    Other(String),
}

impl Region {
    /// Regions offered by the order form
    pub fn known() -> [Region; 2] {
        [Region::NA, Region::EU]
    }

    pub fn as_str(&self) -> &str {
        match self {
            Region::NA => "NA",
            Region::EU => "EU",
            Region::Other(raw) => raw,
        }
    }

    /// Human readable name shown in detail views
    pub fn display_name(&self) -> &str {
        match self {
            Region::NA => "North America",
            Region::EU => "Europe",
            Region::Other(raw) => raw,
        }
    }
}

impl From<String> for Region {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "NA" => Region::NA,
            "EU" => Region::EU,
            _ => Region::Other(raw),
        }
    }
}

impl From<&str> for Region {
    fn from(raw: &str) -> Self {
        Region::from(raw.to_string())
    }
}

impl From<Region> for String {
    fn from(region: Region) -> Self {
        match region {
            Region::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Competitive rank tier, lowest to highest
///
/// Tiers are ordered but current/target pairs are not validated against each
/// other; see [`Rank::is_climb_to`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Rank {
    Iron,
    Bronze,
    Silver,
    Gold,
    Platinum,
    Diamond,
    Ascendant,
    Immortal,
    Radiant,
    Other(String),
}

impl Rank {
    /// All known tiers in ascending order
    pub const TIERS: [Rank; 9] = [
        Rank::Iron,
        Rank::Bronze,
        Rank::Silver,
        Rank::Gold,
        Rank::Platinum,
        Rank::Diamond,
        Rank::Ascendant,
        Rank::Immortal,
        Rank::Radiant,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Rank::Iron => "iron",
            Rank::Bronze => "bronze",
            Rank::Silver => "silver",
            Rank::Gold => "gold",
            Rank::Platinum => "platinum",
            Rank::Diamond => "diamond",
            Rank::Ascendant => "ascendant",
            Rank::Immortal => "immortal",
            Rank::Radiant => "radiant",
            Rank::Other(raw) => raw,
        }
    }

    /// Capitalized tier name
    pub fn label(&self) -> String {
        let raw = self.as_str();
        let mut chars = raw.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// Position in the tier ladder, `None` for unrecognized text
    pub fn ordinal(&self) -> Option<u8> {
        Self::TIERS
            .iter()
            .position(|tier| tier == self)
            .map(|index| index as u8)
    }

    /// Whether `target` sits above `self` on the ladder
    ///
    /// Returns `None` when either side is not a known tier.
    pub fn is_climb_to(&self, target: &Rank) -> Option<bool> {
        Some(target.ordinal()? > self.ordinal()?)
    }
}

impl From<String> for Rank {
    fn from(raw: String) -> Self {
        Self::TIERS
            .iter()
            .find(|tier| tier.as_str() == raw)
            .cloned()
            .unwrap_or(Rank::Other(raw))
    }
}

impl From<&str> for Rank {
    fn from(raw: &str) -> Self {
        Rank::from(raw.to_string())
    }
}

impl From<Rank> for String {
    fn from(rank: Rank) -> Self {
        match rank {
            Rank::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle status of an order
///
/// Allowed edges: `Available -> InProgress -> Completed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    Available,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 3] = [
        OrderStatus::Available,
        OrderStatus::InProgress,
        OrderStatus::Completed,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Available => "Available",
            OrderStatus::InProgress => "In Progress",
            OrderStatus::Completed => "Completed",
        }
    }

    /// Whether the lifecycle permits moving from `self` to `next`
    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        matches!(
            (self, next),
            (OrderStatus::Available, OrderStatus::InProgress)
                | (OrderStatus::InProgress, OrderStatus::Completed)
        )
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for OrderStatus {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "available" => Ok(OrderStatus::Available),
            "inprogress" => Ok(OrderStatus::InProgress),
            "completed" => Ok(OrderStatus::Completed),
            _ => Err(SharedError::InvalidStatus {
                input: s.to_string(),
            }),
        }
    }
}
