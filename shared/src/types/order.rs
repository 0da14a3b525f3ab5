//! The boost order record and the values used to create and change it

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use super::tags::{OrderStatus, Rank, Region};
use crate::errors::SharedError;

/// Unique identifier for an order
///
/// Issued from the creation time in epoch milliseconds and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(u64);

impl OrderId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for OrderId {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(OrderId)
            .map_err(|_| SharedError::InvalidOrderId {
                input: s.to_string(),
            })
    }
}

/// Completion percentage, always within `0..=100`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Progress(u8);

impl Progress {
    pub const MAX: u8 = 100;

    /// Clamp an arbitrary value into range
    pub fn clamped(value: i64) -> Self {
        Self(value.clamp(0, i64::from(Self::MAX)) as u8)
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    pub const fn is_complete(self) -> bool {
        self.0 >= Self::MAX
    }

    /// Resolve a requested change against the current value
    pub fn apply(self, change: ProgressChange) -> Self {
        match change {
            ProgressChange::Set(value) => Self::clamped(value),
            ProgressChange::By(delta) => Self::clamped(i64::from(self.0).saturating_add(delta)),
        }
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl FromStr for Progress {
    type Err = SharedError;

    /// Parses form input; blank text reads as zero, fractions round
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }
        if let Ok(whole) = trimmed.parse::<i64>() {
            return Ok(Self::clamped(whole));
        }
        match trimmed.parse::<f64>() {
            Ok(fraction) if fraction.is_finite() => Ok(Self::clamped(fraction.round() as i64)),
            _ => Err(SharedError::InvalidProgress {
                input: s.to_string(),
            }),
        }
    }
}

impl Serialize for Progress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.0)
    }
}

impl<'de> Deserialize<'de> for Progress {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Form-driven clients stored the raw input text after an edit
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawProgress {
            Whole(i64),
            Fraction(f64),
            Text(String),
        }

        match RawProgress::deserialize(deserializer)? {
            RawProgress::Whole(value) => Ok(Progress::clamped(value)),
            RawProgress::Fraction(value) if value.is_finite() => {
                Ok(Progress::clamped(value.round() as i64))
            }
            RawProgress::Fraction(value) => Err(serde::de::Error::custom(format!(
                "progress is not a finite number: {value}"
            ))),
            RawProgress::Text(text) => text.parse().map_err(serde::de::Error::custom),
        }
    }
}

/// Requested progress change: an absolute value or a signed step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressChange {
    Set(i64),
    By(i64),
}

fn deserialize_price<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawPrice {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match RawPrice::deserialize(deserializer)? {
        RawPrice::Text(text) => text,
        RawPrice::Number(number) => number.to_string(),
    })
}

/// A single boost order
///
/// Field order matches the persisted snapshot layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoostOrder {
    pub username: String,
    pub password: String,
    pub current_rank: Rank,
    pub target_rank: Rank,
    pub region: Region,
    /// Price as entered by the operator
    #[serde(deserialize_with = "deserialize_price")]
    pub price: String,
    pub id: OrderId,
    pub status: OrderStatus,
    #[serde(default)]
    pub assigned_to: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub estimated_completion: String,
    #[serde(default)]
    pub progress: Progress,
}

impl BoostOrder {
    /// Fresh `Available` order built from a draft
    pub fn from_draft(id: OrderId, draft: OrderDraft) -> Self {
        Self {
            username: draft.username,
            password: draft.password,
            current_rank: draft.current_rank,
            target_rank: draft.target_rank,
            region: draft.region,
            price: draft.price,
            id,
            status: OrderStatus::Available,
            assigned_to: String::new(),
            start_date: String::new(),
            estimated_completion: String::new(),
            progress: Progress::default(),
        }
    }

    /// Numeric reading of the price, when the entered text is a number
    pub fn price_value(&self) -> Option<f64> {
        self.price
            .trim()
            .trim_start_matches('$')
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
    }

    /// First status invariant this record breaks, if any
    pub fn invariant_violation(&self) -> Option<&'static str> {
        match self.status {
            OrderStatus::Available if !self.assigned_to.is_empty() => {
                Some("available orders cannot have an assigned worker")
            }
            OrderStatus::Available if self.progress.value() != 0 => {
                Some("available orders cannot have progress")
            }
            OrderStatus::InProgress if self.assigned_to.trim().is_empty() => {
                Some("orders in progress need an assigned worker")
            }
            OrderStatus::Completed if !self.progress.is_complete() => {
                Some("completed orders must be at 100% progress")
            }
            _ => None,
        }
    }
}

/// Operator input for a new order
///
/// Nothing here is validated; empty fields are accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    pub username: String,
    pub password: String,
    pub region: Region,
    pub current_rank: Rank,
    pub target_rank: Rank,
    pub price: String,
}

/// Whole-record replacement for an edit
///
/// Edits replace every field of the stored order; they never merge. The only
/// way to obtain a replacement is to copy a current record and change the
/// fields that should differ, so untouched fields carry their current values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderReplacement(BoostOrder);

impl OrderReplacement {
    pub fn from_current(order: &BoostOrder) -> Self {
        Self(order.clone())
    }

    pub fn id(&self) -> OrderId {
        self.0.id
    }

    pub fn record(&self) -> &BoostOrder {
        &self.0
    }

    pub fn into_record(self) -> BoostOrder {
        self.0
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.0.username = username.into();
        self
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.0.password = password.into();
        self
    }

    pub fn with_region(mut self, region: Region) -> Self {
        self.0.region = region;
        self
    }

    pub fn with_current_rank(mut self, rank: Rank) -> Self {
        self.0.current_rank = rank;
        self
    }

    pub fn with_target_rank(mut self, rank: Rank) -> Self {
        self.0.target_rank = rank;
        self
    }

    pub fn with_price(mut self, price: impl Into<String>) -> Self {
        self.0.price = price.into();
        self
    }

    pub fn with_assigned_to(mut self, worker: impl Into<String>) -> Self {
        self.0.assigned_to = worker.into();
        self
    }

    pub fn with_estimated_completion(mut self, estimate: impl Into<String>) -> Self {
        self.0.estimated_completion = estimate.into();
        self
    }

    pub fn with_progress(mut self, progress: Progress) -> Self {
        self.0.progress = progress;
        self
    }

    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.0.status = status;
        self
    }
}

/// Counts derived from the current order sequence
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aggregates {
    /// Orders in progress
    pub active: usize,
    pub completed: usize,
    pub available: usize,
    pub total: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_order() -> BoostOrder {
        BoostOrder::from_draft(
            OrderId::new(1_700_000_000_000),
            OrderDraft {
                username: "nate123".to_string(),
                password: "hunter2".to_string(),
                region: Region::NA,
                current_rank: Rank::Silver,
                target_rank: Rank::Platinum,
                price: "45".to_string(),
            },
        )
    }

    #[test]
    fn test_progress_clamps_at_both_bounds() {
        assert_eq!(Progress::clamped(105).value(), 100);
        assert_eq!(Progress::clamped(-5).value(), 0);
        assert_eq!(Progress::clamped(40).apply(ProgressChange::By(10)).value(), 50);
        assert_eq!(Progress::clamped(95).apply(ProgressChange::By(10)).value(), 100);
        assert_eq!(Progress::clamped(5).apply(ProgressChange::By(-10)).value(), 0);
        assert_eq!(Progress::clamped(5).apply(ProgressChange::Set(70)).value(), 70);
        assert_eq!(Progress::clamped(0).apply(ProgressChange::By(i64::MAX)).value(), 100);
    }

    #[test]
    fn test_progress_accepts_form_text() {
        let parsed: Progress = serde_json::from_str("\"60\"").unwrap();
        assert_eq!(parsed.value(), 60);

        let parsed: Progress = serde_json::from_str("\"\"").unwrap();
        assert_eq!(parsed.value(), 0);

        let parsed: Progress = serde_json::from_str("250").unwrap();
        assert_eq!(parsed.value(), 100);

        let parsed: Progress = serde_json::from_str("33.6").unwrap();
        assert_eq!(parsed.value(), 34);

        assert!(serde_json::from_str::<Progress>("\"lots\"").is_err());
    }

    #[test]
    fn test_new_order_starts_available() {
        let order = sample_order();
        assert_eq!(order.status, OrderStatus::Available);
        assert_eq!(order.progress.value(), 0);
        assert!(order.assigned_to.is_empty());
        assert!(order.start_date.is_empty());
        assert!(order.invariant_violation().is_none());
    }

    #[test]
    fn test_serialized_layout_uses_camel_case_keys() {
        let json = serde_json::to_string(&sample_order()).unwrap();
        assert_eq!(
            json,
            "{\"username\":\"nate123\",\"password\":\"hunter2\",\"currentRank\":\"silver\",\
             \"targetRank\":\"platinum\",\"region\":\"NA\",\"price\":\"45\",\"id\":1700000000000,\
             \"status\":\"Available\",\"assignedTo\":\"\",\"startDate\":\"\",\
             \"estimatedCompletion\":\"\",\"progress\":0}"
        );
    }

    #[test]
    fn test_numeric_price_is_read_as_text() {
        let json = r#"{"username":"a","password":"b","currentRank":"gold","targetRank":"diamond",
            "region":"EU","price":30,"id":7,"status":"Available"}"#;
        let order: BoostOrder = serde_json::from_str(json).unwrap();
        assert_eq!(order.price, "30");
        assert_eq!(order.price_value(), Some(30.0));
        assert!(order.estimated_completion.is_empty());
    }

    #[test]
    fn test_invariant_violations_are_reported() {
        let mut order = sample_order();
        order.assigned_to = "Booster1".to_string();
        assert!(order.invariant_violation().is_some());

        order.status = OrderStatus::InProgress;
        assert!(order.invariant_violation().is_none());

        order.assigned_to.clear();
        assert!(order.invariant_violation().is_some());

        order.assigned_to = "Booster1".to_string();
        order.status = OrderStatus::Completed;
        assert!(order.invariant_violation().is_some());
        order.progress = Progress::clamped(100);
        assert!(order.invariant_violation().is_none());
    }

    #[test]
    fn test_replacement_starts_from_current_record() {
        let order = sample_order();
        let replacement = OrderReplacement::from_current(&order).with_price("60");
        assert_eq!(replacement.id(), order.id);
        assert_eq!(replacement.record().username, order.username);
        assert_eq!(replacement.record().price, "60");
    }

    #[test]
    fn test_order_id_parsing() {
        assert_eq!("42".parse::<OrderId>().unwrap(), OrderId::new(42));
        assert!("forty-two".parse::<OrderId>().is_err());
    }
}
