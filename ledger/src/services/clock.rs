//! Wall-clock service implementation

use chrono::{Local, Utc};

use crate::traits::Clock;

/// System time backed clock
#[derive(Debug, Clone, Copy, Default)]
pub struct RealClock;

impl RealClock {
    pub fn new() -> Self {
        Self
    }
}

impl Clock for RealClock {
    fn now_millis(&self) -> u64 {
        // Pre-epoch clocks read as zero; id allocation still moves forward
        u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0)
    }

    fn today(&self) -> String {
        Local::now().format("%Y-%m-%d").to_string()
    }
}
