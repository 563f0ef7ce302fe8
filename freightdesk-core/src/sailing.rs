//! Synthetic sailings offered on the schedule page.
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One offered departure. Prices are whole US dollars for the full
/// container count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sailing {
    /// 1-based, unique within a generated batch
    pub id: u32,
    pub departure_date: NaiveDate,
    pub transit_time_days: u32,
    pub eta: NaiveDate,
    pub total_price: i64,
    pub available_space: u32,
}

impl Sailing {
    #[must_use]
    pub const fn has_capacity_for(&self, containers: u32) -> bool {
        self.available_space >= containers
    }

    /// Price of a single container, if the count divides the total evenly.
    #[must_use]
    pub fn unit_price(&self, containers: u32) -> Option<i64> {
        let containers = i64::from(containers);
        if containers == 0 || self.total_price % containers != 0 {
            return None;
        }
        Some(self.total_price / containers)
    }
}
