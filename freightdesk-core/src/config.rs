//! Tunables for synthetic schedule generation and the intake catalog.
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::criteria::{ContainerType, SearchCriteria};

const DEFAULT_SCHEDULE_DATA: &str =
    include_str!("../../freightdesk-web/static/assets/data/schedule.json");

/// Inclusive integer range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: u32,
    pub max: u32,
}

impl Bounds {
    #[must_use]
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub const fn contains(self, value: u32) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Per-container price band in whole dollars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBand {
    pub min: i64,
    pub max: i64,
}

impl PriceBand {
    /// Band used for container types without a configured price.
    pub const UNPRICED: Self = Self { min: 0, max: 0 };

    #[must_use]
    pub const fn contains(self, value: i64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Options offered by the intake form dropdowns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminalCatalog {
    #[serde(default)]
    pub departures: Vec<String>,
    #[serde(default)]
    pub arrivals: Vec<String>,
    #[serde(default = "TerminalCatalog::default_container_types")]
    pub container_types: Vec<String>,
}

impl TerminalCatalog {
    fn default_container_types() -> Vec<String> {
        vec!["20ft".to_string(), "40ft".to_string()]
    }

    /// Departure terminals in display order.
    #[must_use]
    pub fn sorted_departures(&self) -> Vec<String> {
        sorted(&self.departures)
    }

    /// Arrival terminals in display order.
    #[must_use]
    pub fn sorted_arrivals(&self) -> Vec<String> {
        sorted(&self.arrivals)
    }
}

impl Default for TerminalCatalog {
    fn default() -> Self {
        Self {
            departures: [
                "Chongqing",
                "Chengdu",
                "Wuhan",
                "Qingdao",
                "Xian",
                "Jinan",
                "Changsha",
                "Shijiazhuang",
            ]
            .map(String::from)
            .to_vec(),
            arrivals: [
                "Warsaw",
                "Malaszewicze",
                "Budapest",
                "Belgrade",
                "Duisburg",
                "Prague",
                "Brno",
                "Dunajska Streda",
                "Curtici",
                "Vorsino",
            ]
            .map(String::from)
            .to_vec(),
            container_types: Self::default_container_types(),
        }
    }
}

fn sorted(items: &[String]) -> Vec<String> {
    let mut out = items.to_vec();
    out.sort();
    out
}

/// Errors raised when schedule configuration invariants are violated.
#[derive(Debug, Error)]
pub enum ScheduleConfigError {
    #[error("schedule config JSON could not be parsed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{field} range invalid (min {min} > max {max})")]
    InvertedRange {
        field: &'static str,
        min: u32,
        max: u32,
    },
    #[error("price band for {container_type} invalid (min {min} > max {max})")]
    InvertedPriceBand {
        container_type: String,
        min: i64,
        max: i64,
    },
    #[error("price band for {container_type} must not be negative")]
    NegativePrice { container_type: String },
    #[error("price step must be positive (got {0})")]
    PriceStep(i64),
    #[error("date sampling needs at least one attempt")]
    NoAttempts,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleConfig {
    #[serde(default = "ScheduleConfig::default_price_bands")]
    pub price_bands: BTreeMap<String, PriceBand>,
    #[serde(default = "ScheduleConfig::default_price_step")]
    pub price_step: i64,
    #[serde(default = "ScheduleConfig::default_short_haul_hub")]
    pub short_haul_hub: String,
    #[serde(default = "ScheduleConfig::default_short_haul_transit")]
    pub short_haul_transit: Bounds,
    #[serde(default = "ScheduleConfig::default_transit")]
    pub default_transit: Bounds,
    #[serde(default = "ScheduleConfig::default_available_space")]
    pub available_space: Bounds,
    #[serde(default = "ScheduleConfig::default_spacing")]
    pub min_departure_spacing_days: u32,
    #[serde(default = "ScheduleConfig::default_window_offset")]
    pub min_window_offset_days: u32,
    #[serde(default = "ScheduleConfig::default_max_attempts")]
    pub max_date_attempts: u32,
    #[serde(default)]
    pub terminals: TerminalCatalog,
}

impl ScheduleConfig {
    fn default_price_bands() -> BTreeMap<String, PriceBand> {
        BTreeMap::from([
            (
                "40ft".to_string(),
                PriceBand {
                    min: 7_500,
                    max: 12_000,
                },
            ),
            (
                "20ft".to_string(),
                PriceBand {
                    min: 4_500,
                    max: 8_000,
                },
            ),
        ])
    }

    const fn default_price_step() -> i64 {
        50
    }

    fn default_short_haul_hub() -> String {
        "Vorsino".to_string()
    }

    const fn default_short_haul_transit() -> Bounds {
        Bounds::new(15, 18)
    }

    const fn default_transit() -> Bounds {
        Bounds::new(18, 30)
    }

    const fn default_available_space() -> Bounds {
        Bounds::new(1, 40)
    }

    const fn default_spacing() -> u32 {
        3
    }

    const fn default_window_offset() -> u32 {
        3
    }

    const fn default_max_attempts() -> u32 {
        256
    }

    /// Parse and validate a configuration document.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed or a range is invalid.
    pub fn from_json(json: &str) -> Result<Self, ScheduleConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load the configuration bundled with the web assets, falling back to
    /// the built-in defaults.
    #[must_use]
    pub fn load_from_static() -> Self {
        match Self::from_json(DEFAULT_SCHEDULE_DATA) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("bundled schedule config rejected, using defaults: {err}");
                Self::default()
            }
        }
    }

    /// Check range and band invariants.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    pub fn validate(&self) -> Result<(), ScheduleConfigError> {
        for (field, bounds) in [
            ("short_haul_transit", self.short_haul_transit),
            ("default_transit", self.default_transit),
            ("available_space", self.available_space),
        ] {
            if bounds.min > bounds.max {
                return Err(ScheduleConfigError::InvertedRange {
                    field,
                    min: bounds.min,
                    max: bounds.max,
                });
            }
        }
        for (container_type, band) in &self.price_bands {
            if band.min < 0 {
                return Err(ScheduleConfigError::NegativePrice {
                    container_type: container_type.clone(),
                });
            }
            if band.min > band.max {
                return Err(ScheduleConfigError::InvertedPriceBand {
                    container_type: container_type.clone(),
                    min: band.min,
                    max: band.max,
                });
            }
        }
        if self.price_step <= 0 {
            return Err(ScheduleConfigError::PriceStep(self.price_step));
        }
        if self.max_date_attempts == 0 {
            return Err(ScheduleConfigError::NoAttempts);
        }
        Ok(())
    }

    /// Price band for a container type; unknown types are unpriced.
    #[must_use]
    pub fn price_band(&self, container_type: &ContainerType) -> PriceBand {
        self.price_bands
            .get(container_type.label())
            .copied()
            .unwrap_or(PriceBand::UNPRICED)
    }

    /// Transit range for a route; routes touching the short-haul hub are
    /// faster.
    #[must_use]
    pub fn transit_range(&self, criteria: &SearchCriteria) -> Bounds {
        if criteria.touches(&self.short_haul_hub) {
            self.short_haul_transit
        } else {
            self.default_transit
        }
    }
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            price_bands: Self::default_price_bands(),
            price_step: Self::default_price_step(),
            short_haul_hub: Self::default_short_haul_hub(),
            short_haul_transit: Self::default_short_haul_transit(),
            default_transit: Self::default_transit(),
            available_space: Self::default_available_space(),
            min_departure_spacing_days: Self::default_spacing(),
            min_window_offset_days: Self::default_window_offset(),
            max_date_attempts: Self::default_max_attempts(),
            terminals: TerminalCatalog::default(),
        }
    }
}
