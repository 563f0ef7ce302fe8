//! Search criteria submitted from the intake form.
use std::fmt;

use chrono::{Days, NaiveDate};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::format::{format_date, iso_date};

/// How far ahead of the cargo ready date the shipper is willing to wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CargoPeriod {
    #[serde(rename = "1 week")]
    OneWeek,
    #[serde(rename = "2 weeks")]
    TwoWeeks,
    #[serde(rename = "1 month")]
    OneMonth,
}

impl CargoPeriod {
    pub const ALL: [Self; 3] = [Self::OneWeek, Self::TwoWeeks, Self::OneMonth];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::OneWeek => "1 week",
            Self::TwoWeeks => "2 weeks",
            Self::OneMonth => "1 month",
        }
    }

    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|period| period.label() == label)
    }

    /// Length of the departure window in days.
    #[must_use]
    pub const fn days(self) -> u32 {
        match self {
            Self::OneWeek => 7,
            Self::TwoWeeks => 14,
            Self::OneMonth => 30,
        }
    }

    /// Number of sailings offered for this period. A one-week window offers
    /// one or two sailings with equal probability.
    pub fn batch_size(self, rng: &mut impl Rng) -> usize {
        match self {
            Self::OneWeek => {
                if rng.gen_bool(0.5) {
                    1
                } else {
                    2
                }
            }
            Self::TwoWeeks => 3,
            Self::OneMonth => 6,
        }
    }
}

impl fmt::Display for CargoPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Container size class. Labels outside the known set are carried through
/// unchanged so pricing can treat them as unpriced.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ContainerType {
    Twenty,
    Forty,
    Other(String),
}

impl ContainerType {
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Twenty => "20ft",
            Self::Forty => "40ft",
            Self::Other(label) => label,
        }
    }
}

impl From<String> for ContainerType {
    fn from(label: String) -> Self {
        match label.as_str() {
            "20ft" => Self::Twenty,
            "40ft" => Self::Forty,
            _ => Self::Other(label),
        }
    }
}

impl From<&str> for ContainerType {
    fn from(label: &str) -> Self {
        Self::from(label.to_string())
    }
}

impl From<ContainerType> for String {
    fn from(value: ContainerType) -> Self {
        match value {
            ContainerType::Other(label) => label,
            known => known.label().to_string(),
        }
    }
}

impl fmt::Display for ContainerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Everything the schedule page needs to pick sailings. Immutable once
/// submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchCriteria {
    pub departure_terminal: String,
    pub arrival_terminal: String,
    pub cargo_ready_date: NaiveDate,
    pub cargo_period: CargoPeriod,
    pub container_number: u32,
    pub container_type: ContainerType,
}

/// Canonical, primitive-only form of [`SearchCriteria`] used to decide
/// whether a cached schedule still applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CriteriaFingerprint {
    pub departure_terminal: String,
    pub arrival_terminal: String,
    pub cargo_ready_date: String,
    pub cargo_period: String,
    pub container_number: u32,
    pub container_type: String,
}

impl SearchCriteria {
    #[must_use]
    pub fn fingerprint(&self) -> CriteriaFingerprint {
        CriteriaFingerprint {
            departure_terminal: self.departure_terminal.clone(),
            arrival_terminal: self.arrival_terminal.clone(),
            cargo_ready_date: iso_date(self.cargo_ready_date),
            cargo_period: self.cargo_period.label().to_string(),
            container_number: self.container_number,
            container_type: self.container_type.label().to_string(),
        }
    }

    /// Heading shown above the schedule table.
    #[must_use]
    pub fn caption(&self) -> String {
        format!(
            "The schedules from {} to {} after {} for {} are as follows:",
            self.departure_terminal,
            self.arrival_terminal,
            format_date(self.cargo_ready_date),
            self.cargo_period
        )
    }

    /// First calendar day a sailing may depart (the day after cargo is ready).
    #[must_use]
    pub fn window_start(&self) -> NaiveDate {
        add_days(self.cargo_ready_date, 1)
    }

    /// Whether either end of the route is the given terminal.
    #[must_use]
    pub fn touches(&self, terminal: &str) -> bool {
        self.departure_terminal == terminal || self.arrival_terminal == terminal
    }
}

/// Add whole days to a date, saturating at the end of the calendar.
#[must_use]
pub fn add_days(date: NaiveDate, days: u32) -> NaiveDate {
    date.checked_add_days(Days::new(u64::from(days)))
        .unwrap_or(NaiveDate::MAX)
}
