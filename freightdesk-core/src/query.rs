//! Query-string codec for page handoffs.
//!
//! Criteria travel from the intake page to the schedule page, and a
//! selection travels from the schedule page to the booking page, as
//! `application/x-www-form-urlencoded` pairs. Dates use ISO `YYYY-MM-DD`.

use std::collections::HashMap;

use thiserror::Error;
use url::form_urlencoded;

use crate::booking::BookingSelection;
use crate::constants::{
    QK_ARRIVAL_TERMINAL, QK_CARGO_PERIOD, QK_CARGO_READY_DATE, QK_CONTAINER_NUMBER,
    QK_CONTAINER_TYPE, QK_DEPARTURE_DATE, QK_DEPARTURE_TERMINAL, QK_ETA, QK_ID, QK_PRICE,
    QK_TRANSIT_TIME,
};
use crate::criteria::{CargoPeriod, ContainerType, SearchCriteria};
use crate::format::{iso_date, parse_iso_date};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("query parameter `{key}` is missing")]
    Missing { key: &'static str },
    #[error("query parameter `{key}` has an invalid value `{value}`")]
    Invalid { key: &'static str, value: String },
}

#[must_use]
pub fn encode_criteria(criteria: &SearchCriteria) -> String {
    form_urlencoded::Serializer::new(String::new())
        .append_pair(QK_DEPARTURE_TERMINAL, &criteria.departure_terminal)
        .append_pair(QK_ARRIVAL_TERMINAL, &criteria.arrival_terminal)
        .append_pair(QK_CARGO_READY_DATE, &iso_date(criteria.cargo_ready_date))
        .append_pair(QK_CARGO_PERIOD, criteria.cargo_period.label())
        .append_pair(QK_CONTAINER_NUMBER, &criteria.container_number.to_string())
        .append_pair(QK_CONTAINER_TYPE, criteria.container_type.label())
        .finish()
}

/// Decode criteria from a query string; a leading `?` is accepted and
/// unknown keys are ignored.
///
/// # Errors
///
/// Returns [`QueryError`] naming the first missing or malformed parameter.
pub fn decode_criteria(query: &str) -> Result<SearchCriteria, QueryError> {
    let pairs = Pairs::parse(query);
    Ok(SearchCriteria {
        departure_terminal: pairs.text(QK_DEPARTURE_TERMINAL)?,
        arrival_terminal: pairs.text(QK_ARRIVAL_TERMINAL)?,
        cargo_ready_date: pairs.parsed(QK_CARGO_READY_DATE, parse_iso_date)?,
        cargo_period: pairs.parsed(QK_CARGO_PERIOD, CargoPeriod::from_label)?,
        container_number: pairs.parsed(QK_CONTAINER_NUMBER, |raw| raw.parse().ok())?,
        container_type: ContainerType::from(pairs.text(QK_CONTAINER_TYPE)?),
    })
}

#[must_use]
pub fn encode_selection(selection: &BookingSelection) -> String {
    form_urlencoded::Serializer::new(String::new())
        .append_pair(QK_ID, &selection.id.to_string())
        .append_pair(QK_DEPARTURE_DATE, &iso_date(selection.departure_date))
        .append_pair(QK_TRANSIT_TIME, &selection.transit_time_days.to_string())
        .append_pair(QK_ETA, &iso_date(selection.eta))
        .append_pair(QK_PRICE, &selection.price.to_string())
        .append_pair(QK_DEPARTURE_TERMINAL, &selection.departure_terminal)
        .append_pair(QK_ARRIVAL_TERMINAL, &selection.arrival_terminal)
        .append_pair(QK_CONTAINER_NUMBER, &selection.container_number.to_string())
        .append_pair(QK_CONTAINER_TYPE, selection.container_type.label())
        .finish()
}

/// # Errors
///
/// Returns [`QueryError`] naming the first missing or malformed parameter.
pub fn decode_selection(query: &str) -> Result<BookingSelection, QueryError> {
    let pairs = Pairs::parse(query);
    Ok(BookingSelection {
        id: pairs.parsed(QK_ID, |raw| raw.parse().ok())?,
        departure_terminal: pairs.text(QK_DEPARTURE_TERMINAL)?,
        arrival_terminal: pairs.text(QK_ARRIVAL_TERMINAL)?,
        container_number: pairs.parsed(QK_CONTAINER_NUMBER, |raw| raw.parse().ok())?,
        container_type: ContainerType::from(pairs.text(QK_CONTAINER_TYPE)?),
        departure_date: pairs.parsed(QK_DEPARTURE_DATE, parse_iso_date)?,
        transit_time_days: pairs.parsed(QK_TRANSIT_TIME, |raw| raw.parse().ok())?,
        eta: pairs.parsed(QK_ETA, parse_iso_date)?,
        price: pairs.parsed(QK_PRICE, |raw| raw.parse().ok())?,
    })
}

/// Decoded pairs; the first occurrence of a key wins.
struct Pairs(HashMap<String, String>);

impl Pairs {
    fn parse(query: &str) -> Self {
        let body = query.strip_prefix('?').unwrap_or(query);
        let mut map = HashMap::new();
        for (key, value) in form_urlencoded::parse(body.as_bytes()) {
            map.entry(key.into_owned())
                .or_insert_with(|| value.into_owned());
        }
        Self(map)
    }

    fn text(&self, key: &'static str) -> Result<String, QueryError> {
        self.0
            .get(key)
            .cloned()
            .ok_or(QueryError::Missing { key })
    }

    fn parsed<T>(
        &self,
        key: &'static str,
        parse: impl FnOnce(&str) -> Option<T>,
    ) -> Result<T, QueryError> {
        let raw = self.0.get(key).ok_or(QueryError::Missing { key })?;
        parse(raw.trim()).ok_or_else(|| QueryError::Invalid {
            key,
            value: raw.clone(),
        })
    }
}
