//! Presentation records for the schedule and booking pages.
//!
//! Everything here is display-surface agnostic: pages hand the records to
//! whatever [`ViewSink`] they were given.

use crate::booking::BookingSelection;
use crate::constants::NOT_ENOUGH_SPACE_SUFFIX;
use crate::criteria::SearchCriteria;
use crate::format::{format_date, format_price};
use crate::numbers::usize_to_u32;
use crate::sailing::Sailing;

/// One formatted table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleRow {
    pub position: u32,
    pub sailing_id: u32,
    pub departure: String,
    pub transit_days: String,
    pub eta: String,
    pub available_space: String,
    pub price: String,
    /// False when the sailing cannot take the requested containers
    pub bookable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScheduleView {
    pub caption: String,
    pub rows: Vec<ScheduleRow>,
}

/// Receives rendered views and blocking notices.
pub trait ViewSink {
    fn show_schedule(&mut self, view: ScheduleView);
    fn show_notice(&mut self, notice: &str);
}

#[must_use]
pub fn render_schedule(criteria: &SearchCriteria, sailings: &[Sailing]) -> ScheduleView {
    let rows = sailings
        .iter()
        .enumerate()
        .map(|(idx, sailing)| render_row(usize_to_u32(idx + 1), sailing, criteria.container_number))
        .collect();
    ScheduleView {
        caption: criteria.caption(),
        rows,
    }
}

fn render_row(position: u32, sailing: &Sailing, requested: u32) -> ScheduleRow {
    let bookable = sailing.has_capacity_for(requested);
    let available_space = if bookable {
        sailing.available_space.to_string()
    } else {
        format!("{}{NOT_ENOUGH_SPACE_SUFFIX}", sailing.available_space)
    };
    ScheduleRow {
        position,
        sailing_id: sailing.id,
        departure: format_date(sailing.departure_date),
        transit_days: sailing.transit_time_days.to_string(),
        eta: format_date(sailing.eta),
        available_space,
        price: format_price(sailing.total_price),
        bookable,
    }
}

/// Formatted trip details shown on the booking page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingSummary {
    pub departure_terminal: String,
    pub arrival_terminal: String,
    pub departure_date: String,
    pub transit_time: String,
    pub eta: String,
    pub container_number: String,
    pub container_type: String,
    pub price: String,
}

impl From<&BookingSelection> for BookingSummary {
    fn from(selection: &BookingSelection) -> Self {
        Self {
            departure_terminal: selection.departure_terminal.clone(),
            arrival_terminal: selection.arrival_terminal.clone(),
            departure_date: format_date(selection.departure_date),
            transit_time: selection.transit_time_days.to_string(),
            eta: format_date(selection.eta),
            container_number: selection.container_number.to_string(),
            container_type: selection.container_type.label().to_string(),
            price: format_price(selection.price),
        }
    }
}
