//! Booking handoff and the company contact form.
use chrono::NaiveDate;
use thiserror::Error;

use crate::constants::CAPACITY_NOTICE;
use crate::criteria::{ContainerType, SearchCriteria};
use crate::sailing::Sailing;
use crate::validation::{
    COMPANY_CODE_RE, EMAIL_RE, FieldError, FormErrors, FormField, FormValues, Rule,
    validate_form, validate_value,
};

/// A chosen sailing plus the route and container fields it was searched
/// with. Lives only in the navigation to the booking page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingSelection {
    pub id: u32,
    pub departure_terminal: String,
    pub arrival_terminal: String,
    pub container_number: u32,
    pub container_type: ContainerType,
    pub departure_date: NaiveDate,
    pub transit_time_days: u32,
    pub eta: NaiveDate,
    pub price: i64,
}

impl BookingSelection {
    #[must_use]
    pub fn new(sailing: &Sailing, criteria: &SearchCriteria) -> Self {
        Self {
            id: sailing.id,
            departure_terminal: criteria.departure_terminal.clone(),
            arrival_terminal: criteria.arrival_terminal.clone(),
            container_number: criteria.container_number,
            container_type: criteria.container_type.clone(),
            departure_date: sailing.departure_date,
            transit_time_days: sailing.transit_time_days,
            eta: sailing.eta,
            price: sailing.total_price,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("{CAPACITY_NOTICE}")]
    InsufficientSpace { available: u32, requested: u32 },
    #[error("sailing {0} is not part of the current schedule")]
    UnknownSailing(u32),
}

/// Pick a sailing for booking. Sailings without room for the requested
/// containers are refused and nothing is handed off.
///
/// # Errors
///
/// Returns [`BookingError::InsufficientSpace`] when the sailing is too full
/// and [`BookingError::UnknownSailing`] when `id` is not in the batch.
pub fn select_sailing(
    sailings: &[Sailing],
    id: u32,
    criteria: &SearchCriteria,
) -> Result<BookingSelection, BookingError> {
    let sailing = sailings
        .iter()
        .find(|s| s.id == id)
        .ok_or(BookingError::UnknownSailing(id))?;
    if !sailing.has_capacity_for(criteria.container_number) {
        return Err(BookingError::InsufficientSpace {
            available: sailing.available_space,
            requested: criteria.container_number,
        });
    }
    Ok(BookingSelection::new(sailing, criteria))
}

/// Company contact fields on the booking page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingField {
    CompanyName,
    CompanyCode,
    Email,
}

impl FormField for BookingField {
    const ALL: &'static [Self] = &[Self::CompanyName, Self::CompanyCode, Self::Email];

    fn id(self) -> &'static str {
        match self {
            Self::CompanyName => "company-name",
            Self::CompanyCode => "company-code",
            Self::Email => "email",
        }
    }

    fn rule(self) -> Rule {
        match self {
            Self::CompanyName => Rule::Required,
            Self::CompanyCode => Rule::Pattern(&COMPANY_CODE_RE),
            Self::Email => Rule::Pattern(&EMAIL_RE),
        }
    }

    fn message(self) -> &'static str {
        match self {
            Self::CompanyName => "Company name is required.",
            Self::CompanyCode => "Please enter a valid company code.",
            Self::Email => "Please enter a valid email address.",
        }
    }

    fn normalize(self, raw: &str) -> &str {
        raw.trim()
    }
}

/// Current contact field values.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BookingForm {
    pub company_name: String,
    pub company_code: String,
    pub email: String,
}

impl FormValues<BookingField> for BookingForm {
    fn value(&self, field: BookingField) -> &str {
        match field {
            BookingField::CompanyName => &self.company_name,
            BookingField::CompanyCode => &self.company_code,
            BookingField::Email => &self.email,
        }
    }
}

impl BookingForm {
    pub fn set(&mut self, field: BookingField, value: impl Into<String>) {
        let slot = match field {
            BookingField::CompanyName => &mut self.company_name,
            BookingField::CompanyCode => &mut self.company_code,
            BookingField::Email => &mut self.email,
        };
        *slot = value.into();
    }

    /// Check one field, as on blur.
    ///
    /// # Errors
    ///
    /// Returns the field's message when its value is rejected.
    pub fn validate_field(&self, field: BookingField) -> Result<(), FieldError> {
        validate_value(field, self.value(field))
    }

    /// Check every field, as on submit.
    #[must_use]
    pub fn validate(&self) -> FormErrors {
        validate_form::<BookingField, _>(self)
    }
}
