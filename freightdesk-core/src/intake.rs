//! Route and cargo intake form.
use chrono::NaiveDate;

use crate::config::TerminalCatalog;
use crate::constants::{
    CONTAINER_TYPE_PLACEHOLDER, MAX_CONTAINERS, MIN_CONTAINERS, PERIOD_PLACEHOLDER,
    TERMINAL_PLACEHOLDER,
};
use crate::criteria::{CargoPeriod, ContainerType, SearchCriteria, add_days};
use crate::format::parse_iso_date;
use crate::query::encode_criteria;
use crate::validation::{
    FieldError, FormErrors, FormField, FormValues, Rule, validate_form, validate_value,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntakeField {
    DepartureTerminal,
    ArrivalTerminal,
    CargoReadyDate,
    CargoPeriod,
    ContainerNumber,
    ContainerType,
}

impl FormField for IntakeField {
    const ALL: &'static [Self] = &[
        Self::DepartureTerminal,
        Self::ArrivalTerminal,
        Self::CargoReadyDate,
        Self::CargoPeriod,
        Self::ContainerNumber,
        Self::ContainerType,
    ];

    fn id(self) -> &'static str {
        match self {
            Self::DepartureTerminal => "departure-terminal",
            Self::ArrivalTerminal => "arrival-terminal",
            Self::CargoReadyDate => "cargo-ready-date",
            Self::CargoPeriod => "cargo-period",
            Self::ContainerNumber => "container-num",
            Self::ContainerType => "container-type",
        }
    }

    fn rule(self) -> Rule {
        match self {
            Self::DepartureTerminal | Self::ArrivalTerminal => Rule::Selected {
                placeholder: TERMINAL_PLACEHOLDER,
            },
            Self::CargoReadyDate => Rule::Required,
            Self::CargoPeriod => Rule::Selected {
                placeholder: PERIOD_PLACEHOLDER,
            },
            Self::ContainerNumber => Rule::IntegerRange {
                min: MIN_CONTAINERS,
                max: MAX_CONTAINERS,
            },
            Self::ContainerType => Rule::Selected {
                placeholder: CONTAINER_TYPE_PLACEHOLDER,
            },
        }
    }

    fn message(self) -> &'static str {
        match self {
            Self::DepartureTerminal => "Please select a departure terminal.",
            Self::ArrivalTerminal => "Please select an arrival terminal.",
            Self::CargoReadyDate => "Please fill in the cargo ready date.",
            Self::CargoPeriod => "Please select a period.",
            Self::ContainerNumber => {
                "Please enter a valid number of containers between 1 and 40."
            }
            Self::ContainerType => "Please select a container type.",
        }
    }
}

/// Intake form state: dropdown options plus the raw field values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntakeForm {
    pub departure_options: Vec<String>,
    pub arrival_options: Vec<String>,
    pub period_options: Vec<String>,
    pub container_type_options: Vec<String>,
    pub departure_terminal: String,
    pub arrival_terminal: String,
    pub cargo_ready_date: String,
    pub cargo_period: String,
    pub container_number: String,
    pub container_type: String,
}

impl FormValues<IntakeField> for IntakeForm {
    fn value(&self, field: IntakeField) -> &str {
        match field {
            IntakeField::DepartureTerminal => &self.departure_terminal,
            IntakeField::ArrivalTerminal => &self.arrival_terminal,
            IntakeField::CargoReadyDate => &self.cargo_ready_date,
            IntakeField::CargoPeriod => &self.cargo_period,
            IntakeField::ContainerNumber => &self.container_number,
            IntakeField::ContainerType => &self.container_type,
        }
    }
}

impl IntakeForm {
    /// Blank form with every dropdown on its placeholder.
    #[must_use]
    pub fn new(catalog: &TerminalCatalog) -> Self {
        Self {
            departure_options: catalog.sorted_departures(),
            arrival_options: catalog.sorted_arrivals(),
            period_options: CargoPeriod::ALL
                .iter()
                .map(|p| p.label().to_string())
                .collect(),
            container_type_options: catalog.container_types.clone(),
            departure_terminal: String::new(),
            arrival_terminal: String::new(),
            cargo_ready_date: String::new(),
            cargo_period: String::new(),
            container_number: String::new(),
            container_type: String::new(),
        }
    }

    pub fn set(&mut self, field: IntakeField, value: impl Into<String>) {
        let slot = match field {
            IntakeField::DepartureTerminal => &mut self.departure_terminal,
            IntakeField::ArrivalTerminal => &mut self.arrival_terminal,
            IntakeField::CargoReadyDate => &mut self.cargo_ready_date,
            IntakeField::CargoPeriod => &mut self.cargo_period,
            IntakeField::ContainerNumber => &mut self.container_number,
            IntakeField::ContainerType => &mut self.container_type,
        };
        *slot = value.into();
    }

    /// Exchange the departure and arrival dropdowns, options and selection
    /// alike.
    pub fn swap_terminals(&mut self) {
        std::mem::swap(&mut self.departure_options, &mut self.arrival_options);
        std::mem::swap(&mut self.departure_terminal, &mut self.arrival_terminal);
    }

    /// Check one field, as on blur.
    ///
    /// # Errors
    ///
    /// Returns the field's message when its value is rejected.
    pub fn validate_field(&self, field: IntakeField) -> Result<(), FieldError> {
        validate_value(field, self.value(field))
    }

    /// Check every field, as on submit.
    #[must_use]
    pub fn validate(&self) -> FormErrors {
        validate_form::<IntakeField, _>(self)
    }

    /// Validate and convert into criteria.
    ///
    /// # Errors
    ///
    /// Returns every failing field; values that pass the field rules but do
    /// not parse are reported against their field.
    pub fn submit(&self) -> Result<SearchCriteria, FormErrors> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(errors);
        }
        let reject = |field: IntakeField| {
            FormErrors::from(FieldError {
                field: field.id(),
                message: field.message(),
            })
        };
        let cargo_ready_date = parse_iso_date(&self.cargo_ready_date)
            .ok_or_else(|| reject(IntakeField::CargoReadyDate))?;
        let cargo_period = CargoPeriod::from_label(&self.cargo_period)
            .ok_or_else(|| reject(IntakeField::CargoPeriod))?;
        let container_number = self
            .container_number
            .trim()
            .parse::<u32>()
            .map_err(|_| reject(IntakeField::ContainerNumber))?;
        Ok(SearchCriteria {
            departure_terminal: self.departure_terminal.clone(),
            arrival_terminal: self.arrival_terminal.clone(),
            cargo_ready_date,
            cargo_period,
            container_number,
            container_type: ContainerType::from(self.container_type.as_str()),
        })
    }

    /// Validate and encode the query string handed to the schedule page.
    ///
    /// # Errors
    ///
    /// Returns every failing field.
    pub fn submit_query(&self) -> Result<String, FormErrors> {
        self.submit().map(|criteria| encode_criteria(&criteria))
    }
}

/// Earliest selectable cargo ready date: tomorrow.
#[must_use]
pub fn earliest_ready_date(today: NaiveDate) -> NaiveDate {
    add_days(today, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> IntakeForm {
        let mut form = IntakeForm::new(&TerminalCatalog::default());
        form.set(IntakeField::DepartureTerminal, "Chongqing");
        form.set(IntakeField::ArrivalTerminal, "Vorsino");
        form.set(IntakeField::CargoReadyDate, "2024-01-01");
        form.set(IntakeField::CargoPeriod, "1 week");
        form.set(IntakeField::ContainerNumber, "5");
        form.set(IntakeField::ContainerType, "40ft");
        form
    }

    #[test]
    fn new_form_lists_sorted_options() {
        let form = IntakeForm::new(&TerminalCatalog::default());
        assert_eq!(form.departure_options[0], "Changsha");
        assert_eq!(form.arrival_options[0], "Belgrade");
        assert_eq!(form.period_options, vec!["1 week", "2 weeks", "1 month"]);
        assert_eq!(form.container_type_options, vec!["20ft", "40ft"]);
    }

    #[test]
    fn blank_form_reports_all_six_fields_in_order() {
        let form = IntakeForm::new(&TerminalCatalog::default());
        let errors = form.validate();
        let ids: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(
            ids,
            vec![
                "departure-terminal",
                "arrival-terminal",
                "cargo-ready-date",
                "cargo-period",
                "container-num",
                "container-type"
            ]
        );
        assert!(errors.joined().contains('\n'));
    }

    #[test]
    fn placeholders_count_as_unselected() {
        let mut form = filled();
        form.set(IntakeField::DepartureTerminal, "Select a terminal");
        form.set(IntakeField::CargoPeriod, "Select a period");
        let errors = form.validate();
        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors.message_for("departure-terminal"),
            Some("Please select a departure terminal.")
        );
    }

    #[test]
    fn container_number_bounds() {
        let mut form = filled();
        for bad in ["0", "41", "abc", ""] {
            form.set(IntakeField::ContainerNumber, bad);
            assert!(form.validate_field(IntakeField::ContainerNumber).is_err());
        }
        form.set(IntakeField::ContainerNumber, "40");
        assert!(form.validate_field(IntakeField::ContainerNumber).is_ok());
    }

    #[test]
    fn swap_exchanges_options_and_selection() {
        let mut form = filled();
        let departures = form.departure_options.clone();
        form.swap_terminals();
        assert_eq!(form.departure_terminal, "Vorsino");
        assert_eq!(form.arrival_terminal, "Chongqing");
        assert_eq!(form.arrival_options, departures);
        form.swap_terminals();
        assert_eq!(form, filled());
    }

    #[test]
    fn submit_builds_criteria_and_query() {
        let criteria = filled().submit().unwrap();
        assert_eq!(criteria.cargo_period, CargoPeriod::OneWeek);
        assert_eq!(criteria.container_number, 5);
        assert_eq!(criteria.container_type, ContainerType::Forty);
        let query = filled().submit_query().unwrap();
        assert!(query.contains("cargoPeriod=1+week"));
        assert!(query.contains("departureTerminal=Chongqing"));
    }

    #[test]
    fn unparseable_values_are_reported_on_submit() {
        let mut form = filled();
        form.set(IntakeField::CargoReadyDate, "01/01/2024");
        let errors = form.submit().unwrap_err();
        assert_eq!(
            errors.message_for("cargo-ready-date"),
            Some("Please fill in the cargo ready date.")
        );

        let mut form = filled();
        form.set(IntakeField::CargoPeriod, "fortnight");
        assert!(form.submit().unwrap_err().message_for("cargo-period").is_some());
    }

    #[test]
    fn earliest_date_is_tomorrow() {
        let today = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        assert_eq!(
            earliest_ready_date(today),
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
        );
    }
}
