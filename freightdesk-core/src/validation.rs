//! Stateless field validation shared by the intake and booking forms.
//!
//! A field's verdict depends only on its current value, so validation can be
//! re-run on blur and again on submit without tracking anything beyond the
//! latest message per field.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::constants::{COMPANY_CODE_PATTERN, EMAIL_PATTERN};

pub(crate) static COMPANY_CODE_RE: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(COMPANY_CODE_PATTERN).ok());
pub(crate) static EMAIL_RE: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(EMAIL_PATTERN).ok());

/// A single per-field rule.
#[derive(Debug, Clone, Copy)]
pub enum Rule {
    /// Non-empty after normalization
    Required,
    /// Non-empty and not the dropdown placeholder
    Selected { placeholder: &'static str },
    /// Whole-string regex match
    Pattern(&'static Lazy<Option<Regex>>),
    /// Integer within `min..=max`
    IntegerRange { min: i64, max: i64 },
}

impl Rule {
    #[must_use]
    pub fn accepts(self, value: &str) -> bool {
        match self {
            Self::Required => !value.is_empty(),
            Self::Selected { placeholder } => !value.is_empty() && value != placeholder,
            Self::Pattern(re) => Lazy::force(re)
                .as_ref()
                .is_some_and(|re| re.is_match(value)),
            Self::IntegerRange { min, max } => value
                .trim()
                .parse::<i64>()
                .is_ok_and(|n| (min..=max).contains(&n)),
        }
    }
}

/// Inline error for one field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FieldError {
    /// DOM id of the offending field
    pub field: &'static str,
    pub message: &'static str,
}

/// A form field with a fixed rule and message.
pub trait FormField: Copy + 'static {
    const ALL: &'static [Self];

    /// DOM id of the input; error slots use `{id}-error`.
    fn id(self) -> &'static str;
    fn rule(self) -> Rule;
    fn message(self) -> &'static str;

    /// Normalize raw input before checking. Defaults to the raw value.
    fn normalize(self, raw: &str) -> &str {
        raw
    }
}

/// Read access to the current value of every field of a form.
pub trait FormValues<F>
where
    F: FormField,
{
    fn value(&self, field: F) -> &str;
}

/// Validate one raw value against a field's rule.
///
/// # Errors
///
/// Returns the field's message when the rule rejects the value.
pub fn validate_value<F>(field: F, raw: &str) -> Result<(), FieldError>
where
    F: FormField,
{
    if field.rule().accepts(field.normalize(raw)) {
        Ok(())
    } else {
        Err(FieldError {
            field: field.id(),
            message: field.message(),
        })
    }
}

/// Validate every field; one failure never stops the others being checked.
#[must_use]
pub fn validate_form<F, V>(values: &V) -> FormErrors
where
    F: FormField,
    V: FormValues<F>,
{
    let errors = F::ALL
        .iter()
        .filter_map(|&field| validate_value(field, values.value(field)).err())
        .collect();
    FormErrors { errors }
}

/// Errors from a full-form pass, in field order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormErrors {
    errors: Vec<FieldError>,
}

impl FormErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Message for a field id, if that field failed.
    #[must_use]
    pub fn message_for(&self, field_id: &str) -> Option<&'static str> {
        self.errors
            .iter()
            .find(|err| err.field == field_id)
            .map(|err| err.message)
    }

    /// Replace the entry for `field_id` with the outcome of a single-field
    /// check.
    pub fn record(&mut self, field_id: &'static str, outcome: Result<(), FieldError>) {
        self.errors.retain(|err| err.field != field_id);
        if let Err(err) = outcome {
            self.errors.push(err);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// All messages joined by newlines, for a single blocking notice.
    #[must_use]
    pub fn joined(&self) -> String {
        self.errors
            .iter()
            .map(|err| err.message)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl From<FieldError> for FormErrors {
    fn from(err: FieldError) -> Self {
        Self { errors: vec![err] }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selected_rejects_placeholder_and_empty() {
        let rule = Rule::Selected {
            placeholder: "Select a terminal",
        };
        assert!(!rule.accepts(""));
        assert!(!rule.accepts("Select a terminal"));
        assert!(rule.accepts("Wuhan"));
    }

    #[test]
    fn integer_range_is_inclusive() {
        let rule = Rule::IntegerRange { min: 1, max: 40 };
        assert!(rule.accepts("1"));
        assert!(rule.accepts("40"));
        assert!(rule.accepts(" 12 "));
        assert!(!rule.accepts("0"));
        assert!(!rule.accepts("41"));
        assert!(!rule.accepts("ten"));
        assert!(!rule.accepts(""));
    }

    #[test]
    fn patterns_match_whole_value() {
        let code = Rule::Pattern(&COMPANY_CODE_RE);
        assert!(code.accepts("AB1234"));
        assert!(!code.accepts("ab1234"));
        assert!(!code.accepts("AB12345"));
        assert!(!code.accepts("XAB1234"));

        let email = Rule::Pattern(&EMAIL_RE);
        assert!(email.accepts("ops@cargo-line.eu"));
        assert!(email.accepts("first.last@mail.com"));
        assert!(!email.accepts("ops@cargo"));
        assert!(!email.accepts("ops@cargo.info"));
        assert!(!email.accepts("ops cargo@line.eu"));
    }

    #[test]
    fn form_errors_record_replaces_previous_entry() {
        let mut errors = FormErrors::default();
        let failure = FieldError {
            field: "email",
            message: "bad",
        };
        errors.record("email", Err(failure.clone()));
        errors.record("email", Err(failure));
        assert_eq!(errors.len(), 1);
        errors.record("email", Ok(()));
        assert!(errors.is_empty());
    }

    #[test]
    fn joined_uses_newlines() {
        let mut errors = FormErrors::from(FieldError {
            field: "a",
            message: "first",
        });
        errors.record(
            "b",
            Err(FieldError {
                field: "b",
                message: "second",
            }),
        );
        assert_eq!(errors.joined(), "first\nsecond");
        assert_eq!(errors.message_for("b"), Some("second"));
        assert_eq!(errors.message_for("c"), None);
    }
}
