//! Display formatting for dates and prices.
//!
//! Dates are shown day-first (`DD/MM/YYYY`). Prices follow German-locale USD
//! formatting: `.` groups thousands, `,` separates cents and the currency
//! sign trails after a non-breaking space (`12.345,00 $`).

use chrono::NaiveDate;

const ISO_DATE: &str = "%Y-%m-%d";
const DISPLAY_DATE: &str = "%d/%m/%Y";
const NBSP: char = '\u{a0}';

/// Format a calendar date as `DD/MM/YYYY`.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DISPLAY_DATE).to_string()
}

/// Format a calendar date as ISO `YYYY-MM-DD`.
#[must_use]
pub fn iso_date(date: NaiveDate) -> String {
    date.format(ISO_DATE).to_string()
}

/// Parse an ISO `YYYY-MM-DD` date, ignoring surrounding whitespace.
#[must_use]
pub fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), ISO_DATE).ok()
}

/// Format a whole-dollar amount as a German-locale USD string.
#[must_use]
pub fn format_price(amount: i64) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    format!("{sign}{grouped},00{NBSP}$")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates_render_day_first() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 8).unwrap();
        assert_eq!(format_date(date), "08/01/2024");
        assert_eq!(iso_date(date), "2024-01-08");
    }

    #[test]
    fn iso_parser_rejects_other_layouts() {
        assert_eq!(
            parse_iso_date(" 2024-02-29 "),
            NaiveDate::from_ymd_opt(2024, 2, 29)
        );
        assert!(parse_iso_date("29/02/2024").is_none());
        assert!(parse_iso_date("").is_none());
    }

    #[test]
    fn prices_group_thousands() {
        assert_eq!(format_price(0), "0,00\u{a0}$");
        assert_eq!(format_price(950), "950,00\u{a0}$");
        assert_eq!(format_price(7_500), "7.500,00\u{a0}$");
        assert_eq!(format_price(480_000), "480.000,00\u{a0}$");
        assert_eq!(format_price(1_234_567), "1.234.567,00\u{a0}$");
        assert_eq!(format_price(-4_500), "-4.500,00\u{a0}$");
    }
}
