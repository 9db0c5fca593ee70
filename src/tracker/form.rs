//! Add-run input form
//!
//! Free-text fields collected by the log-run dialog. Values stay text
//! until submission; parsing is the only fallible step.

use chrono::{Local, NaiveDate};
use thiserror::Error;

/// Which form field the cursor is on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Distance,
    Duration,
    Date,
}

impl FormField {
    /// Cycle to the next field
    pub fn next(self) -> Self {
        match self {
            FormField::Distance => FormField::Duration,
            FormField::Duration => FormField::Date,
            FormField::Date => FormField::Distance,
        }
    }

    /// Cycle to the previous field
    pub fn prev(self) -> Self {
        match self {
            FormField::Distance => FormField::Date,
            FormField::Duration => FormField::Distance,
            FormField::Date => FormField::Duration,
        }
    }

    /// Label shown next to the input
    pub fn label(self) -> &'static str {
        match self {
            FormField::Distance => "Distance (km)",
            FormField::Duration => "Duration (min)",
            FormField::Date => "Date",
        }
    }
}

/// Why a submitted form was rejected
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("distance and duration are required")]
    MissingField,
    #[error("distance and duration must be numbers")]
    NotANumber,
    #[error("distance and duration must be positive")]
    NotPositive,
    #[error("date must be YYYY-MM-DD")]
    BadDate,
}

/// Validated form values, ready to become a run record
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParsedRun {
    pub distance_km: f64,
    pub duration_min: f64,
    pub date: NaiveDate,
}

/// Pending add-run input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunForm {
    pub distance: String,
    pub duration: String,
    pub date: String,
    /// Field currently being edited
    pub field: FormField,
}

impl RunForm {
    /// Empty form with the date prefilled to today
    pub fn new() -> Self {
        Self {
            distance: String::new(),
            duration: String::new(),
            date: Local::now().date_naive().format("%Y-%m-%d").to_string(),
            field: FormField::Distance,
        }
    }

    /// Append a character to the active field
    pub fn push_char(&mut self, c: char) {
        let allowed = match self.field {
            FormField::Distance | FormField::Duration => c.is_ascii_digit() || c == '.',
            FormField::Date => c.is_ascii_digit() || c == '-',
        };
        if allowed {
            self.active_field_mut().push(c);
        }
    }

    /// Delete the last character of the active field
    pub fn backspace(&mut self) {
        self.active_field_mut().pop();
    }

    /// Move the cursor to the next field
    pub fn next_field(&mut self) {
        self.field = self.field.next();
    }

    /// Move the cursor to the previous field
    pub fn prev_field(&mut self) {
        self.field = self.field.prev();
    }

    /// Reset to a fresh form (today's date, cursor on distance)
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Text of the field the cursor is on
    pub fn active_value(&self) -> &str {
        match self.field {
            FormField::Distance => &self.distance,
            FormField::Duration => &self.duration,
            FormField::Date => &self.date,
        }
    }

    fn active_field_mut(&mut self) -> &mut String {
        match self.field {
            FormField::Distance => &mut self.distance,
            FormField::Duration => &mut self.duration,
            FormField::Date => &mut self.date,
        }
    }

    /// Validate the form into run inputs
    ///
    /// Distance and duration must be present, numeric, finite, and
    /// positive; the date must be an ISO calendar date.
    pub fn parse(&self) -> Result<ParsedRun, FormError> {
        let distance = self.distance.trim();
        let duration = self.duration.trim();
        if distance.is_empty() || duration.is_empty() {
            return Err(FormError::MissingField);
        }

        let distance_km: f64 = distance.parse().map_err(|_| FormError::NotANumber)?;
        let duration_min: f64 = duration.parse().map_err(|_| FormError::NotANumber)?;
        if !distance_km.is_finite()
            || !duration_min.is_finite()
            || distance_km <= 0.0
            || duration_min <= 0.0
        {
            return Err(FormError::NotPositive);
        }

        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d")
            .map_err(|_| FormError::BadDate)?;

        Ok(ParsedRun {
            distance_km,
            duration_min,
            date,
        })
    }
}

impl Default for RunForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(distance: &str, duration: &str, date: &str) -> RunForm {
        RunForm {
            distance: distance.to_string(),
            duration: duration.to_string(),
            date: date.to_string(),
            field: FormField::Distance,
        }
    }

    #[test]
    fn test_parse_ok() {
        let parsed = filled("5.0", "30", "2026-08-07").parse().unwrap();
        assert_eq!(parsed.distance_km, 5.0);
        assert_eq!(parsed.duration_min, 30.0);
        assert_eq!(parsed.date, NaiveDate::from_ymd_opt(2026, 8, 7).unwrap());
    }

    #[test]
    fn test_parse_missing() {
        assert_eq!(
            filled("5.0", "", "2026-08-07").parse(),
            Err(FormError::MissingField)
        );
        assert_eq!(
            filled("", "30", "2026-08-07").parse(),
            Err(FormError::MissingField)
        );
    }

    #[test]
    fn test_parse_rejects_nonpositive() {
        assert_eq!(
            filled("0", "30", "2026-08-07").parse(),
            Err(FormError::NotPositive)
        );
    }

    #[test]
    fn test_parse_bad_date() {
        assert_eq!(
            filled("5.0", "30", "last tuesday").parse(),
            Err(FormError::BadDate)
        );
    }

    #[test]
    fn test_field_editing() {
        let mut form = RunForm::new();
        form.push_char('5');
        form.push_char('x'); // numeric fields reject letters
        form.push_char('.');
        form.push_char('2');
        assert_eq!(form.distance, "5.2");

        form.next_field();
        assert_eq!(form.field, FormField::Duration);
        form.push_char('3');
        form.backspace();
        assert_eq!(form.duration, "");
    }

    #[test]
    fn test_clear_resets_fields() {
        let mut form = RunForm::new();
        form.push_char('9');
        form.next_field();
        form.clear();
        assert_eq!(form.distance, "");
        assert_eq!(form.field, FormField::Distance);
        assert!(!form.date.is_empty()); // date comes back prefilled
    }
}
