use super::models::{GuestCount, Reservation, ReservationForm, TimeSlot};
use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is valid")
});

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid {field}: {reason}")]
pub struct ValidationError {
    pub field: &'static str,
    pub reason: String,
}

impl ValidationError {
    fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ValidationError>;

pub fn validate_non_empty_string(field: &'static str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::new(field, "value is required"));
    }
    Ok(trimmed.to_string())
}

pub fn validate_email(field: &'static str, value: &str) -> Result<String> {
    let email = validate_non_empty_string(field, value)?;
    if !EMAIL_PATTERN.is_match(&email) {
        return Err(ValidationError::new(field, "not a valid email address"));
    }
    Ok(email)
}

/// Parses `YYYY-MM-DD` and rejects dates before `today`.
pub fn validate_date(field: &'static str, value: &str, today: NaiveDate) -> Result<NaiveDate> {
    let raw = validate_non_empty_string(field, value)?;
    let date = NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
        .map_err(|_| ValidationError::new(field, "expected a date formatted YYYY-MM-DD"))?;
    if date < today {
        return Err(ValidationError::new(field, "date is in the past"));
    }
    Ok(date)
}

impl ReservationForm {
    /// Checks every field and produces the typed reservation.
    pub fn validate(&self, today: NaiveDate) -> Result<Reservation> {
        let name = validate_non_empty_string("name", &self.name)?;
        let email = validate_email("email", &self.email)?;
        let phone = validate_non_empty_string("phone", &self.phone)?;
        let date = validate_date("date", &self.date, today)?;

        let time = TimeSlot::parse(&validate_non_empty_string("time", &self.time)?)
            .ok_or_else(|| {
                ValidationError::new("time", "choose a half-hour slot between 10:00 and 22:00")
            })?;
        let guests = GuestCount::parse(&validate_non_empty_string("guests", &self.guests)?)
            .ok_or_else(|| ValidationError::new("guests", "choose between 1 and 8, or 8+"))?;

        let special_requests = Some(self.special_requests.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        Ok(Reservation {
            name,
            email,
            phone,
            date,
            time,
            guests,
            special_requests,
        })
    }
}
