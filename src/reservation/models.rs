//! Reservation Form Models
//!
//! The form arrives as plain strings; validation turns it into a
//! [`Reservation`] whose slot and party size are already typed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Time Slots
// =============================================================================

const FIRST_SLOT_MINUTES: u16 = 10 * 60;
const LAST_SLOT_MINUTES: u16 = 22 * 60;
const SLOT_STEP_MINUTES: u16 = 30;

/// A bookable half-hour slot between 10:00 and 22:00 inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TimeSlot {
    minutes: u16,
}

impl TimeSlot {
    /// Every bookable slot, earliest first.
    pub fn all() -> Vec<TimeSlot> {
        (FIRST_SLOT_MINUTES..=LAST_SLOT_MINUTES)
            .step_by(SLOT_STEP_MINUTES as usize)
            .map(|minutes| TimeSlot { minutes })
            .collect()
    }

    /// Parses a 24-hour `HH:MM` value; only bookable slots are accepted.
    pub fn parse(value: &str) -> Option<TimeSlot> {
        let (hours, minutes) = value.trim().split_once(':')?;
        if minutes.len() != 2 {
            return None;
        }
        let hours: u16 = hours.parse().ok()?;
        let minutes: u16 = minutes.parse().ok()?;
        if hours > 23 || minutes > 59 {
            return None;
        }

        let total = hours * 60 + minutes;
        let bookable = (FIRST_SLOT_MINUTES..=LAST_SLOT_MINUTES).contains(&total)
            && total % SLOT_STEP_MINUTES == 0;
        bookable.then_some(TimeSlot { minutes: total })
    }

    /// Form value, e.g. `13:30`.
    pub fn value(self) -> String {
        format!("{:02}:{:02}", self.minutes / 60, self.minutes % 60)
    }

    /// 12-hour label, e.g. `1:30 PM`.
    pub fn label(self) -> String {
        let hours = self.minutes / 60;
        let suffix = if hours >= 12 { "PM" } else { "AM" };
        let display_hours = match hours % 12 {
            0 => 12,
            h => h,
        };
        format!("{}:{:02} {}", display_hours, self.minutes % 60, suffix)
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value())
    }
}

// =============================================================================
// Party Size
// =============================================================================

/// Number of guests: 1 to 8, or a larger party
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuestCount {
    Exactly(u8),
    MoreThanEight,
}

impl GuestCount {
    pub fn all() -> Vec<GuestCount> {
        (1..=8)
            .map(GuestCount::Exactly)
            .chain(std::iter::once(GuestCount::MoreThanEight))
            .collect()
    }

    pub fn parse(value: &str) -> Option<GuestCount> {
        match value.trim() {
            "8+" => Some(GuestCount::MoreThanEight),
            other => match other.parse::<u8>() {
                Ok(n @ 1..=8) => Some(GuestCount::Exactly(n)),
                _ => None,
            },
        }
    }

    pub fn value(self) -> String {
        match self {
            GuestCount::Exactly(n) => n.to_string(),
            GuestCount::MoreThanEight => "8+".to_string(),
        }
    }

    pub fn label(self) -> String {
        match self {
            GuestCount::Exactly(1) => "1 Guest".to_string(),
            other => format!("{} Guests", other.value()),
        }
    }
}

impl fmt::Display for GuestCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value())
    }
}

/// A `{value, label}` pair for a select box
#[derive(Debug, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// Response for GET /api/reservations/options
#[derive(Debug, Serialize)]
pub struct ReservationOptions {
    pub times: Vec<SelectOption>,
    pub guests: Vec<SelectOption>,
}

impl ReservationOptions {
    pub fn new() -> Self {
        Self {
            times: TimeSlot::all()
                .into_iter()
                .map(|slot| SelectOption {
                    value: slot.value(),
                    label: slot.label(),
                })
                .collect(),
            guests: GuestCount::all()
                .into_iter()
                .map(|count| SelectOption {
                    value: count.value(),
                    label: count.label(),
                })
                .collect(),
        }
    }
}

impl Default for ReservationOptions {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Form and Reservation
// =============================================================================

/// Reservation form exactly as submitted
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReservationForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`
    pub time: String,
    pub guests: String,
    pub special_requests: String,
}

/// A validated reservation request
#[derive(Debug, Clone, PartialEq)]
pub struct Reservation {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: NaiveDate,
    pub time: TimeSlot,
    pub guests: GuestCount,
    pub special_requests: Option<String>,
}

impl Reservation {
    pub fn confirmation_message(&self) -> String {
        format!(
            "Reservation request submitted for {} on {} at {} for {} guests. We'll contact you shortly to confirm!",
            self.name,
            self.date.format("%Y-%m-%d"),
            self.time,
            self.guests
        )
    }
}

/// Response for POST /api/reservations
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationConfirmation {
    pub status: String,
    pub message: String,
}
