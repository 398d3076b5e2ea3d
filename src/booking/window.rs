//! The rental window being edited, and the confirmed handoff value.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::time::format::{format_date, format_time, serde_date, serde_time};

/// Rental granularity. Only whole-day rentals are offered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RentalMode {
    #[default]
    Day,
}

/// A candidate rental window.
///
/// Plain data: it is copied into the validator, never validated on
/// construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalTimeWindow {
    #[serde(default)]
    pub mode: RentalMode,
    #[serde(with = "serde_date")]
    pub start_date: NaiveDate,
    #[serde(with = "serde_date")]
    pub end_date: NaiveDate,
    #[serde(with = "serde_time")]
    pub start_time: NaiveTime,
    #[serde(with = "serde_time")]
    pub end_time: NaiveTime,
}

impl RentalTimeWindow {
    pub fn new(
        start_date: NaiveDate,
        end_date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
    ) -> Self {
        Self {
            mode: RentalMode::Day,
            start_date,
            end_date,
            start_time,
            end_time,
        }
    }

    /// Number of calendar days between start and end (negative if inverted).
    pub fn rental_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }

    /// `"<start> <time> → <end> <time>"`.
    pub fn summary(&self) -> String {
        format!(
            "{} {} → {} {}",
            format_date(self.start_date),
            format_time(self.start_time),
            format_date(self.end_date),
            format_time(self.end_time)
        )
    }
}

/// A window that passed validation, ready for the booking-creation call.
///
/// Only produced by [`TimeWindowValidator::confirm`](super::validator::TimeWindowValidator::confirm).
/// Serializes as `{"startDate":"YYYY-MM-DD","endDate":..,"startTime":"HH:mm","endTime":..}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmedSelection {
    #[serde(with = "serde_date")]
    start_date: NaiveDate,
    #[serde(with = "serde_date")]
    end_date: NaiveDate,
    #[serde(with = "serde_time")]
    start_time: NaiveTime,
    #[serde(with = "serde_time")]
    end_time: NaiveTime,
}

impl ConfirmedSelection {
    pub(crate) fn from_window(window: &RentalTimeWindow) -> Self {
        Self {
            start_date: window.start_date,
            end_date: window.end_date,
            start_time: window.start_time,
            end_time: window.end_time,
        }
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn start_time(&self) -> NaiveTime {
        self.start_time
    }

    pub fn end_time(&self) -> NaiveTime {
        self.end_time
    }

    pub fn window(&self) -> RentalTimeWindow {
        RentalTimeWindow::new(self.start_date, self.end_date, self.start_time, self.end_time)
    }

    pub fn summary(&self) -> String {
        self.window().summary()
    }
}
