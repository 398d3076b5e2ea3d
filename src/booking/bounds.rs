//! Selectable date bounds derived from policy and "today".

use chrono::{Days, NaiveDate};
use serde::Serialize;

use crate::policy::resolver::BookingPolicy;

/// Adds whole days, saturating at the end of the calendar.
pub(crate) fn add_days(date: NaiveDate, days: u32) -> NaiveDate {
    date.checked_add_days(Days::new(u64::from(days)))
        .unwrap_or(NaiveDate::MAX)
}

/// The dates a customer may pick from.
///
/// `min_start_date`, `max_start_date` and `max_end_date` are fixed when the
/// dialog opens; `min_end_date` follows the chosen start date.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationBounds {
    pub today: NaiveDate,
    pub min_start_date: NaiveDate,
    pub max_start_date: NaiveDate,
    pub min_end_date: NaiveDate,
    /// Shares the start-date ceiling.
    pub max_end_date: NaiveDate,
    pub max_rental_days: u32,
}

impl ValidationBounds {
    /// Computes bounds for a dialog opened on `today`.
    ///
    /// `min_end_date` starts out one day after `min_start_date`, matching
    /// the default selection.
    ///
    /// # Example
    /// ```
    /// use evr_booking::booking::bounds::ValidationBounds;
    /// use evr_booking::chrono::NaiveDate;
    /// use evr_booking::policy::resolver::BookingPolicy;
    ///
    /// let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    /// let policy = BookingPolicy { min_days_before_booking: 7, max_days_before_booking: 14, max_rental_days: 3 };
    /// let b = ValidationBounds::compute(today, &policy);
    ///
    /// assert_eq!(b.min_start_date.to_string(), "2025-01-08");
    /// assert_eq!(b.max_start_date.to_string(), "2025-01-15");
    /// ```
    pub fn compute(today: NaiveDate, policy: &BookingPolicy) -> Self {
        let min_start_date = add_days(today, policy.min_days_before_booking);
        let max_start_date = add_days(today, policy.max_days_before_booking);

        Self {
            today,
            min_start_date,
            max_start_date,
            min_end_date: add_days(min_start_date, 1),
            max_end_date: max_start_date,
            max_rental_days: policy.max_rental_days,
        }
    }

    /// Bounds after the start date moved to `start_date`.
    pub fn with_start(self, start_date: NaiveDate) -> Self {
        Self {
            min_end_date: add_days(start_date, 1),
            ..self
        }
    }

    /// `true` when policy leaves no valid start date (min lead time beyond
    /// the max), or no room for an end date after the earliest start.
    pub fn is_empty(&self) -> bool {
        self.min_start_date >= self.max_end_date
    }
}
