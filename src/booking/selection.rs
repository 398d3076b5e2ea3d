//! Mutable candidate window with field-change cascades.
//!
//! No validation happens here. Edits are applied as given, then the
//! cascades keep dependent fields plausible:
//!
//! - moving the start date moves `min_end_date`, and pushes the end date
//!   to the next day if it no longer lies after the start;
//! - with [`EndTimeCascade::FollowStartTime`], changing the start time
//!   copies it into the end time.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::bounds::{ValidationBounds, add_days};
use super::window::RentalTimeWindow;

/// Whether editing the start time overwrites the end time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndTimeCascade {
    /// `end_time := start_time` on every start-time edit.
    #[default]
    FollowStartTime,
    /// Start and end times are edited independently.
    Independent,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectionState {
    window: RentalTimeWindow,
    bounds: ValidationBounds,
    end_time_cascade: EndTimeCascade,
}

impl SelectionState {
    /// Seeds the default selection: earliest start date, the day after as
    /// end date.
    pub fn seeded(
        bounds: ValidationBounds,
        start_time: NaiveTime,
        end_time: NaiveTime,
        end_time_cascade: EndTimeCascade,
    ) -> Self {
        let start_date = bounds.min_start_date;
        let window =
            RentalTimeWindow::new(start_date, add_days(start_date, 1), start_time, end_time);

        Self {
            window,
            bounds: bounds.with_start(start_date),
            end_time_cascade,
        }
    }

    pub fn window(&self) -> &RentalTimeWindow {
        &self.window
    }

    pub fn bounds(&self) -> &ValidationBounds {
        &self.bounds
    }

    pub fn end_time_cascade(&self) -> EndTimeCascade {
        self.end_time_cascade
    }

    pub fn summary(&self) -> String {
        self.window.summary()
    }

    pub fn set_start_date(&mut self, start_date: NaiveDate) {
        self.window.start_date = start_date;
        self.bounds = self.bounds.with_start(start_date);

        if self.window.end_date <= start_date {
            self.window.end_date = self.bounds.min_end_date;
        }
    }

    pub fn set_end_date(&mut self, end_date: NaiveDate) {
        self.window.end_date = end_date;
    }

    pub fn set_start_time(&mut self, start_time: NaiveTime) {
        self.window.start_time = start_time;

        if self.end_time_cascade == EndTimeCascade::FollowStartTime {
            self.window.end_time = start_time;
        }
    }

    pub fn set_end_time(&mut self, end_time: NaiveTime) {
        self.window.end_time = end_time;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::resolver::BookingPolicy;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn state(cascade: EndTimeCascade) -> SelectionState {
        let bounds = ValidationBounds::compute(
            d(2025, 1, 1),
            &BookingPolicy {
                min_days_before_booking: 7,
                max_days_before_booking: 14,
                max_rental_days: 5,
            },
        );
        SelectionState::seeded(bounds, t(9, 0), t(18, 0), cascade)
    }

    #[test]
    fn seeded_with_earliest_start_and_next_day_end() {
        let s = state(EndTimeCascade::FollowStartTime);

        assert_eq!(s.window().start_date, d(2025, 1, 8));
        assert_eq!(s.window().end_date, d(2025, 1, 9));
        assert_eq!(s.bounds().min_end_date, d(2025, 1, 9));
        assert_eq!(s.summary(), "2025-01-08 09:00 → 2025-01-09 18:00");
    }

    #[test]
    fn start_date_past_end_pushes_end_forward() {
        let mut s = state(EndTimeCascade::FollowStartTime);

        s.set_start_date(d(2025, 1, 12));

        assert_eq!(s.window().end_date, d(2025, 1, 13));
        assert_eq!(s.bounds().min_end_date, d(2025, 1, 13));
    }

    #[test]
    fn start_date_equal_to_end_pushes_end_forward() {
        let mut s = state(EndTimeCascade::FollowStartTime);
        s.set_end_date(d(2025, 1, 10));

        s.set_start_date(d(2025, 1, 10));

        assert_eq!(s.window().end_date, d(2025, 1, 11));
    }

    #[test]
    fn start_date_before_end_keeps_end() {
        let mut s = state(EndTimeCascade::FollowStartTime);
        s.set_end_date(d(2025, 1, 14));

        s.set_start_date(d(2025, 1, 10));

        assert_eq!(s.window().end_date, d(2025, 1, 14));
        assert_eq!(s.bounds().min_end_date, d(2025, 1, 11));
    }

    #[test]
    fn end_stays_after_start_for_any_start_edit() {
        let mut s = state(EndTimeCascade::Independent);

        for offset in 0..40u32 {
            let start = add_days(d(2024, 12, 20), offset);
            s.set_start_date(start);
            assert!(s.window().end_date > s.window().start_date, "start={start}");
        }
    }

    #[test]
    fn end_date_edit_is_not_validated() {
        let mut s = state(EndTimeCascade::FollowStartTime);

        s.set_end_date(d(2025, 1, 2));

        assert_eq!(s.window().end_date, d(2025, 1, 2));
    }

    #[test]
    fn follow_start_time_copies_into_end_time() {
        let mut s = state(EndTimeCascade::FollowStartTime);

        s.set_start_time(t(7, 30));
        assert_eq!(s.window().end_time, t(7, 30));

        s.set_end_time(t(20, 0));
        assert_eq!(s.window().start_time, t(7, 30));
        assert_eq!(s.window().end_time, t(20, 0));
    }

    #[test]
    fn independent_times_do_not_cascade() {
        let mut s = state(EndTimeCascade::Independent);

        s.set_start_time(t(7, 30));

        assert_eq!(s.window().start_time, t(7, 30));
        assert_eq!(s.window().end_time, t(18, 0));
    }
}
