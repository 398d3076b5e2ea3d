use chrono::NaiveDate;

/// A port that provides the **current date** for booking logic.
///
/// # Purpose
/// Every bound a customer can pick from is relative to "today", so the
/// booking core never reads the system time itself:
///
/// - Bounds and validation take `today` as a frozen value per call
/// - Implementations can be swapped (system clock, fixed clock, mock, etc.)
/// - Tests are deterministic and time-independent
///
/// # Typical Implementations
/// - [`SystemClock`](crate::time::system_clock::SystemClock): OS clock in a configured timezone
/// - [`FixedClock`]: Returns a constant date
pub trait Clock: Send + Sync {
    /// Returns today's date as a [`NaiveDate`].
    fn today(&self) -> NaiveDate;
}

/// A [`Clock`] that always returns the same date.
///
/// Used in tests and when replaying a booking decision for a known day.
///
/// # Example
/// ```
/// use evr_booking::chrono::NaiveDate;
/// use evr_booking::time::clock::{Clock, FixedClock};
///
/// let day = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
/// assert_eq!(FixedClock::new(day).today(), day);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedClock {
    date: NaiveDate,
}

impl FixedClock {
    pub fn new(date: NaiveDate) -> Self {
        Self { date }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.date
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn fixed_clock_returns_given_date() {
        let date = NaiveDate::from_ymd_opt(2025, 10, 2).unwrap();
        let clock = FixedClock::new(date);

        assert_eq!(clock.today(), date);
        assert_eq!(clock.today(), clock.today());
    }

    #[test]
    fn clock_trait_object_can_be_shared() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let clock: Arc<dyn Clock> = Arc::new(FixedClock::new(date));
        let other = Arc::clone(&clock);

        assert_eq!(other.today(), date);
    }
}
