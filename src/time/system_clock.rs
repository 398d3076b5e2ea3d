use anyhow::Result;
use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;

use crate::time::clock::Clock;
use crate::time::local::{date_in, parse_timezone};

/// A [`Clock`] implementation backed by the system clock.
///
/// `SystemClock` reports the current date in the IANA timezone of the
/// rental station.
///
/// # Design Notes
/// - The timezone is parsed once, at construction time.
/// - An invalid timezone is a **configuration error** and surfaces from
///   [`SystemClock::new`], so [`Clock::today`] cannot fail.
/// - Selecting the timezone is the responsibility of the composition root
///   (see [`BookingConfig`](crate::config::booking::BookingConfig)).
#[derive(Clone, Copy, Debug)]
pub struct SystemClock {
    tz: Tz,
}

impl SystemClock {
    /// Creates a new [`SystemClock`] for the given IANA timezone name.
    ///
    /// # Errors
    /// Returns an error if the timezone name is not a known IANA zone.
    pub fn new(tz_name: &str) -> Result<Self> {
        Ok(Self {
            tz: parse_timezone(tz_name)?,
        })
    }

    pub fn timezone(&self) -> Tz {
        self.tz
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        date_in(self.tz, Utc::now())
    }
}
