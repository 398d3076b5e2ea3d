//! # Booking Time-Window Configuration
//!
//! Settings that shape the time-selection dialog but are not
//! administrator policies: the station timezone that defines "today",
//! the pre-filled pick-up/return times, and the two optional behaviours.
//!
//! # Environment Variables
//! | Variable | Description | Default |
//! |-----------|-------------|----------|
//! | `BOOKING_TIMEZONE` | IANA timezone used to determine "today" | `"UTC"` |
//! | `BOOKING_DEFAULT_START_TIME` | Pre-filled pick-up time (`HH:mm`) | `"09:00"` |
//! | `BOOKING_DEFAULT_END_TIME` | Pre-filled return time (`HH:mm`) | `"09:00"` |
//! | `BOOKING_END_TIME_FOLLOWS_START` | Copy the start time into the end time on edit | `true` |
//! | `BOOKING_ENFORCE_MAX_RENTAL_DAYS` | Reject rentals longer than `MAX_RENTAL_DAYS` | `false` |

use anyhow::{Context, Result};
use chrono::NaiveTime;

use crate::booking::selection::EndTimeCascade;
use crate::booking::session::SessionSettings;
use crate::config::env::{read_flag_from, read_string_from};
use crate::time::format::parse_time;
use crate::time::local::parse_timezone;
use crate::time::system_clock::SystemClock;

pub const DEFAULT_TIMEZONE: &str = "UTC";
pub const DEFAULT_START_TIME: &str = "09:00";
pub const DEFAULT_END_TIME: &str = "09:00";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BookingConfig {
    /// IANA timezone name of the rental stations.
    pub timezone: String,
    pub default_start_time: NaiveTime,
    pub default_end_time: NaiveTime,
    pub end_time_cascade: EndTimeCascade,
    pub enforce_max_rental_days: bool,
}

impl BookingConfig {
    /// Builds a [`BookingConfig`] from the process environment.
    ///
    /// # Errors
    /// - When `BOOKING_TIMEZONE` is not a known IANA zone
    /// - When a default time is not in `HH:mm` form
    pub fn from_env() -> Result<Self> {
        Self::from_provider(|k| std::env::var(k).ok())
    }

    /// Builds a [`BookingConfig`] from an arbitrary key/value provider.
    pub fn from_provider<F>(provider: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let timezone = read_string_from(&provider, "BOOKING_TIMEZONE", DEFAULT_TIMEZONE);
        parse_timezone(&timezone).context("BOOKING_TIMEZONE is invalid")?;

        let default_start_time = parse_time(&read_string_from(
            &provider,
            "BOOKING_DEFAULT_START_TIME",
            DEFAULT_START_TIME,
        ))
        .context("BOOKING_DEFAULT_START_TIME parse error")?;
        let default_end_time = parse_time(&read_string_from(
            &provider,
            "BOOKING_DEFAULT_END_TIME",
            DEFAULT_END_TIME,
        ))
        .context("BOOKING_DEFAULT_END_TIME parse error")?;

        let end_time_cascade = if read_flag_from(&provider, "BOOKING_END_TIME_FOLLOWS_START", true)
        {
            EndTimeCascade::FollowStartTime
        } else {
            EndTimeCascade::Independent
        };

        Ok(Self {
            timezone,
            default_start_time,
            default_end_time,
            end_time_cascade,
            enforce_max_rental_days: read_flag_from(
                &provider,
                "BOOKING_ENFORCE_MAX_RENTAL_DAYS",
                false,
            ),
        })
    }

    /// Builds the clock for the configured timezone.
    pub fn clock(&self) -> Result<SystemClock> {
        SystemClock::new(&self.timezone)
    }

    /// Settings handed to every new time-selection session.
    pub fn session_settings(&self) -> SessionSettings {
        SessionSettings {
            default_start_time: self.default_start_time,
            default_end_time: self.default_end_time,
            end_time_cascade: self.end_time_cascade,
            enforce_max_rental_days: self.enforce_max_rental_days,
        }
    }
}
