//! Local date utilities based on `chrono` and `chrono-tz`.
//!
//! Rental dates are naive calendar dates, but "today" still depends on
//! where the rental station is. These helpers turn the current UTC
//! instant into a local calendar date for an IANA timezone.
//!
//! # Timezone Format
//! - Timezone names must follow the **IANA format**, e.g. `"Asia/Ho_Chi_Minh"`.
//! - An invalid name is reported as an error, never a panic.

use std::str::FromStr;

use anyhow::{Result, anyhow};
use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

/// Parses an IANA timezone name.
pub fn parse_timezone(tz_name: &str) -> Result<Tz> {
    Tz::from_str(tz_name.trim()).map_err(|_| anyhow!("Invalid timezone name: {}", tz_name))
}

/// Returns the calendar date of `instant` in `tz`.
///
/// Split out from [`today_in_local`] so the conversion can be tested
/// with a fixed instant.
pub fn date_in(tz: Tz, instant: DateTime<Utc>) -> NaiveDate {
    instant.with_timezone(&tz).date_naive()
}

/// Returns **today's date** in the specified IANA timezone.
///
/// ## Example
/// ```
/// use evr_booking::time::local::today_in_local;
/// let date = today_in_local("Asia/Ho_Chi_Minh").unwrap();
/// println!("today = {}", date);
/// ```
pub fn today_in_local(tz_name: &str) -> Result<NaiveDate> {
    let tz = parse_timezone(tz_name)?;
    Ok(date_in(tz, Utc::now()))
}
