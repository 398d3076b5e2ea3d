//! Submit-time validation of a rental window.
//!
//! Rules run in a fixed order and stop at the first violation:
//!
//! 1. start date on/after `min_start_date`
//! 2. start date on/before `max_start_date`
//! 3. end date strictly after start date
//! 4. end date on/before `max_end_date`
//! 5. (optional) rental no longer than `max_rental_days`

use tracing::debug;

use super::bounds::ValidationBounds;
use super::window::{ConfirmedSelection, RentalTimeWindow};
use crate::error::booking::ValidationError;

/// Pure validator; holds only which optional rules are switched on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TimeWindowValidator {
    enforce_max_rental_days: bool,
}

impl TimeWindowValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Also reject windows longer than `bounds.max_rental_days`.
    pub fn enforcing_max_rental_days(mut self, enabled: bool) -> Self {
        self.enforce_max_rental_days = enabled;
        self
    }

    /// Checks `window` against `bounds`, reporting the first violated rule.
    pub fn validate(
        &self,
        bounds: &ValidationBounds,
        window: &RentalTimeWindow,
    ) -> Result<(), ValidationError> {
        if window.start_date < bounds.min_start_date {
            return Err(ValidationError::StartBeforeMinimum {
                min_start_date: bounds.min_start_date,
            });
        }
        if window.start_date > bounds.max_start_date {
            return Err(ValidationError::StartAfterMaximum {
                max_start_date: bounds.max_start_date,
            });
        }
        if window.end_date <= window.start_date {
            return Err(ValidationError::EndNotAfterStart);
        }
        if window.end_date > bounds.max_end_date {
            return Err(ValidationError::EndAfterMaximum {
                max_end_date: bounds.max_end_date,
            });
        }
        if self.enforce_max_rental_days && window.rental_days() > i64::from(bounds.max_rental_days)
        {
            return Err(ValidationError::RentalTooLong {
                max_rental_days: bounds.max_rental_days,
            });
        }
        Ok(())
    }

    /// Validates and promotes `window` to a [`ConfirmedSelection`].
    pub fn confirm(
        &self,
        bounds: &ValidationBounds,
        window: &RentalTimeWindow,
    ) -> Result<ConfirmedSelection, ValidationError> {
        self.validate(bounds, window).inspect_err(|e| {
            debug!(window = %window.summary(), reason = %e, "rental window rejected");
        })?;
        Ok(ConfirmedSelection::from_window(window))
    }
}
