use chrono::NaiveDate;
use thiserror::Error;

/// A rule the proposed rental window violates.
///
/// The `Display` text is the message shown to the customer. Only the
/// first violated rule is ever reported for a submit attempt.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("start date must be on/after {min_start_date}")]
    StartBeforeMinimum { min_start_date: NaiveDate },

    #[error("start date must be on/before {max_start_date}")]
    StartAfterMaximum { max_start_date: NaiveDate },

    #[error("end date must be strictly after start date")]
    EndNotAfterStart,

    #[error("end date must be on/before {max_end_date}")]
    EndAfterMaximum { max_end_date: NaiveDate },

    #[error("rental must not exceed {max_rental_days} days")]
    RentalTooLong { max_rental_days: u32 },
}

/// Why a time-selection session refused an operation.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    /// `save()` or an edit was attempted before policy resolution finished.
    #[error("booking bounds are not ready yet")]
    BoundsNotReady,

    /// The session was already confirmed or cancelled.
    #[error("time selection session is closed")]
    Closed,

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl SessionError {
    /// The violated rule, if this is a user-facing validation failure.
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            SessionError::Validation(v) => Some(v),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn messages_embed_iso_dates() {
        let err = ValidationError::StartBeforeMinimum {
            min_start_date: d(2025, 1, 8),
        };
        assert_eq!(err.to_string(), "start date must be on/after 2025-01-08");

        let err = ValidationError::EndAfterMaximum {
            max_end_date: d(2025, 1, 15),
        };
        assert_eq!(err.to_string(), "end date must be on/before 2025-01-15");

        assert_eq!(
            ValidationError::RentalTooLong { max_rental_days: 3 }.to_string(),
            "rental must not exceed 3 days"
        );
    }

    #[test]
    fn session_error_wraps_validation_transparently() {
        let err: SessionError = ValidationError::EndNotAfterStart.into();

        assert_eq!(err.to_string(), "end date must be strictly after start date");
        assert_eq!(err.validation(), Some(&ValidationError::EndNotAfterStart));
        assert_eq!(SessionError::BoundsNotReady.validation(), None);
    }
}
