use thiserror::Error;

use crate::policy::types::PolicyType;

/// The policy collaborator has no entry for the requested type.
///
/// Providers return this inside their `anyhow::Error`; the resolver
/// absorbs it like any other lookup failure.
///
/// # Example
/// ```
/// use evr_booking::error::policy::PolicyNotFoundError;
/// use evr_booking::policy::types::PolicyType;
///
/// let err = PolicyNotFoundError::new(PolicyType::MaxRentalDays);
/// assert_eq!(err.to_string(), "policy MAX_RENTAL_DAYS not found");
/// ```
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("policy {policy_type} not found")]
pub struct PolicyNotFoundError {
    pub policy_type: PolicyType,
}

impl PolicyNotFoundError {
    pub fn new(policy_type: PolicyType) -> Self {
        Self { policy_type }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_policy_type() {
        let err = PolicyNotFoundError::new(PolicyType::MinDaysBeforeBooking);
        assert_eq!(err.to_string(), "policy MIN_DAYS_BEFORE_BOOKING not found");
    }

    #[test]
    fn survives_anyhow_round_trip() {
        let err: anyhow::Error = PolicyNotFoundError::new(PolicyType::DepositAmount).into();

        let inner = err.downcast_ref::<PolicyNotFoundError>().unwrap();
        assert_eq!(inner.policy_type, PolicyType::DepositAmount);
    }
}
