//! # Policy Resolver
//!
//! Turns named policy lookups into typed, defaulted day counts.
//!
//! Missing configuration never blocks a customer: a failed lookup, an
//! inactive entry or a non-numeric value all resolve to a named fallback
//! and are only visible in the logs.

use std::sync::Arc;

use tracing::{debug, warn};

use super::provider::PolicyProvider;
use super::types::PolicyType;

/// Lead-time floor used when `MIN_DAYS_BEFORE_BOOKING` is unavailable.
pub const DEFAULT_MIN_DAYS_BEFORE_BOOKING: u32 = 0;
/// Lead-time ceiling used when `MAX_DAYS_BEFORE_BOOKING` is unavailable.
pub const DEFAULT_MAX_DAYS_BEFORE_BOOKING: u32 = 1;
/// Rental length cap used when `MAX_RENTAL_DAYS` is unavailable.
pub const DEFAULT_MAX_RENTAL_DAYS: u32 = 1;
/// Used for policy types that are not measured in days.
pub const DEFAULT_NON_DAY_POLICY: u32 = 0;

/// Fallback day count for a policy type.
pub fn fallback_days(policy_type: PolicyType) -> u32 {
    match policy_type {
        PolicyType::MinDaysBeforeBooking => DEFAULT_MIN_DAYS_BEFORE_BOOKING,
        PolicyType::MaxDaysBeforeBooking => DEFAULT_MAX_DAYS_BEFORE_BOOKING,
        PolicyType::MaxRentalDays => DEFAULT_MAX_RENTAL_DAYS,
        PolicyType::DepositAmount => DEFAULT_NON_DAY_POLICY,
    }
}

/// Outcome of resolving one day policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DayPolicy {
    /// `false` when `days` is the fallback.
    pub found: bool,
    pub days: u32,
}

impl DayPolicy {
    pub fn fallback(policy_type: PolicyType) -> Self {
        Self {
            found: false,
            days: fallback_days(policy_type),
        }
    }
}

/// The three day policies a time-selection session needs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BookingPolicy {
    pub min_days_before_booking: u32,
    pub max_days_before_booking: u32,
    pub max_rental_days: u32,
}

impl Default for BookingPolicy {
    /// All fallbacks.
    fn default() -> Self {
        Self {
            min_days_before_booking: DEFAULT_MIN_DAYS_BEFORE_BOOKING,
            max_days_before_booking: DEFAULT_MAX_DAYS_BEFORE_BOOKING,
            max_rental_days: DEFAULT_MAX_RENTAL_DAYS,
        }
    }
}

/// Adapter over a [`PolicyProvider`].
///
/// Holds no cache: each call goes back to the provider, so a dialog opened
/// after an administrator edit sees the new value.
#[derive(Clone)]
pub struct PolicyResolver {
    provider: Arc<dyn PolicyProvider>,
}

impl PolicyResolver {
    pub fn new(provider: Arc<dyn PolicyProvider>) -> Self {
        Self { provider }
    }

    /// Resolves the active value of one policy type as whole days.
    ///
    /// Never fails: every problem yields [`DayPolicy::fallback`].
    pub async fn resolve_day_policy(&self, policy_type: PolicyType) -> DayPolicy {
        let entry = match self.provider.resolve_active_policy(policy_type).await {
            Ok(entry) => entry,
            Err(err) => {
                warn!(policy = %policy_type, error = %err, "policy lookup failed, using fallback");
                return DayPolicy::fallback(policy_type);
            }
        };

        if entry.policy_type != policy_type {
            warn!(
                policy = %policy_type,
                returned = %entry.policy_type,
                "provider returned a different policy type, using fallback"
            );
            return DayPolicy::fallback(policy_type);
        }

        if !entry.is_active() {
            debug!(policy = %policy_type, "policy inactive, using fallback");
            return DayPolicy::fallback(policy_type);
        }

        match entry.as_days() {
            Some(days) => DayPolicy { found: true, days },
            None => {
                warn!(policy = %policy_type, value = %entry.value, "policy value is not a day count, using fallback");
                DayPolicy::fallback(policy_type)
            }
        }
    }

    /// Resolves every policy a time-selection session needs in one go.
    ///
    /// The three lookups run concurrently; each keeps its own fallback.
    pub async fn resolve_booking_policy(&self) -> BookingPolicy {
        let (min, max, rental) = tokio::join!(
            self.resolve_day_policy(PolicyType::MinDaysBeforeBooking),
            self.resolve_day_policy(PolicyType::MaxDaysBeforeBooking),
            self.resolve_day_policy(PolicyType::MaxRentalDays),
        );

        let policy = BookingPolicy {
            min_days_before_booking: min.days,
            max_days_before_booking: max.days,
            max_rental_days: rental.days,
        };
        debug!(
            min_days = policy.min_days_before_booking,
            max_days = policy.max_days_before_booking,
            max_rental_days = policy.max_rental_days,
            "booking policy resolved"
        );
        policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use mockall::predicate::eq;

    use crate::policy::in_memory::InMemoryPolicyProvider;
    use crate::policy::provider::MockPolicyProvider;
    use crate::policy::types::{PolicyStatus, PolicyValue};

    fn resolver_with(entries: Vec<PolicyValue>) -> PolicyResolver {
        PolicyResolver::new(Arc::new(InMemoryPolicyProvider::from_entries(entries)))
    }

    fn failing_resolver() -> PolicyResolver {
        let mut mock = MockPolicyProvider::new();
        mock.expect_resolve_active_policy()
            .returning(|_| Err(anyhow!("connection refused")));
        PolicyResolver::new(Arc::new(mock))
    }

    #[tokio::test]
    async fn active_numeric_policy_is_found() {
        let resolver = resolver_with(vec![PolicyValue::active(PolicyType::MinDaysBeforeBooking, 7)]);

        let got = resolver
            .resolve_day_policy(PolicyType::MinDaysBeforeBooking)
            .await;

        assert_eq!(got, DayPolicy { found: true, days: 7 });
    }

    #[tokio::test]
    async fn collaborator_failure_yields_exact_fallbacks() {
        let resolver = failing_resolver();

        let min = resolver.resolve_day_policy(PolicyType::MinDaysBeforeBooking).await;
        let max = resolver.resolve_day_policy(PolicyType::MaxDaysBeforeBooking).await;
        let rental = resolver.resolve_day_policy(PolicyType::MaxRentalDays).await;

        assert_eq!(min, DayPolicy { found: false, days: 0 });
        assert_eq!(max, DayPolicy { found: false, days: 1 });
        assert_eq!(rental, DayPolicy { found: false, days: 1 });
    }

    #[tokio::test]
    async fn inactive_policy_falls_back() {
        let mut entry = PolicyValue::active(PolicyType::MaxDaysBeforeBooking, 30);
        entry.status = PolicyStatus::Inactive;
        let resolver = resolver_with(vec![entry]);

        let got = resolver
            .resolve_day_policy(PolicyType::MaxDaysBeforeBooking)
            .await;

        assert_eq!(got, DayPolicy::fallback(PolicyType::MaxDaysBeforeBooking));
    }

    #[tokio::test]
    async fn non_numeric_policy_falls_back() {
        let resolver = resolver_with(vec![PolicyValue::active(PolicyType::MaxRentalDays, "a week")]);

        let got = resolver.resolve_day_policy(PolicyType::MaxRentalDays).await;

        assert!(!got.found);
        assert_eq!(got.days, DEFAULT_MAX_RENTAL_DAYS);
    }

    #[tokio::test]
    async fn mismatched_policy_type_falls_back() {
        let mut mock = MockPolicyProvider::new();
        mock.expect_resolve_active_policy()
            .with(eq(PolicyType::MinDaysBeforeBooking))
            .times(1)
            .returning(|_| Ok(PolicyValue::active(PolicyType::DepositAmount, 500_000)));
        let resolver = PolicyResolver::new(Arc::new(mock));

        let got = resolver
            .resolve_day_policy(PolicyType::MinDaysBeforeBooking)
            .await;

        assert_eq!(got, DayPolicy { found: false, days: 0 });
    }

    #[tokio::test]
    async fn booking_policy_mixes_found_and_fallback_values() {
        let resolver = resolver_with(vec![
            PolicyValue::active(PolicyType::MinDaysBeforeBooking, 7),
            PolicyValue::active(PolicyType::MaxDaysBeforeBooking, 14),
        ]);

        let policy = resolver.resolve_booking_policy().await;

        assert_eq!(
            policy,
            BookingPolicy {
                min_days_before_booking: 7,
                max_days_before_booking: 14,
                max_rental_days: DEFAULT_MAX_RENTAL_DAYS,
            }
        );
    }

    #[tokio::test]
    async fn booking_policy_re_resolves_on_every_call() {
        let provider = Arc::new(InMemoryPolicyProvider::new());
        let resolver = PolicyResolver::new(provider.clone());

        assert_eq!(resolver.resolve_booking_policy().await, BookingPolicy::default());

        provider.upsert(PolicyValue::active(PolicyType::MaxRentalDays, 10));
        assert_eq!(resolver.resolve_booking_policy().await.max_rental_days, 10);
    }

    #[tokio::test]
    async fn failing_provider_resolves_to_default_policy() {
        assert_eq!(
            failing_resolver().resolve_booking_policy().await,
            BookingPolicy::default()
        );
    }
}
