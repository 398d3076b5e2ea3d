//! # Policy Data Model
//!
//! Administrator-configured numeric constraints as the back office stores
//! them. The booking core only ever reads the currently active value of a
//! policy type; scope is carried but never interpreted.

use std::fmt;
use std::str::FromStr;

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Named policy keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PolicyType {
    /// Minimum lead time, in days, between today and the rental start.
    MinDaysBeforeBooking,
    /// Maximum lead time, in days; also the ceiling for the rental end.
    MaxDaysBeforeBooking,
    /// Longest allowed rental, in days.
    MaxRentalDays,
    /// Deposit in currency units. Not a day policy.
    DepositAmount,
}

impl PolicyType {
    pub const ALL: [PolicyType; 4] = [
        PolicyType::MinDaysBeforeBooking,
        PolicyType::MaxDaysBeforeBooking,
        PolicyType::MaxRentalDays,
        PolicyType::DepositAmount,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PolicyType::MinDaysBeforeBooking => "MIN_DAYS_BEFORE_BOOKING",
            PolicyType::MaxDaysBeforeBooking => "MAX_DAYS_BEFORE_BOOKING",
            PolicyType::MaxRentalDays => "MAX_RENTAL_DAYS",
            PolicyType::DepositAmount => "DEPOSIT_AMOUNT",
        }
    }
}

impl fmt::Display for PolicyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PolicyType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim();
        PolicyType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(key))
            .ok_or_else(|| anyhow!("unknown policy type: {s}"))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppliedScope {
    Global,
    Local,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PolicyStatus {
    Active,
    Inactive,
}

/// One policy entry as returned by the policy collaborator.
///
/// `value` is kept as raw JSON: the back office may hand over a number,
/// a numeric string, or garbage, and only the resolver decides what is
/// usable.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyValue {
    pub policy_type: PolicyType,
    pub value: Value,
    pub applied_scope: AppliedScope,
    pub status: PolicyStatus,
}

impl PolicyValue {
    /// An active, globally scoped entry.
    pub fn active(policy_type: PolicyType, value: impl Into<Value>) -> Self {
        Self {
            policy_type,
            value: value.into(),
            applied_scope: AppliedScope::Global,
            status: PolicyStatus::Active,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == PolicyStatus::Active
    }

    /// Interprets `value` as a whole number of days.
    ///
    /// Accepts non-negative integral JSON numbers (`7`, `7.0`) and numeric
    /// strings (`"7"`). Anything else is `None`.
    pub fn as_days(&self) -> Option<u32> {
        match &self.value {
            Value::Number(n) => {
                if let Some(u) = n.as_u64() {
                    u32::try_from(u).ok()
                } else {
                    n.as_f64()
                        .filter(|f| *f >= 0.0 && f.fract() == 0.0 && *f <= u32::MAX as f64)
                        .map(|f| f as u32)
                }
            }
            Value::String(s) => s.trim().parse::<u32>().ok(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn policy_type_round_trips_through_str() {
        for t in PolicyType::ALL {
            assert_eq!(t.as_str().parse::<PolicyType>().unwrap(), t);
        }
        assert_eq!(
            "max_rental_days".parse::<PolicyType>().unwrap(),
            PolicyType::MaxRentalDays
        );
        assert!("LATE_FEE".parse::<PolicyType>().is_err());
    }

    #[test]
    fn deserializes_backend_payload() {
        let raw = json!({
            "policyType": "MIN_DAYS_BEFORE_BOOKING",
            "value": 7,
            "appliedScope": "LOCAL",
            "status": "ACTIVE"
        });

        let p: PolicyValue = serde_json::from_value(raw).unwrap();

        assert_eq!(p.policy_type, PolicyType::MinDaysBeforeBooking);
        assert_eq!(p.applied_scope, AppliedScope::Local);
        assert!(p.is_active());
        assert_eq!(p.as_days(), Some(7));
    }

    #[test]
    fn as_days_accepts_integral_numbers_and_numeric_strings() {
        let t = PolicyType::MaxRentalDays;
        assert_eq!(PolicyValue::active(t, 3).as_days(), Some(3));
        assert_eq!(PolicyValue::active(t, 3.0).as_days(), Some(3));
        assert_eq!(PolicyValue::active(t, " 14 ").as_days(), Some(14));
        assert_eq!(PolicyValue::active(t, 0).as_days(), Some(0));
    }

    #[test]
    fn as_days_rejects_non_numeric_values() {
        let t = PolicyType::MaxRentalDays;
        assert_eq!(PolicyValue::active(t, 2.5).as_days(), None);
        assert_eq!(PolicyValue::active(t, -1).as_days(), None);
        assert_eq!(PolicyValue::active(t, "two").as_days(), None);
        assert_eq!(PolicyValue::active(t, Value::Null).as_days(), None);
        assert_eq!(PolicyValue::active(t, true).as_days(), None);
    }
}
