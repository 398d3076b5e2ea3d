use anyhow::Result;
use async_trait::async_trait;

use super::types::{PolicyType, PolicyValue};

/// Port trait for looking up administrator policies.
///
/// This trait is the booking core's only inbound boundary. Implementations
/// may read from:
///
/// - The back office REST API
/// - An in-memory table (see [`InMemoryPolicyProvider`](super::in_memory::InMemoryPolicyProvider))
/// - A test double
///
/// ## Design notes
///
/// - Implementations return the entry **as stored**, including inactive
///   ones and non-numeric values; interpreting it is the job of
///   [`PolicyResolver`](super::resolver::PolicyResolver).
/// - Any failure (transport, missing entry, decode error) is returned as
///   `Err`. The resolver turns every `Err` into a fallback value, so
///   implementations need not be defensive.
///
/// ## Thread safety
///
/// Implementations must be `Send + Sync` so a single provider can be
/// shared via `Arc` by every open time-selection session.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PolicyProvider: Send + Sync {
    /// Returns the current entry for `policy_type`.
    async fn resolve_active_policy(&self, policy_type: PolicyType) -> Result<PolicyValue>;
}
