use std::collections::HashMap;
use std::sync::RwLock;

use anyhow::{Result, anyhow};
use async_trait::async_trait;

use super::provider::PolicyProvider;
use super::types::{PolicyType, PolicyValue};
use crate::error::policy::PolicyNotFoundError;

/// Map-backed [`PolicyProvider`].
///
/// Holds at most one entry per policy type. Used by composition roots that
/// receive policies pre-fetched in one batch, and by tests.
#[derive(Debug, Default)]
pub struct InMemoryPolicyProvider {
    entries: RwLock<HashMap<PolicyType, PolicyValue>>,
}

impl InMemoryPolicyProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a provider from a list of entries; later entries of the same
    /// type replace earlier ones.
    pub fn from_entries(entries: impl IntoIterator<Item = PolicyValue>) -> Self {
        let provider = Self::new();
        for e in entries {
            provider.upsert(e);
        }
        provider
    }

    /// Parses the back office's JSON array of policy entries.
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: Vec<PolicyValue> = serde_json::from_str(json)?;
        Ok(Self::from_entries(entries))
    }

    /// Inserts or replaces the entry for its policy type.
    pub fn upsert(&self, entry: PolicyValue) {
        if let Ok(mut map) = self.entries.write() {
            map.insert(entry.policy_type, entry);
        }
    }

    pub fn remove(&self, policy_type: PolicyType) -> Option<PolicyValue> {
        self.entries.write().ok()?.remove(&policy_type)
    }
}

#[async_trait]
impl PolicyProvider for InMemoryPolicyProvider {
    async fn resolve_active_policy(&self, policy_type: PolicyType) -> Result<PolicyValue> {
        let map = self
            .entries
            .read()
            .map_err(|_| anyhow!("policy table lock poisoned"))?;

        map.get(&policy_type)
            .cloned()
            .ok_or_else(|| PolicyNotFoundError::new(policy_type).into())
    }
}
