//! In-memory binding table

use std::collections::HashMap;

use proton_domain::error::{Error, Result};
use proton_domain::ports::BindingRegistry;
use proton_domain::value_objects::{BindingEntry, BindingSummary, TypeToken};
use tracing::debug;

use crate::config::DuplicatePolicy;

/// Binding table preserving registration order
#[derive(Debug, Default)]
pub struct InMemoryBindings {
    entries: Vec<BindingEntry>,
    index: HashMap<TypeToken, usize>,
    policy: DuplicatePolicy,
}

impl InMemoryBindings {
    /// Empty table rejecting duplicates
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty table with the given duplicate policy
    pub fn with_policy(policy: DuplicatePolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Duplicate policy in effect
    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    /// Entries in registration order
    pub fn entries(&self) -> &[BindingEntry] {
        &self.entries
    }

    /// Serializable view of the table
    pub fn summaries(&self) -> Vec<BindingSummary> {
        self.entries.iter().map(BindingEntry::summary).collect()
    }

    /// Table as pretty JSON, for diagnostics
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.summaries())
            .map_err(|e| Error::infrastructure_with_source("Failed to serialize bindings", e))
    }
}

impl BindingRegistry for InMemoryBindings {
    fn register(&mut self, entry: BindingEntry) -> Result<&mut BindingEntry> {
        if let Some(&position) = self.index.get(&entry.token) {
            return match self.policy {
                DuplicatePolicy::Reject => Err(Error::duplicate_binding(entry.token.to_string())),
                DuplicatePolicy::Override => {
                    debug!(token = %entry.token, "Overriding existing binding");
                    self.entries[position] = entry;
                    Ok(&mut self.entries[position])
                }
            };
        }

        let position = self.entries.len();
        self.index.insert(entry.token.clone(), position);
        self.entries.push(entry);
        Ok(&mut self.entries[position])
    }

    fn get(&self, token: &TypeToken) -> Option<&BindingEntry> {
        self.index.get(token).map(|&position| &self.entries[position])
    }

    fn tokens(&self) -> Vec<TypeToken> {
        self.entries.iter().map(|entry| entry.token.clone()).collect()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
