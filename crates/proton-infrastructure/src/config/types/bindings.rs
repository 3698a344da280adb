//! Binding table configuration types

use crate::constants::{DEFAULT_OPTIONAL_CAPABILITIES, DEFAULT_SYSTEM_SERVICES};
use serde::{Deserialize, Serialize};

/// What a registry does when a token is bound twice
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Fail the second `bind` with `Error::DuplicateBinding`
    #[default]
    Reject,
    /// Replace the earlier entry, keeping its position in the table
    Override,
}

/// A keyed system service: token bound to a provider carrying `lookup_key`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemServiceConfig {
    /// Capability token (e.g. `WifiManager`)
    pub token: String,
    /// Platform lookup key (e.g. `wifi`)
    pub lookup_key: String,
}

impl SystemServiceConfig {
    /// Create a system service entry
    pub fn new(token: impl Into<String>, lookup_key: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            lookup_key: lookup_key.into(),
        }
    }
}

/// Contents of the default binding table
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BindingsConfig {
    /// Duplicate policy of registries created from this configuration
    pub duplicate_policy: DuplicatePolicy,

    /// Capabilities probed at startup and bound even when missing
    pub optional_capabilities: Vec<String>,

    /// Keyed system services, bound in this order
    pub system_services: Vec<SystemServiceConfig>,
}

impl Default for BindingsConfig {
    fn default() -> Self {
        Self {
            duplicate_policy: DuplicatePolicy::default(),
            optional_capabilities: DEFAULT_OPTIONAL_CAPABILITIES
                .iter()
                .map(|name| (*name).to_string())
                .collect(),
            system_services: DEFAULT_SYSTEM_SERVICES
                .iter()
                .map(|(token, key)| SystemServiceConfig::new(*token, *key))
                .collect(),
        }
    }
}
