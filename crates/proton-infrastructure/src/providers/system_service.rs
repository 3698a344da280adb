//! Keyed system service provider

use proton_domain::error::Result;
use proton_domain::ports::{Instance, PlatformServices, Provider};

/// Resolves the platform service registered under a lookup key
///
/// One instance per bound token; all share this behavior and differ only in
/// the key they carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemServiceProvider {
    lookup_key: String,
}

impl SystemServiceProvider {
    /// Create a provider for `lookup_key` (e.g. `"wifi"`)
    pub fn new(lookup_key: impl Into<String>) -> Self {
        Self {
            lookup_key: lookup_key.into(),
        }
    }

    /// Key passed to the platform
    pub fn lookup_key(&self) -> &str {
        &self.lookup_key
    }
}

impl Provider for SystemServiceProvider {
    fn provide(&self, platform: &dyn PlatformServices) -> Result<Instance> {
        platform.system_service(&self.lookup_key)
    }

    fn describe(&self) -> String {
        format!("SystemServiceProvider({})", self.lookup_key)
    }
}
