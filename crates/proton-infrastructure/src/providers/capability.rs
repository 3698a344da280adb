//! Provider for conditionally available capabilities

use proton_domain::error::Result;
use proton_domain::ports::{Instance, PlatformServices, Provider};

use crate::capabilities::CapabilityEntry;

/// Resolves a probed capability through its lookup key
#[derive(Debug, Clone, Copy)]
pub struct CapabilityProvider {
    entry: &'static CapabilityEntry,
}

impl CapabilityProvider {
    /// Create a provider for a capability found by the probe
    pub fn new(entry: &'static CapabilityEntry) -> Self {
        Self { entry }
    }

    /// The capability this provider resolves
    pub fn capability(&self) -> &'static CapabilityEntry {
        self.entry
    }
}

impl Provider for CapabilityProvider {
    fn provide(&self, platform: &dyn PlatformServices) -> Result<Instance> {
        platform.system_service(self.entry.lookup_key)
    }

    fn describe(&self) -> String {
        format!("CapabilityProvider({})", self.entry.name)
    }
}
