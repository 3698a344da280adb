//! Platform capability registry
//!
//! Platform builds declare the optional capabilities they ship by adding a
//! [`CapabilityEntry`] to the `PLATFORM_CAPABILITIES` distributed slice at
//! link time. Probing a capability never fails: a missing capability is an
//! [`CapabilityProbe::Unavailable`] value.
//!
//! ```ignore
//! use proton_infrastructure::capabilities::{CapabilityEntry, PLATFORM_CAPABILITIES};
//!
//! #[linkme::distributed_slice(PLATFORM_CAPABILITIES)]
//! static ACCOUNTS: CapabilityEntry = CapabilityEntry {
//!     name: "AccountManager",
//!     lookup_key: "account",
//!     description: "Account manager service",
//! };
//! ```

use std::collections::HashMap;

use once_cell::sync::Lazy;
use tracing::{debug, warn};

/// A capability shipped by this platform build
#[derive(Debug)]
pub struct CapabilityEntry {
    /// Capability name, used as the binding token
    pub name: &'static str,
    /// Lookup key passed to `PlatformServices::system_service`
    pub lookup_key: &'static str,
    /// Human-readable description
    pub description: &'static str,
}

/// Capabilities contributed by the platform build
#[linkme::distributed_slice]
pub static PLATFORM_CAPABILITIES: [CapabilityEntry] = [..];

/// Outcome of probing a capability
#[derive(Debug, Clone)]
pub enum CapabilityProbe {
    /// The platform ships the capability
    Available(&'static CapabilityEntry),
    /// The capability is missing on this platform build
    Unavailable {
        /// Probed name
        name: String,
    },
}

impl CapabilityProbe {
    /// Whether the capability is present
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available(_))
    }

    /// Probed name
    pub fn name(&self) -> &str {
        match self {
            Self::Available(entry) => entry.name,
            Self::Unavailable { name } => name.as_str(),
        }
    }
}

// Built on first probe; the slice is fixed at link time.
static CAPABILITY_INDEX: Lazy<HashMap<&'static str, &'static CapabilityEntry>> = Lazy::new(|| {
    let mut index = HashMap::with_capacity(PLATFORM_CAPABILITIES.len());
    for entry in PLATFORM_CAPABILITIES {
        if index.contains_key(entry.name) {
            warn!(capability = entry.name, "Capability registered twice, keeping the first");
            continue;
        }
        index.insert(entry.name, entry);
    }
    debug!(count = index.len(), "Indexed platform capabilities");
    index
});

/// Probe a capability by name
pub fn probe_capability(name: &str) -> CapabilityProbe {
    match CAPABILITY_INDEX.get(name) {
        Some(&entry) => CapabilityProbe::Available(entry),
        None => {
            debug!(capability = name, "Capability not shipped by this platform");
            CapabilityProbe::Unavailable {
                name: name.to_string(),
            }
        }
    }
}

/// List registered capabilities as `(name, description)`, sorted by name
pub fn list_capabilities() -> Vec<(&'static str, &'static str)> {
    let mut capabilities: Vec<_> = CAPABILITY_INDEX
        .values()
        .map(|entry| (entry.name, entry.description))
        .collect();
    capabilities.sort_unstable();
    capabilities
}
