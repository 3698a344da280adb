//! Built-in providers and one-shot provisioning
//!
//! Scope caching and listener dispatch belong to the injection engine;
//! [`provide_once`] only turns a binding into a single instance.

pub mod capability;
pub mod platform;
pub mod system_service;

pub use capability::CapabilityProvider;
pub use platform::{ApplicationProvider, ContextProvider, HandlerProvider};
pub use system_service::SystemServiceProvider;

use proton_domain::error::{Error, Result};
use proton_domain::ports::{Instance, PlatformServices};
use proton_domain::value_objects::{BindingEntry, ProviderDescriptor};

/// Produce one instance for `entry`
///
/// A missing capability fails here, at provision time, with
/// `Error::CapabilityUnavailable`. Self-bindings need the engine's
/// constructor and fail with `Error::IllegalState`.
pub fn provide_once(entry: &BindingEntry, platform: &dyn PlatformServices) -> Result<Instance> {
    match &entry.provider {
        ProviderDescriptor::Factory(factory) => factory.instantiate().provide(platform),
        ProviderDescriptor::Instance(provider) => provider.provide(platform),
        ProviderDescriptor::Unavailable { capability } => {
            Err(Error::capability_unavailable(capability.clone()))
        }
        ProviderDescriptor::SelfBinding => Err(Error::illegal_state(format!(
            "'{}' is self-bound and must be constructed by the engine",
            entry.token
        ))),
    }
}
