//! Binding contributors
//!
//! The registrar's binding table is an ordered list of contributors. The
//! default table comes first; extensions are appended by composition.

use std::sync::Arc;

use proton_domain::error::Result;
use proton_domain::ports::Provider;
use proton_domain::value_objects::{ProviderDescriptor, Scope};
use tracing::{debug, trace};

use super::context::BindingContext;
use crate::capabilities::{probe_capability, CapabilityProbe};
use crate::config::{BindingsConfig, SystemServiceConfig};
use crate::constants::{APPLICATION_TOKEN, CONTEXT_TOKEN, HANDLER_TOKEN, OBSERVER_MANAGER_TOKEN};
use crate::observer::{ObserverManager, ObserverRegister};
use crate::providers::{
    ApplicationProvider, CapabilityProvider, ContextProvider, HandlerProvider,
    SystemServiceProvider,
};

/// A function registering bindings and listeners inside a session
pub type BindingContributor = Arc<dyn Fn(&mut BindingContext<'_>) -> Result<()> + Send + Sync>;

/// Wrap a closure as a contributor
pub fn contributor<F>(f: F) -> BindingContributor
where
    F: Fn(&mut BindingContext<'_>) -> Result<()> + Send + Sync + 'static,
{
    Arc::new(f)
}

/// The default binding table
///
/// Optional capabilities are probed once, when the table is built.
#[derive(Debug)]
pub struct DefaultTable {
    system_services: Vec<SystemServiceConfig>,
    optional_capabilities: Vec<CapabilityProbe>,
    observer_manager: Arc<ObserverManager>,
}

impl DefaultTable {
    /// Build the table from configuration
    pub fn new(config: &BindingsConfig, observer_manager: Arc<ObserverManager>) -> Self {
        let optional_capabilities = config
            .optional_capabilities
            .iter()
            .map(|name| probe_capability(name))
            .collect();
        Self {
            system_services: config.system_services.clone(),
            optional_capabilities,
            observer_manager,
        }
    }

    /// Probe results for the optional capabilities, in table order
    pub fn optional_capabilities(&self) -> &[CapabilityProbe] {
        &self.optional_capabilities
    }

    /// Register the table into `ctx`
    pub fn contribute(&self, ctx: &mut BindingContext<'_>) -> Result<()> {
        ctx.bind(APPLICATION_TOKEN)?
            .to_provider(ApplicationProvider::factory())
            .in_scope(Scope::Application);
        ctx.bind(CONTEXT_TOKEN)?
            .to_provider(ContextProvider::factory());
        ctx.bind(HANDLER_TOKEN)?
            .to_provider(HandlerProvider::factory())
            .in_scope(Scope::Application);

        for service in &self.system_services {
            let provider: Arc<dyn Provider> =
                Arc::new(SystemServiceProvider::new(service.lookup_key.clone()));
            ctx.bind(service.token.clone())?.to_provider(provider);
            trace!(token = %service.token, key = %service.lookup_key, "Bound system service");
        }

        for probe in &self.optional_capabilities {
            let descriptor = match probe {
                CapabilityProbe::Available(entry) => {
                    let provider: Arc<dyn Provider> = Arc::new(CapabilityProvider::new(*entry));
                    ProviderDescriptor::Instance(provider)
                }
                CapabilityProbe::Unavailable { name } => {
                    debug!(capability = %name, "Binding missing capability to unavailable marker");
                    ProviderDescriptor::Unavailable {
                        capability: name.clone(),
                    }
                }
            };
            ctx.bind(probe.name().to_string())?.to_provider(descriptor);
        }

        ctx.bind(OBSERVER_MANAGER_TOKEN)?;
        ctx.bind_provider_listener(Arc::new(ObserverRegister::new(Arc::clone(
            &self.observer_manager,
        ))))
    }
}

/// The default table as a contributor
pub fn default_table(
    config: &BindingsConfig,
    observer_manager: Arc<ObserverManager>,
) -> BindingContributor {
    let table = DefaultTable::new(config, observer_manager);
    Arc::new(move |ctx: &mut BindingContext<'_>| table.contribute(ctx))
}
