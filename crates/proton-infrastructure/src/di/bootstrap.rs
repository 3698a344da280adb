//! Registry bootstrap
//!
//! Wires configuration, the default registrar and the in-memory registries
//! into a ready-to-use binding table for an engine.

use proton_domain::error::Result;
use proton_domain::ports::{BindingRegistry, Module};
use tracing::info;

use super::default_module::DefaultModule;
use crate::config::AppConfig;
use crate::registry::{FieldListeners, InMemoryBindings, ProviderListeners};

/// Registries populated by one configuration pass
#[derive(Debug, Default)]
pub struct ConfiguredRegistries {
    /// Binding table
    pub bindings: InMemoryBindings,
    /// Provider listeners
    pub provider_listeners: ProviderListeners,
    /// Field listeners
    pub field_listeners: FieldListeners,
}

impl ConfiguredRegistries {
    /// Empty registries honoring the configured duplicate policy
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            bindings: InMemoryBindings::with_policy(config.bindings.duplicate_policy),
            ..Self::default()
        }
    }

    /// Run `module` against these registries
    pub fn apply(&mut self, module: &dyn Module) -> Result<()> {
        module.configure(
            Some(&mut self.bindings),
            Some(&mut self.provider_listeners),
            Some(&mut self.field_listeners),
        )
    }
}

/// Build the default registrar from `config` and configure fresh registries with it
pub fn bootstrap(config: &AppConfig) -> Result<(DefaultModule, ConfiguredRegistries)> {
    let module = DefaultModule::builder()
        .with_config(config.bindings.clone())
        .build();

    let mut registries = ConfiguredRegistries::from_config(config);
    registries.apply(&module)?;

    info!(
        bindings = registries.bindings.len(),
        policy = ?registries.bindings.policy(),
        "Default bindings registered"
    );

    Ok((module, registries))
}
