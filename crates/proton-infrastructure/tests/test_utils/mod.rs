//! Shared test doubles
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use proton_domain::error::{Error, Result};
use proton_domain::ports::{Instance, PlatformServices};

/// Marker values handed out by [`FakePlatform`]
#[derive(Debug, PartialEq, Eq)]
pub struct Handle(pub &'static str);

/// Platform resolving a fixed set of services
pub struct FakePlatform {
    services: HashMap<String, Instance>,
}

impl FakePlatform {
    /// Platform shipping `wifi`, `power` and `account`
    pub fn new() -> Self {
        let mut services: HashMap<String, Instance> = HashMap::new();
        services.insert("wifi".to_string(), Arc::new(Handle("wifi")));
        services.insert("power".to_string(), Arc::new(Handle("power")));
        services.insert("account".to_string(), Arc::new(Handle("account")));
        Self { services }
    }

    /// Add or replace a keyed service
    pub fn with_service(mut self, key: &str, instance: Instance) -> Self {
        self.services.insert(key.to_string(), instance);
        self
    }
}

impl PlatformServices for FakePlatform {
    fn application(&self) -> Result<Instance> {
        Ok(Arc::new(Handle("application")))
    }

    fn context(&self) -> Result<Instance> {
        Ok(Arc::new(Handle("context")))
    }

    fn dispatch_handle(&self) -> Result<Instance> {
        Ok(Arc::new(Handle("handler")))
    }

    fn system_service(&self, lookup_key: &str) -> Result<Instance> {
        self.services
            .get(lookup_key)
            .cloned()
            .ok_or_else(|| Error::platform(format!("no service registered for '{lookup_key}'")))
    }
}

/// Downcast an instance to a [`Handle`] label
pub fn handle_label(instance: &Instance) -> Option<&'static str> {
    instance.downcast_ref::<Handle>().map(|handle| handle.0)
}

/// The three engine registries, configured together
pub struct Registries {
    pub bindings: proton_infrastructure::registry::InMemoryBindings,
    pub provider_listeners: proton_infrastructure::registry::ProviderListeners,
    pub field_listeners: proton_infrastructure::registry::FieldListeners,
}

impl Registries {
    /// Empty registries rejecting duplicates
    pub fn new() -> Self {
        Self::with_policy(proton_infrastructure::config::DuplicatePolicy::Reject)
    }

    /// Empty registries with the given duplicate policy
    pub fn with_policy(policy: proton_infrastructure::config::DuplicatePolicy) -> Self {
        Self {
            bindings: proton_infrastructure::registry::InMemoryBindings::with_policy(policy),
            provider_listeners: proton_infrastructure::registry::ProviderListeners::new(),
            field_listeners: proton_infrastructure::registry::FieldListeners::new(),
        }
    }

    /// Run `module` against all three registries
    pub fn configure(&mut self, module: &dyn proton_domain::ports::Module) -> Result<()> {
        module.configure(
            Some(&mut self.bindings),
            Some(&mut self.provider_listeners),
            Some(&mut self.field_listeners),
        )
    }

    /// Bound token names in registration order
    pub fn token_names(&self) -> Vec<String> {
        use proton_domain::ports::BindingRegistry;
        self.bindings.tokens().iter().map(ToString::to_string).collect()
    }
}
