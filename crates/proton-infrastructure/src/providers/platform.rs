//! Providers for the platform's singleton handles

use std::sync::Arc;

use proton_domain::error::Result;
use proton_domain::ports::{Instance, PlatformServices, Provider};
use proton_domain::value_objects::ProviderFactory;

/// Provides the process-wide application object
#[derive(Debug, Default)]
pub struct ApplicationProvider;

impl ApplicationProvider {
    /// Provider type reference
    pub fn factory() -> ProviderFactory {
        ProviderFactory {
            name: "ApplicationProvider",
            create: || -> Arc<dyn Provider> { Arc::new(Self) },
        }
    }
}

impl Provider for ApplicationProvider {
    fn provide(&self, platform: &dyn PlatformServices) -> Result<Instance> {
        platform.application()
    }

    fn describe(&self) -> String {
        "ApplicationProvider".to_string()
    }
}

/// Provides the current context
#[derive(Debug, Default)]
pub struct ContextProvider;

impl ContextProvider {
    /// Provider type reference
    pub fn factory() -> ProviderFactory {
        ProviderFactory {
            name: "ContextProvider",
            create: || -> Arc<dyn Provider> { Arc::new(Self) },
        }
    }
}

impl Provider for ContextProvider {
    fn provide(&self, platform: &dyn PlatformServices) -> Result<Instance> {
        platform.context()
    }

    fn describe(&self) -> String {
        "ContextProvider".to_string()
    }
}

/// Provides the main-thread dispatch handle
#[derive(Debug, Default)]
pub struct HandlerProvider;

impl HandlerProvider {
    /// Provider type reference
    pub fn factory() -> ProviderFactory {
        ProviderFactory {
            name: "HandlerProvider",
            create: || -> Arc<dyn Provider> { Arc::new(Self) },
        }
    }
}

impl Provider for HandlerProvider {
    fn provide(&self, platform: &dyn PlatformServices) -> Result<Instance> {
        platform.dispatch_handle()
    }

    fn describe(&self) -> String {
        "HandlerProvider".to_string()
    }
}
