//! Binding entries and provider descriptors

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use super::{Scope, TypeToken};
use crate::ports::Provider;

/// Reference to a provider type: a named constructor the engine instantiates
#[derive(Clone, Copy)]
pub struct ProviderFactory {
    /// Provider type name, for diagnostics
    pub name: &'static str,
    /// Constructs a fresh provider
    pub create: fn() -> Arc<dyn Provider>,
}

impl ProviderFactory {
    /// Instantiate the provider
    pub fn instantiate(&self) -> Arc<dyn Provider> {
        (self.create)()
    }
}

impl fmt::Debug for ProviderFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ProviderFactory").field(&self.name).finish()
    }
}

/// How a bound token gets its instances
#[derive(Clone)]
pub enum ProviderDescriptor {
    /// Plain class-to-self binding; the engine constructs the token's own type
    SelfBinding,
    /// Provider type, instantiated by the engine
    Factory(ProviderFactory),
    /// Pre-constructed provider instance
    Instance(Arc<dyn Provider>),
    /// Conditionally available capability that is missing on this platform
    Unavailable {
        /// Name of the missing capability
        capability: String,
    },
}

impl ProviderDescriptor {
    /// Whether this descriptor carries the missing-capability marker
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable { .. })
    }

    /// Short label for logs and summaries
    pub fn label(&self) -> String {
        match self {
            Self::SelfBinding => "self".to_string(),
            Self::Factory(factory) => format!("factory:{}", factory.name),
            Self::Instance(provider) => format!("instance:{}", provider.describe()),
            Self::Unavailable { capability } => format!("unavailable:{capability}"),
        }
    }
}

impl fmt::Debug for ProviderDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// A token bound to a provider descriptor with an optional scope
#[derive(Debug, Clone)]
pub struct BindingEntry {
    /// Bound capability
    pub token: TypeToken,
    /// Where instances come from
    pub provider: ProviderDescriptor,
    /// Result lifetime; `None` means the engine default (unscoped)
    pub scope: Option<Scope>,
}

impl BindingEntry {
    /// Self-binding with no scope, the state right after `bind(token)`
    pub fn new(token: TypeToken) -> Self {
        Self {
            token,
            provider: ProviderDescriptor::SelfBinding,
            scope: None,
        }
    }

    /// Scope the engine applies (unscoped when none was set)
    pub fn effective_scope(&self) -> Scope {
        self.scope.unwrap_or_default()
    }

    /// Provider type name when bound to a factory
    pub fn factory_name(&self) -> Option<&'static str> {
        match &self.provider {
            ProviderDescriptor::Factory(factory) => Some(factory.name),
            _ => None,
        }
    }

    /// Serializable view of this entry
    pub fn summary(&self) -> BindingSummary {
        BindingSummary {
            token: self.token.to_string(),
            provider: self.provider.label(),
            scope: self.effective_scope(),
        }
    }
}

/// Flat, serializable description of a binding
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BindingSummary {
    /// Token name
    pub token: String,
    /// Provider label
    pub provider: String,
    /// Effective scope
    pub scope: Scope,
}

impl From<ProviderFactory> for ProviderDescriptor {
    fn from(factory: ProviderFactory) -> Self {
        Self::Factory(factory)
    }
}

impl From<Arc<dyn Provider>> for ProviderDescriptor {
    fn from(provider: Arc<dyn Provider>) -> Self {
        Self::Instance(provider)
    }
}
