//! Listener ports invoked by the injection engine

use super::Instance;
use crate::value_objects::TypeToken;

/// Callback around provider resolution events
pub trait ProviderListener: Send + Sync {
    /// Called after a provider produced `instance` for `token`
    fn on_provided(&self, token: &TypeToken, instance: &Instance);

    /// Listener name for diagnostics
    fn name(&self) -> &str;
}

/// Callback for fields marked with a specific marker
pub trait FieldListener: Send + Sync {
    /// Called when `value` is injected into `field` of an instance of `owner`
    fn on_field_injected(&self, owner: &TypeToken, field: &str, value: &Instance);
}
