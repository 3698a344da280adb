//! Configuration module port

use super::{BindingRegistry, FieldListenerRegistry, ProviderListenerRegistry};
use crate::error::Result;

/// A unit of binding configuration
///
/// The engine hands its registries to `configure`; an absent registry is
/// passed as `None` and must be rejected with `Error::InvalidArgument`.
pub trait Module: Send + Sync {
    /// Register this module's bindings and listeners
    fn configure<'a>(
        &self,
        bindings: Option<&'a mut dyn BindingRegistry>,
        provider_listeners: Option<&'a mut dyn ProviderListenerRegistry>,
        field_listeners: Option<&'a mut dyn FieldListenerRegistry>,
    ) -> Result<()>;
}
