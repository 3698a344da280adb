//! Provider and platform ports

use std::any::Any;
use std::sync::Arc;

use crate::error::Result;

/// Type-erased value handed out by a provider
pub type Instance = Arc<dyn Any + Send + Sync>;

/// Factory producing instances for a bound token
///
/// Scope caching is applied by the engine, not by the provider.
pub trait Provider: Send + Sync {
    /// Produce an instance, resolving whatever the platform must supply
    fn provide(&self, platform: &dyn PlatformServices) -> Result<Instance>;

    /// Human-readable description for logs and binding summaries
    fn describe(&self) -> String;
}

/// Platform capability resolver
///
/// Implemented by the host platform; providers call into it lazily, at
/// injection time.
pub trait PlatformServices: Send + Sync {
    /// The process-wide application object
    fn application(&self) -> Result<Instance>;

    /// The current context
    fn context(&self) -> Result<Instance>;

    /// Dispatch handle bound to the main thread
    fn dispatch_handle(&self) -> Result<Instance>;

    /// Platform service registered under `lookup_key` (e.g. `"wifi"`)
    fn system_service(&self, lookup_key: &str) -> Result<Instance>;
}
