//! Port traits (interfaces) implemented by the engine, the platform and providers

pub mod listeners;
pub mod module;
pub mod providers;
pub mod registry;

pub use listeners::{FieldListener, ProviderListener};
pub use module::Module;
pub use providers::{Instance, PlatformServices, Provider};
pub use registry::{
    BindingBuilder, BindingRegistry, FieldListenerRegistry, ProviderListenerRegistry,
};
