//! In-memory implementations of the engine's registry ports

pub mod bindings;
pub mod listeners;

pub use bindings::InMemoryBindings;
pub use listeners::{FieldListeners, ProviderListeners};
