//! Value objects: tokens, scopes and binding entries

pub mod binding;
pub mod scope;
pub mod token;

pub use binding::{BindingEntry, BindingSummary, ProviderDescriptor, ProviderFactory};
pub use scope::Scope;
pub use token::{MarkerKey, TypeToken};
