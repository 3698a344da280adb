//! Registry ports owned by the injection engine
//!
//! The registrar only borrows these for the duration of a configuration
//! session and performs a fixed, ordered sequence of calls on them.

use std::sync::Arc;

use super::{FieldListener, ProviderListener};
use crate::error::Result;
use crate::value_objects::{BindingEntry, MarkerKey, ProviderDescriptor, Scope, TypeToken};

/// Table of token → provider bindings
pub trait BindingRegistry: Send {
    /// Store `entry`, applying the registry's duplicate policy
    ///
    /// Returns the stored entry so that a builder can refine it in place.
    fn register(&mut self, entry: BindingEntry) -> Result<&mut BindingEntry>;

    /// Binding for `token`, if any
    fn get(&self, token: &TypeToken) -> Option<&BindingEntry>;

    /// Bound tokens in registration order
    fn tokens(&self) -> Vec<TypeToken>;

    /// Number of bindings
    fn len(&self) -> usize;

    /// Whether no binding has been registered
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Register a self-binding for `token` and return a builder over it
    fn bind(&mut self, token: TypeToken) -> Result<BindingBuilder<'_>> {
        let entry = self.register(BindingEntry::new(token))?;
        Ok(BindingBuilder::new(entry))
    }
}

/// Registry of provider listeners
pub trait ProviderListenerRegistry: Send {
    /// Add a listener; listeners fire in registration order
    fn register(&mut self, listener: Arc<dyn ProviderListener>);

    /// Number of registered listeners
    fn len(&self) -> usize;

    /// Whether no listener has been registered
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Registry of field listeners keyed by marker
pub trait FieldListenerRegistry: Send {
    /// Add a listener for fields marked with `marker`
    fn register(&mut self, marker: MarkerKey, listener: Arc<dyn FieldListener>);

    /// Number of listeners registered for `marker`
    fn count(&self, marker: &MarkerKey) -> usize;
}

/// Chained refinement of a freshly registered binding
///
/// ```
/// use proton_domain::ports::BindingBuilder;
/// use proton_domain::value_objects::{BindingEntry, Scope};
///
/// let mut entry = BindingEntry::new("Handler".into());
/// BindingBuilder::new(&mut entry).in_scope(Scope::Application);
/// assert_eq!(entry.scope, Some(Scope::Application));
/// ```
#[derive(Debug)]
pub struct BindingBuilder<'a> {
    entry: &'a mut BindingEntry,
}

impl<'a> BindingBuilder<'a> {
    /// Wrap a stored entry
    pub fn new(entry: &'a mut BindingEntry) -> Self {
        Self { entry }
    }

    /// Replace the provider descriptor
    #[allow(clippy::wrong_self_convention)]
    pub fn to_provider(self, provider: impl Into<ProviderDescriptor>) -> Self {
        self.entry.provider = provider.into();
        self
    }

    /// Set the result scope
    pub fn in_scope(self, scope: Scope) -> Self {
        self.entry.scope = Some(scope);
        self
    }

    /// The entry as currently refined
    pub fn entry(&self) -> &BindingEntry {
        self.entry
    }
}
