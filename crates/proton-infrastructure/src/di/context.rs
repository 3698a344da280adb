//! Configuration session passed to binding contributors
//!
//! A [`BindingContext`] borrows the engine's registries for exactly one
//! `configure` call. It is never stored on the registrar; once the session
//! closes, every registration attempt fails with `Error::IllegalState`.

use std::sync::Arc;

use proton_domain::error::{Error, Result};
use proton_domain::ports::{
    BindingBuilder, BindingRegistry, FieldListener, FieldListenerRegistry, ProviderListener,
    ProviderListenerRegistry,
};
use proton_domain::value_objects::{MarkerKey, TypeToken};

struct Session<'a> {
    bindings: &'a mut dyn BindingRegistry,
    provider_listeners: &'a mut dyn ProviderListenerRegistry,
    field_listeners: &'a mut dyn FieldListenerRegistry,
}

/// Registration surface handed to contributors
pub struct BindingContext<'a> {
    session: Option<Session<'a>>,
}

impl<'a> BindingContext<'a> {
    pub(crate) fn open(
        bindings: &'a mut dyn BindingRegistry,
        provider_listeners: &'a mut dyn ProviderListenerRegistry,
        field_listeners: &'a mut dyn FieldListenerRegistry,
    ) -> Self {
        Self {
            session: Some(Session {
                bindings,
                provider_listeners,
                field_listeners,
            }),
        }
    }

    /// A context with no active session
    ///
    /// Lets a contributor be driven outside `configure`; every registration
    /// on it fails with `Error::IllegalState`.
    pub fn detached() -> Self {
        Self { session: None }
    }

    pub(crate) fn close(&mut self) {
        self.session = None;
    }

    /// Whether registrations are currently accepted
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Bind `token`, returning a builder over the new entry
    pub fn bind(&mut self, token: impl Into<TypeToken>) -> Result<BindingBuilder<'_>> {
        let session = self.session_mut("The Bindings can only be used inside configure()")?;
        session.bindings.bind(token.into())
    }

    /// Whether `token` already has a binding in this session's registry
    pub fn is_bound(&self, token: &TypeToken) -> bool {
        self.session
            .as_ref()
            .is_some_and(|session| session.bindings.get(token).is_some())
    }

    /// Register a provider listener
    pub fn bind_provider_listener(&mut self, listener: Arc<dyn ProviderListener>) -> Result<()> {
        let session =
            self.session_mut("Provider listeners can only be bound inside configure()")?;
        session.provider_listeners.register(listener);
        Ok(())
    }

    /// Register a field listener for fields marked with `marker`
    pub fn bind_field_listener(
        &mut self,
        marker: impl Into<MarkerKey>,
        listener: Arc<dyn FieldListener>,
    ) -> Result<()> {
        let session = self.session_mut("Field listeners can only be bound inside configure()")?;
        session.field_listeners.register(marker.into(), listener);
        Ok(())
    }

    fn session_mut(&mut self, message: &'static str) -> Result<&mut Session<'a>> {
        self.session
            .as_mut()
            .ok_or_else(|| Error::illegal_state(message))
    }
}

impl std::fmt::Debug for BindingContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BindingContext")
            .field("active", &self.is_active())
            .finish()
    }
}
