//! The default binding registrar
//!
//! `DefaultModule` runs its contributors against the engine's registries
//! inside a guarded session. The guard is the only state kept on the
//! instance; the registries themselves live in a [`BindingContext`] that is
//! dropped when `configure` returns.
//!
//! ```text
//! Idle ──configure()──▶ Configuring ──(ok | error | panic)──▶ Idle
//!                            │
//!                            └── nested / concurrent configure() ──▶ IllegalState
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use proton_domain::error::{Error, Result};
use proton_domain::ports::{
    BindingRegistry, FieldListenerRegistry, Module, ProviderListenerRegistry,
};
use tracing::{debug, warn};

use super::context::BindingContext;
use super::contributors::{default_table, BindingContributor};
use crate::config::BindingsConfig;
use crate::observer::ObserverManager;

/// Registrar lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleState {
    /// No session; `configure` may be called
    Idle,
    /// A `configure` call is running
    Configuring,
}

/// Resets the registrar to `Idle` on every exit path, unwinding included
struct SessionGuard<'m> {
    state: &'m Mutex<ModuleState>,
}

impl<'m> SessionGuard<'m> {
    fn enter(state: &'m Mutex<ModuleState>) -> Result<Self> {
        let mut current = state.lock().unwrap_or_else(PoisonError::into_inner);
        if *current == ModuleState::Configuring {
            return Err(Error::illegal_state("Re-entry is not allowed."));
        }
        *current = ModuleState::Configuring;
        Ok(Self { state })
    }
}

impl Drop for SessionGuard<'_> {
    fn drop(&mut self) {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner) = ModuleState::Idle;
    }
}

/// Registrar for the default binding table plus composed extensions
pub struct DefaultModule {
    state: Mutex<ModuleState>,
    contributors: Vec<BindingContributor>,
    observer_manager: Arc<ObserverManager>,
}

impl DefaultModule {
    /// Registrar with the default table built from `BindingsConfig::default()`
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Start building a registrar
    pub fn builder() -> DefaultModuleBuilder {
        DefaultModuleBuilder::default()
    }

    /// Current lifecycle state
    pub fn state(&self) -> ModuleState {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Observer manager fed by the default table's provider listener
    ///
    /// The table binds the `ObserverManager` token as an unscoped
    /// self-binding, so an engine constructing that binding hands out fresh
    /// managers that `ObserverRegister` never feeds. Hosts that inject the
    /// manager should share this one, either through
    /// [`DefaultModuleBuilder::with_observer_manager`] or by overriding the
    /// token with an instance provider.
    pub fn observer_manager(&self) -> &Arc<ObserverManager> {
        &self.observer_manager
    }

    /// Number of contributors, default table included
    pub fn contributor_count(&self) -> usize {
        self.contributors.len()
    }

    /// Run every contributor against `ctx`, in order, stopping at the first error
    ///
    /// On a context with no active session the first registration fails
    /// with `Error::IllegalState`.
    pub fn populate_bindings(&self, ctx: &mut BindingContext<'_>) -> Result<()> {
        self.contributors
            .iter()
            .try_for_each(|contribute| contribute(&mut *ctx))
    }
}

impl Default for DefaultModule {
    fn default() -> Self {
        Self::new()
    }
}

impl Module for DefaultModule {
    fn configure<'a>(
        &self,
        bindings: Option<&'a mut dyn BindingRegistry>,
        provider_listeners: Option<&'a mut dyn ProviderListenerRegistry>,
        field_listeners: Option<&'a mut dyn FieldListenerRegistry>,
    ) -> Result<()> {
        let _guard = SessionGuard::enter(&self.state)?;

        let bindings = bindings.ok_or_else(|| Error::invalid_argument("bindings"))?;
        let provider_listeners =
            provider_listeners.ok_or_else(|| Error::invalid_argument("providerListeners"))?;
        let field_listeners =
            field_listeners.ok_or_else(|| Error::invalid_argument("fieldListeners"))?;

        let before = bindings.len();
        let mut ctx = BindingContext::open(bindings, provider_listeners, field_listeners);
        debug!(contributors = self.contributors.len(), "Configuration session started");

        let result = self.populate_bindings(&mut ctx);
        ctx.close();

        match &result {
            Ok(()) => debug!("Configuration session finished"),
            Err(e) => warn!(error = %e, registered_before = before, "Configuration session failed"),
        }
        result
    }
}

impl std::fmt::Debug for DefaultModule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DefaultModule")
            .field("state", &self.state())
            .field("contributors", &self.contributors.len())
            .finish()
    }
}

/// Builder for [`DefaultModule`]
#[derive(Default)]
pub struct DefaultModuleBuilder {
    config: BindingsConfig,
    skip_default_table: bool,
    extra: Vec<BindingContributor>,
    observer_manager: Option<Arc<ObserverManager>>,
}

impl DefaultModuleBuilder {
    /// Build the default table from `config`
    pub fn with_config(mut self, config: BindingsConfig) -> Self {
        self.config = config;
        self
    }

    /// Append a contributor; contributors run after the default table, in call order
    pub fn with_contributor(mut self, contributor: BindingContributor) -> Self {
        self.extra.push(contributor);
        self
    }

    /// Leave the default table out entirely
    pub fn without_default_table(mut self) -> Self {
        self.skip_default_table = true;
        self
    }

    /// Share an existing observer manager
    pub fn with_observer_manager(mut self, manager: Arc<ObserverManager>) -> Self {
        self.observer_manager = Some(manager);
        self
    }

    /// Build the registrar, probing optional capabilities now
    pub fn build(self) -> DefaultModule {
        let observer_manager = self.observer_manager.unwrap_or_default();
        let mut contributors = Vec::with_capacity(self.extra.len() + 1);
        if !self.skip_default_table {
            contributors.push(default_table(&self.config, Arc::clone(&observer_manager)));
        }
        contributors.extend(self.extra);

        DefaultModule {
            state: Mutex::new(ModuleState::Idle),
            contributors,
            observer_manager,
        }
    }
}
