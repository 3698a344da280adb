//! Observer manager and its provider listener
//!
//! A provider opts its product into event dispatch by returning an
//! [`ObserverHandle`]; the [`ObserverRegister`] listener sees the provided
//! instance and subscribes the handle's observer to its events.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use proton_domain::ports::{Instance, ProviderListener};
use proton_domain::value_objects::TypeToken;
use tracing::trace;

/// Receives events fired through an [`ObserverManager`]
pub trait Observer: Send + Sync {
    /// Handle `event` carrying `payload`
    fn on_event(&self, event: &str, payload: &Instance);
}

/// Instance type marking a provided value as an observer
pub struct ObserverHandle {
    /// Events the observer subscribes to
    pub events: Vec<String>,
    /// The observer
    pub observer: Arc<dyn Observer>,
}

impl ObserverHandle {
    /// Subscribe `observer` to `events`
    pub fn new<I, S>(events: I, observer: Arc<dyn Observer>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            events: events.into_iter().map(Into::into).collect(),
            observer,
        }
    }
}

/// Event name → subscribed observers
#[derive(Default)]
pub struct ObserverManager {
    observers: RwLock<HashMap<String, Vec<Arc<dyn Observer>>>>,
}

impl ObserverManager {
    /// Empty manager
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe `observer` to `event`
    pub fn register(&self, event: impl Into<String>, observer: Arc<dyn Observer>) {
        self.observers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(event.into())
            .or_default()
            .push(observer);
    }

    /// Deliver `event` to its observers; returns how many were notified
    pub fn fire(&self, event: &str, payload: &Instance) -> usize {
        // Clone the list so observers may register while being notified
        let observers = self
            .observers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(event)
            .cloned()
            .unwrap_or_default();
        for observer in &observers {
            observer.on_event(event, payload);
        }
        observers.len()
    }

    /// Number of observers subscribed to `event`
    pub fn count(&self, event: &str) -> usize {
        self.observers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(event)
            .map_or(0, Vec::len)
    }
}

impl std::fmt::Debug for ObserverManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let observers = self.observers.read().unwrap_or_else(PoisonError::into_inner);
        f.debug_map()
            .entries(observers.iter().map(|(event, list)| (event, list.len())))
            .finish()
    }
}

/// Provider listener subscribing provided [`ObserverHandle`]s
pub struct ObserverRegister {
    manager: Arc<ObserverManager>,
}

impl ObserverRegister {
    /// Listener feeding `manager`
    pub fn new(manager: Arc<ObserverManager>) -> Self {
        Self { manager }
    }

    /// The manager observers are registered with
    pub fn manager(&self) -> &Arc<ObserverManager> {
        &self.manager
    }
}

impl ProviderListener for ObserverRegister {
    fn on_provided(&self, token: &TypeToken, instance: &Instance) {
        let Some(handle) = (**instance).downcast_ref::<ObserverHandle>() else {
            return;
        };
        for event in &handle.events {
            trace!(token = %token, event = %event, "Registering observer");
            self.manager.register(event.clone(), Arc::clone(&handle.observer));
        }
    }

    fn name(&self) -> &str {
        "ObserverRegister"
    }
}
