//! In-memory listener registries

use std::collections::HashMap;
use std::sync::Arc;

use proton_domain::ports::{
    FieldListener, FieldListenerRegistry, Instance, ProviderListener, ProviderListenerRegistry,
};
use proton_domain::value_objects::{MarkerKey, TypeToken};

/// Ordered list of provider listeners
#[derive(Default)]
pub struct ProviderListeners {
    listeners: Vec<Arc<dyn ProviderListener>>,
}

impl ProviderListeners {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Listener names in registration order
    pub fn names(&self) -> Vec<String> {
        self.listeners.iter().map(|l| l.name().to_string()).collect()
    }

    /// Fan a provision event out to every listener, in order
    pub fn notify_provided(&self, token: &TypeToken, instance: &Instance) {
        for listener in &self.listeners {
            listener.on_provided(token, instance);
        }
    }
}

impl ProviderListenerRegistry for ProviderListeners {
    fn register(&mut self, listener: Arc<dyn ProviderListener>) {
        self.listeners.push(listener);
    }

    fn len(&self) -> usize {
        self.listeners.len()
    }
}

impl std::fmt::Debug for ProviderListeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

/// Field listeners grouped by marker
#[derive(Default)]
pub struct FieldListeners {
    by_marker: HashMap<MarkerKey, Vec<Arc<dyn FieldListener>>>,
}

impl FieldListeners {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Markers with at least one listener
    pub fn markers(&self) -> Vec<MarkerKey> {
        self.by_marker.keys().cloned().collect()
    }

    /// Notify every listener registered for `marker`, in order
    pub fn notify_injected(
        &self,
        marker: &MarkerKey,
        owner: &TypeToken,
        field: &str,
        value: &Instance,
    ) {
        if let Some(listeners) = self.by_marker.get(marker) {
            for listener in listeners {
                listener.on_field_injected(owner, field, value);
            }
        }
    }
}

impl FieldListenerRegistry for FieldListeners {
    fn register(&mut self, marker: MarkerKey, listener: Arc<dyn FieldListener>) {
        self.by_marker.entry(marker).or_default().push(listener);
    }

    fn count(&self, marker: &MarkerKey) -> usize {
        self.by_marker.get(marker).map_or(0, Vec::len)
    }
}

impl std::fmt::Debug for FieldListeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.by_marker.iter().map(|(k, v)| (k, v.len())))
            .finish()
    }
}
