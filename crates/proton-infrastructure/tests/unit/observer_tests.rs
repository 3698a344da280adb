//! Observer manager and listener tests

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use proton_domain::ports::{Instance, ProviderListener};
use proton_domain::value_objects::TypeToken;
use proton_infrastructure::observer::{Observer, ObserverHandle, ObserverManager, ObserverRegister};

#[derive(Default)]
struct CountingObserver {
    seen: AtomicUsize,
}

impl Observer for CountingObserver {
    fn on_event(&self, _event: &str, _payload: &Instance) {
        self.seen.fetch_add(1, Ordering::SeqCst);
    }
}

#[test]
fn test_fire_reaches_only_subscribed_observers() {
    let manager = ObserverManager::new();
    let observer = Arc::new(CountingObserver::default());
    manager.register("resume", observer.clone());

    let payload: Instance = Arc::new(());
    assert_eq!(manager.fire("resume", &payload), 1);
    assert_eq!(manager.fire("pause", &payload), 0);
    assert_eq!(observer.seen.load(Ordering::SeqCst), 1);
}

#[test]
fn test_register_listener_subscribes_observer_handles() {
    let manager = Arc::new(ObserverManager::new());
    let listener = ObserverRegister::new(Arc::clone(&manager));
    let observer = Arc::new(CountingObserver::default());

    let handle: Instance = Arc::new(ObserverHandle::new(["resume", "pause"], observer.clone()));
    listener.on_provided(&TypeToken::new("Screen"), &handle);

    assert_eq!(manager.count("resume"), 1);
    assert_eq!(manager.count("pause"), 1);
    assert_eq!(listener.name(), "ObserverRegister");
}

#[test]
fn test_register_listener_ignores_plain_instances() {
    let manager = Arc::new(ObserverManager::new());
    let listener = ObserverRegister::new(Arc::clone(&manager));

    let plain: Instance = Arc::new(42_u64);
    listener.on_provided(&TypeToken::new("Answer"), &plain);

    assert_eq!(manager.count("resume"), 0);
    assert!(Arc::ptr_eq(listener.manager(), &manager));
}
