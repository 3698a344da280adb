//! Bootstrap tests: configuration to populated registries, end to end

use std::sync::{Arc, Mutex};

use proton_domain::ports::{BindingRegistry, Instance, ProviderListenerRegistry};
use proton_domain::value_objects::{ProviderDescriptor, TypeToken};
use proton_infrastructure::config::{AppConfig, ConfigLoader, DuplicatePolicy};
use proton_infrastructure::constants::{DEFAULT_SYSTEM_SERVICES, OBSERVER_MANAGER_TOKEN};
use proton_infrastructure::di::{bootstrap, contributor, ConfiguredRegistries, DefaultModule};
use proton_infrastructure::observer::{Observer, ObserverHandle, ObserverManager};

#[derive(Default)]
struct RecordingObserver {
    seen: Mutex<Vec<String>>,
}

impl Observer for RecordingObserver {
    fn on_event(&self, event: &str, _payload: &Instance) {
        self.seen.lock().unwrap().push(event.to_string());
    }
}

#[test]
fn test_bootstrap_with_defaults_registers_full_table() {
    let (module, registries) = bootstrap(&AppConfig::default()).unwrap();

    // 3 platform bindings + system services + AccountManager + ObserverManager
    assert_eq!(
        registries.bindings.len(),
        3 + DEFAULT_SYSTEM_SERVICES.len() + 1 + 1
    );
    assert_eq!(registries.provider_listeners.names(), ["ObserverRegister"]);
    assert_eq!(registries.field_listeners.markers().len(), 0);
    assert_eq!(registries.bindings.policy(), DuplicatePolicy::Reject);

    let last = registries.bindings.tokens().last().cloned().unwrap();
    assert_eq!(last.name(), OBSERVER_MANAGER_TOKEN);
    assert_eq!(module.contributor_count(), 1);
}

#[test]
fn test_bootstrap_honors_override_policy() {
    let mut config = AppConfig::default();
    config.bindings.duplicate_policy = DuplicatePolicy::Override;

    let (_module, registries) = bootstrap(&config).unwrap();

    assert_eq!(registries.bindings.policy(), DuplicatePolicy::Override);
}

#[test]
fn test_bootstrap_from_loaded_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("proton.toml");
    std::fs::write(
        &path,
        r#"
[bindings]
optional_capabilities = []

[[bindings.system_services]]
token = "WifiManager"
lookup_key = "wifi"
"#,
    )
    .unwrap();

    let config = ConfigLoader::new().with_config_path(&path).load().unwrap();
    let (_module, registries) = bootstrap(&config).unwrap();

    let names: Vec<String> = registries
        .bindings
        .tokens()
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(
        names,
        ["Application", "Context", "Handler", "WifiManager", OBSERVER_MANAGER_TOKEN]
    );
}

#[test]
fn test_observer_handles_reach_the_manager() {
    let (module, registries) = bootstrap(&AppConfig::default()).unwrap();
    let observer = Arc::new(RecordingObserver::default());

    let provided: Instance = Arc::new(ObserverHandle::new(
        ["battery_low", "network_changed"],
        Arc::clone(&observer) as Arc<dyn Observer>,
    ));
    registries
        .provider_listeners
        .notify_provided(&TypeToken::new("PowerWatcher"), &provided);

    let manager = module.observer_manager();
    assert_eq!(manager.count("battery_low"), 1);
    assert_eq!(manager.count("network_changed"), 1);

    let payload: Instance = Arc::new(15_u8);
    assert_eq!(manager.fire("battery_low", &payload), 1);
    assert_eq!(manager.fire("screen_off", &payload), 0);
    assert_eq!(*observer.seen.lock().unwrap(), ["battery_low"]);
}

#[test]
fn test_shared_observer_manager_is_fed_by_the_table() {
    let shared = Arc::new(ObserverManager::new());
    let module = DefaultModule::builder()
        .with_observer_manager(Arc::clone(&shared))
        .build();
    assert!(Arc::ptr_eq(module.observer_manager(), &shared));

    let mut registries = ConfiguredRegistries::default();
    registries.apply(&module).unwrap();

    let provided: Instance = Arc::new(ObserverHandle::new(
        ["screen_off"],
        Arc::new(RecordingObserver::default()) as Arc<dyn Observer>,
    ));
    registries
        .provider_listeners
        .notify_provided(&TypeToken::new("ScreenWatcher"), &provided);

    assert_eq!(shared.count("screen_off"), 1);
}

#[test]
fn test_plain_instances_are_ignored_by_observer_register() {
    let (module, registries) = bootstrap(&AppConfig::default()).unwrap();

    let provided: Instance = Arc::new("not an observer");
    registries
        .provider_listeners
        .notify_provided(&TypeToken::new("Vibrator"), &provided);

    assert_eq!(module.observer_manager().count("battery_low"), 0);
}

#[test]
fn test_registries_can_be_reconfigured_with_extension() {
    let config = AppConfig::default();
    let module = DefaultModule::builder()
        .with_config(config.bindings.clone())
        .with_contributor(contributor(|ctx| {
            ctx.bind("Vibrator")?;
            Ok(())
        }))
        .build();

    let mut registries = ConfiguredRegistries::from_config(&config);
    registries.apply(&module).unwrap();

    let vibrator = registries.bindings.get(&TypeToken::new("Vibrator")).unwrap();
    assert!(matches!(vibrator.provider, ProviderDescriptor::SelfBinding));
    assert_eq!(registries.provider_listeners.len(), 1);
}
