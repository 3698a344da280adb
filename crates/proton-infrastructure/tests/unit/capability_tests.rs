//! Capability registry tests

use proton_infrastructure::capabilities::{
    list_capabilities, probe_capability, CapabilityEntry, CapabilityProbe, PLATFORM_CAPABILITIES,
};

#[linkme::distributed_slice(PLATFORM_CAPABILITIES)]
static SENSOR_HUB: CapabilityEntry = CapabilityEntry {
    name: "SensorHub",
    lookup_key: "sensor",
    description: "Sensor hub registered by the unit test binary",
};

#[test]
fn test_registered_capability_is_available() {
    let probe = probe_capability("SensorHub");
    assert!(probe.is_available());
    match probe {
        CapabilityProbe::Available(entry) => assert_eq!(entry.lookup_key, "sensor"),
        CapabilityProbe::Unavailable { .. } => panic!("SensorHub should be available"),
    }
}

#[test]
fn test_missing_capability_is_a_value_not_an_error() {
    let probe = probe_capability("AccountManager");
    assert!(!probe.is_available());
    assert_eq!(probe.name(), "AccountManager");
}

#[test]
fn test_probe_is_memoized() {
    let first = probe_capability("SensorHub");
    let second = probe_capability("SensorHub");
    match (first, second) {
        (CapabilityProbe::Available(a), CapabilityProbe::Available(b)) => {
            assert!(std::ptr::eq(a, b));
            assert!(std::ptr::eq(a, &SENSOR_HUB));
        }
        _ => panic!("SensorHub should be available"),
    }
}

#[test]
fn test_list_capabilities_includes_registered_entries() {
    let capabilities = list_capabilities();
    assert!(capabilities.contains(&("SensorHub", "Sensor hub registered by the unit test binary")));
}
