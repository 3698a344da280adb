//! Configuration loading and validation tests

use figment::Jail;
use proton_infrastructure::config::loader::validate_app_config;
use proton_infrastructure::config::{
    AppConfig, BindingsConfig, ConfigLoader, DuplicatePolicy, SystemServiceConfig,
};
use proton_infrastructure::constants::{DEFAULT_OPTIONAL_CAPABILITIES, DEFAULT_SYSTEM_SERVICES};

#[test]
fn test_default_config_is_valid() {
    let config = AppConfig::default();
    assert_eq!(config.bindings.duplicate_policy, DuplicatePolicy::Reject);
    assert_eq!(
        config.bindings.system_services.len(),
        DEFAULT_SYSTEM_SERVICES.len()
    );
    assert_eq!(
        config.bindings.optional_capabilities.len(),
        DEFAULT_OPTIONAL_CAPABILITIES.len()
    );
    assert!(validate_app_config(&config).is_ok());
}

#[test]
fn test_validation_rejects_repeated_token() {
    let mut config = AppConfig::default();
    config.bindings.system_services = vec![
        SystemServiceConfig::new("WifiManager", "wifi"),
        SystemServiceConfig::new("WifiManager", "wifi2"),
    ];
    let err = validate_app_config(&config).unwrap_err();
    assert!(err.to_string().contains("WifiManager"));
}

#[test]
fn test_validation_rejects_builtin_token_reuse() {
    let mut config = AppConfig::default();
    config.bindings.optional_capabilities = vec!["Context".to_string()];
    assert!(validate_app_config(&config).is_err());
}

#[test]
fn test_validation_rejects_empty_lookup_key() {
    let config = AppConfig {
        bindings: BindingsConfig {
            system_services: vec![SystemServiceConfig::new("PowerManager", " ")],
            ..BindingsConfig::default()
        },
        ..AppConfig::default()
    };
    let err = validate_app_config(&config).unwrap_err();
    assert!(err.to_string().contains("empty lookup key"));
}

#[test]
fn test_validation_rejects_bad_log_level() {
    let mut config = AppConfig::default();
    config.logging.level = "loud".to_string();
    assert!(validate_app_config(&config).is_err());
}

#[test]
fn test_load_from_explicit_toml_file() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "custom.toml",
            r#"
            [bindings]
            duplicate_policy = "override"
            optional_capabilities = []

            [[bindings.system_services]]
            token = "VibratorService"
            lookup_key = "vibrator"

            [logging]
            level = "debug"
            "#,
        )?;

        let config = ConfigLoader::new()
            .with_config_path("custom.toml")
            .load()
            .map_err(|e| e.to_string())?;

        assert_eq!(config.bindings.duplicate_policy, DuplicatePolicy::Override);
        assert_eq!(
            config.bindings.system_services,
            vec![SystemServiceConfig::new("VibratorService", "vibrator")]
        );
        assert!(config.bindings.optional_capabilities.is_empty());
        assert_eq!(config.logging.level, "debug");
        Ok(())
    });
}

#[test]
fn test_default_file_is_discovered_in_working_directory() {
    Jail::expect_with(|jail| {
        jail.create_file("proton.toml", "[logging]\njson_format = true\n")?;

        let config = ConfigLoader::new().load().map_err(|e| e.to_string())?;
        assert!(config.logging.json_format);
        Ok(())
    });
}

#[test]
fn test_env_overrides_file() {
    Jail::expect_with(|jail| {
        jail.create_file("proton.toml", "[bindings]\nduplicate_policy = \"reject\"\n")?;
        jail.set_env("PROTON__BINDINGS__DUPLICATE_POLICY", "override");

        let config = ConfigLoader::new().load().map_err(|e| e.to_string())?;
        assert_eq!(config.bindings.duplicate_policy, DuplicatePolicy::Override);
        Ok(())
    });
}

#[test]
fn test_custom_env_prefix_replaces_default() {
    Jail::expect_with(|jail| {
        jail.set_env("DROID__LOGGING__LEVEL", "warn");
        jail.set_env("PROTON__LOGGING__LEVEL", "trace");

        let config = ConfigLoader::new()
            .with_env_prefix("DROID")
            .load()
            .map_err(|e| e.to_string())?;
        assert_eq!(config.logging.level, "warn");
        Ok(())
    });
}

#[test]
fn test_invalid_file_fails_validation() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "proton.toml",
            r#"
            [[bindings.system_services]]
            token = ""
            lookup_key = "wifi"
            "#,
        )?;

        let result = ConfigLoader::new().load();
        assert!(result.is_err());
        Ok(())
    });
}

#[test]
fn test_save_then_load_keeps_table() {
    let dir = tempfile::tempdir().expect("Failed to create temp directory");
    let path = dir.path().join("saved.toml");

    let mut config = AppConfig::default();
    config.bindings.system_services = vec![SystemServiceConfig::new("AudioManager", "audio")];

    let loader = ConfigLoader::new().with_config_path(&path);
    loader.save_to_file(&config, &path).unwrap();
    let loaded = loader.load().unwrap();

    assert_eq!(loaded.bindings.system_services, config.bindings.system_services);
    assert_eq!(loader.config_path(), Some(path.as_path()));
}
