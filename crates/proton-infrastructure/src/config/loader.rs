//! Configuration loader
//!
//! Loads configuration from defaults, a TOML file and environment variables
//! using Figment.

use crate::config::AppConfig;
use crate::constants::{
    APPLICATION_TOKEN, CONFIG_ENV_PREFIX, CONTEXT_TOKEN, DEFAULT_CONFIG_DIR,
    DEFAULT_CONFIG_FILENAME, HANDLER_TOKEN, OBSERVER_MANAGER_TOKEN,
};
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_loaded, parse_log_level};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use proton_domain::error::{Error, Result};
use std::collections::HashSet;
use std::env;
use std::path::{Path, PathBuf};

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// Sources are merged in this order (later sources override earlier):
    /// 1. `AppConfig::default()`
    /// 2. TOML configuration file (explicit path, else the first default location found)
    /// 3. Environment variables, e.g. `PROTON__BINDINGS__DUPLICATE_POLICY=override`
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(config_path) = &self.config_path {
            if config_path.exists() {
                figment = figment.merge(Toml::file(config_path));
                log_config_loaded(config_path, true);
            } else {
                log_config_loaded(config_path, false);
            }
        } else if let Some(default_path) = Self::find_default_config_path() {
            figment = figment.merge(Toml::file(&default_path));
            log_config_loaded(&default_path, true);
        }

        figment = figment.merge(Env::prefixed(&format!("{}__", self.env_prefix)).split("__"));

        let app_config: AppConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        validate_app_config(&app_config)?;

        Ok(app_config)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(config).context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string).io_context("Failed to write config file")?;

        Ok(())
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let mut candidates = vec![
            current_dir.join(DEFAULT_CONFIG_FILENAME),
            current_dir
                .join(DEFAULT_CONFIG_DIR)
                .join(DEFAULT_CONFIG_FILENAME),
        ];
        if let Some(dir) = dirs::config_dir() {
            candidates.push(dir.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME));
        }

        candidates.into_iter().find(|path| path.exists())
    }
}

/// Validate application configuration
///
/// Every token in the default table must be non-empty and appear once.
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    parse_log_level(&config.logging.level)?;

    let mut seen: HashSet<&str> = [
        APPLICATION_TOKEN,
        CONTEXT_TOKEN,
        HANDLER_TOKEN,
        OBSERVER_MANAGER_TOKEN,
    ]
    .into_iter()
    .collect();

    for service in &config.bindings.system_services {
        if service.token.trim().is_empty() {
            return Err(Error::configuration("System service token cannot be empty"));
        }
        if service.lookup_key.trim().is_empty() {
            return Err(Error::configuration(format!(
                "System service '{}' has an empty lookup key",
                service.token
            )));
        }
        if !seen.insert(service.token.as_str()) {
            return Err(Error::configuration(format!(
                "Token '{}' appears more than once in the binding table",
                service.token
            )));
        }
    }

    for capability in &config.bindings.optional_capabilities {
        if capability.trim().is_empty() {
            return Err(Error::configuration("Optional capability name cannot be empty"));
        }
        if !seen.insert(capability.as_str()) {
            return Err(Error::configuration(format!(
                "Token '{capability}' appears more than once in the binding table"
            )));
        }
    }

    Ok(())
}
