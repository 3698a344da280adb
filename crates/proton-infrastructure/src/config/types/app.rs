//! Main application configuration

use serde::{Deserialize, Serialize};

use super::{BindingsConfig, LoggingConfig};

/// Root configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default binding table
    pub bindings: BindingsConfig,

    /// Logging
    pub logging: LoggingConfig,
}
