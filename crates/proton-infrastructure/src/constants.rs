//! Infrastructure layer constants

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "proton.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "proton";

/// Environment variable prefix for configuration (nested keys split on `__`)
pub const CONFIG_ENV_PREFIX: &str = "PROTON";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "PROTON_LOG";

/// Default log file stem when the configured path has none
pub const DEFAULT_LOG_FILE_STEM: &str = "proton";

// ============================================================================
// BINDING TOKENS
// ============================================================================

/// Token of the process-wide application object
pub const APPLICATION_TOKEN: &str = "Application";

/// Token of the current context
pub const CONTEXT_TOKEN: &str = "Context";

/// Token of the main-thread dispatch handle
pub const HANDLER_TOKEN: &str = "Handler";

/// Token of the observer manager self-binding
pub const OBSERVER_MANAGER_TOKEN: &str = "ObserverManager";

/// Default `(token, lookup key)` pairs for keyed system services
pub const DEFAULT_SYSTEM_SERVICES: &[(&str, &str)] = &[
    ("ActivityManager", "activity"),
    ("AlarmManager", "alarm"),
    ("AudioManager", "audio"),
    ("ConnectivityManager", "connectivity"),
    ("NotificationManager", "notification"),
    ("PowerManager", "power"),
    ("WifiManager", "wifi"),
];

/// Default conditionally available capabilities
pub const DEFAULT_OPTIONAL_CAPABILITIES: &[&str] = &["AccountManager"];
