//! Configuration types module

pub mod app;
pub mod bindings;
pub mod logging;

pub use app::AppConfig;
pub use bindings::{BindingsConfig, DuplicatePolicy, SystemServiceConfig};
pub use logging::LoggingConfig;
