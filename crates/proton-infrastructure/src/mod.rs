//! # Proton Inject Infrastructure
//!
//! The default binding registrar and the pieces it is made of.
//!
//! ### Registration
//! | Module | Description |
//! |--------|-------------|
//! | [`di`] | `DefaultModule`, sessions, contributors, bootstrap |
//! | [`capabilities`] | Link-time capability registry and memoized probe |
//! | [`providers`] | Built-in providers |
//! | [`observer`] | Observer manager and its provider listener |
//! | [`registry`] | In-memory binding and listener registries |
//!
//! ### Configuration & Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-based configuration |
//! | [`logging`] | Structured logging with tracing |
//! | [`constants`] | Default tokens and configuration constants |

pub mod capabilities;
pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod logging;
pub mod observer;
pub mod providers;
pub mod registry;

pub use di::{bootstrap, DefaultModule};
pub use error_ext::ErrorContext;
