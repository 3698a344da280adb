//! Binding registrar
//!
//! ```text
//! AppConfig ──▶ DefaultModuleBuilder ──▶ DefaultModule
//!                                            │ configure(bindings, provider_listeners, field_listeners)
//!                                            ▼
//!                                    BindingContext (one session)
//!                                            │
//!                     ┌──────────────────────┼──────────────────────┐
//!                     ▼                      ▼                      ▼
//!               default table        extra contributor  …   extra contributor
//! ```

pub mod bootstrap;
pub mod context;
pub mod contributors;
pub mod default_module;

pub use bootstrap::{bootstrap, ConfiguredRegistries};
pub use context::BindingContext;
pub use contributors::{contributor, default_table, BindingContributor, DefaultTable};
pub use default_module::{DefaultModule, DefaultModuleBuilder, ModuleState};
