//! # Proton Inject Domain
//!
//! Values and port traits shared by the binding registrar and the injection
//! engine that consumes its output.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | Error enum and `Result` alias |
//! | [`value_objects`] | Tokens, scopes, binding entries |
//! | [`ports`] | Registry, provider, listener and module traits |

pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
