//! Provider result lifetime policies

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifetime policy applied to a provider's result
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    /// A new instance on every resolution
    #[default]
    Unscoped,
    /// Provider invoked at most once; the result is cached for the registry's lifetime
    Application,
}

impl Scope {
    /// Whether results are cached
    pub fn is_cached(self) -> bool {
        matches!(self, Self::Application)
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unscoped => f.write_str("unscoped"),
            Self::Application => f.write_str("application"),
        }
    }
}
