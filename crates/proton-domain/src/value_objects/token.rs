//! Capability tokens and field markers

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Identifier for an abstract capability (e.g. `"WifiManager"`)
///
/// Tokens compare by name only. Two tokens with the same name denote the
/// same capability in a registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeToken(Cow<'static, str>);

impl TypeToken {
    /// Create a token from a static or owned name
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    /// Token named after the last path segment of `T`
    ///
    /// `TypeToken::of::<crate::ObserverManager>()` is `"ObserverManager"`.
    pub fn of<T: ?Sized>() -> Self {
        let full = std::any::type_name::<T>();
        let base = full.split('<').next().unwrap_or(full);
        let short = base.rsplit("::").next().unwrap_or(base);
        Self(Cow::Owned(short.to_string()))
    }

    /// Token name
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for TypeToken {
    fn from(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }
}

impl From<String> for TypeToken {
    fn from(name: String) -> Self {
        Self(Cow::Owned(name))
    }
}

/// Marker identifying a field-injection point (the annotation key)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MarkerKey(Cow<'static, str>);

impl MarkerKey {
    /// Create a marker key
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    /// Marker name
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MarkerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for MarkerKey {
    fn from(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }
}
