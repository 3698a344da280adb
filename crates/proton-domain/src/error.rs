//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for Proton Inject
#[derive(Error, Debug)]
pub enum Error {
    /// A required argument was absent or malformed
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// Operation attempted in a state that does not allow it
    #[error("Illegal state: {message}")]
    IllegalState {
        /// Description of the violated state
        message: String,
    },

    /// A conditionally available capability is missing on this platform
    #[error("Capability unavailable: {capability}")]
    CapabilityUnavailable {
        /// Name of the missing capability
        capability: String,
    },

    /// A token was bound twice under a rejecting duplicate policy
    #[error("Duplicate binding for token '{token}'")]
    DuplicateBinding {
        /// The token that was already bound
        token: String,
    },

    /// The platform failed to hand out a service
    #[error("Platform error: {message}")]
    Platform {
        /// Description of the platform failure
        message: String,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Infrastructure operation error
    #[error("Infrastructure error: {message}")]
    Infrastructure {
        /// Description of the infrastructure error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create an illegal state error
    pub fn illegal_state<S: Into<String>>(message: S) -> Self {
        Self::IllegalState {
            message: message.into(),
        }
    }

    /// Create a capability unavailable error
    pub fn capability_unavailable<S: Into<String>>(capability: S) -> Self {
        Self::CapabilityUnavailable {
            capability: capability.into(),
        }
    }

    /// Create a duplicate binding error
    pub fn duplicate_binding<S: Into<String>>(token: S) -> Self {
        Self::DuplicateBinding {
            token: token.into(),
        }
    }

    /// Create a platform error
    pub fn platform<S: Into<String>>(message: S) -> Self {
        Self::Platform {
            message: message.into(),
        }
    }
}

// Configuration and infrastructure error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an infrastructure error
    pub fn infrastructure<S: Into<String>>(message: S) -> Self {
        Self::Infrastructure {
            message: message.into(),
            source: None,
        }
    }

    /// Create an infrastructure error with source
    pub fn infrastructure_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Infrastructure {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Whether this error reports a guard/session violation
    pub fn is_illegal_state(&self) -> bool {
        matches!(self, Self::IllegalState { .. })
    }

    /// Whether this error reports an absent or malformed argument
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}
