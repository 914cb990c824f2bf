//! Error handling types

use std::fmt;

use thiserror::Error;

use crate::provider::ProviderKind;

/// Result type alias for registry operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed error raised by a fallible factory
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for the Inverse registry
#[derive(Error, Debug)]
pub enum Error {
    /// A token was resolved that has no registered provider
    #[error(
        "Dependency Violation: '{registry}' container failed to resolve unregistered dependency token: {token}"
    )]
    MissingDependency {
        /// Id of the registry that was queried
        registry: String,
        /// Name of the unregistered token
        token: String,
    },

    /// No child context satisfied the selection predicate
    #[error(
        "Dependency Violation: '{registry}' container failed to resolve unregistered sub container"
    )]
    MissingChildContainer {
        /// Id of the registry whose contexts were scanned
        registry: String,
    },

    /// The token holds a provider of the other kind
    #[error(
        "Dependency Violation: '{registry}' container resolved token {token} as {expected} but it is registered as {found}"
    )]
    ProviderKindMismatch {
        /// Id of the registry that was queried
        registry: String,
        /// Name of the token
        token: String,
        /// Kind required by the accessor
        expected: ProviderKind,
        /// Kind actually registered
        found: ProviderKind,
    },

    /// A factory failed while building a new instance
    #[error(transparent)]
    Construction(BoxError),

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxError>,
    },

    /// Infrastructure failure outside configuration and I/O
    #[error("Infrastructure error: {message}")]
    Infrastructure {
        /// Description of the failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxError>,
    },

    /// I/O operation error
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxError>,
    },
}

/// Discriminant tag of an [`Error`], for programmatic matching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MissingDependency,
    MissingChildContainer,
    ProviderKindMismatch,
    Construction,
    Configuration,
    Infrastructure,
    Io,
}

impl ErrorKind {
    /// Stable tag name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MissingDependency => "MissingDependencyError",
            Self::MissingChildContainer => "MissingChildContainerError",
            Self::ProviderKindMismatch => "ProviderKindMismatchError",
            Self::Construction => "ConstructionError",
            Self::Configuration => "ConfigurationError",
            Self::Infrastructure => "InfrastructureError",
            Self::Io => "IoError",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Error {
    /// Discriminant tag of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingDependency { .. } => ErrorKind::MissingDependency,
            Self::MissingChildContainer { .. } => ErrorKind::MissingChildContainer,
            Self::ProviderKindMismatch { .. } => ErrorKind::ProviderKindMismatch,
            Self::Construction(_) => ErrorKind::Construction,
            Self::Configuration { .. } => ErrorKind::Configuration,
            Self::Infrastructure { .. } => ErrorKind::Infrastructure,
            Self::Io { .. } => ErrorKind::Io,
        }
    }
}

// Registry error creation methods
impl Error {
    /// Create a missing dependency error
    pub fn missing_dependency<R: Into<String>, T: Into<String>>(registry: R, token: T) -> Self {
        Self::MissingDependency {
            registry: registry.into(),
            token: token.into(),
        }
    }

    /// Create a missing child container error
    pub fn missing_child_container<R: Into<String>>(registry: R) -> Self {
        Self::MissingChildContainer {
            registry: registry.into(),
        }
    }

    /// Create a provider kind mismatch error
    pub fn kind_mismatch<R: Into<String>, T: Into<String>>(
        registry: R,
        token: T,
        expected: ProviderKind,
        found: ProviderKind,
    ) -> Self {
        Self::ProviderKindMismatch {
            registry: registry.into(),
            token: token.into(),
            expected,
            found,
        }
    }

    /// Wrap a factory failure without altering it
    pub fn construction<E: Into<BoxError>>(source: E) -> Self {
        Self::Construction(source.into())
    }
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Infrastructure error creation methods
impl Error {
    /// Create an infrastructure error
    pub fn infrastructure<S: Into<String>>(message: S) -> Self {
        Self::Infrastructure {
            message: message.into(),
            source: None,
        }
    }
}

// I/O error creation methods
impl Error {
    /// Create an I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io {
            message: message.into(),
            source: None,
        }
    }

    /// Create an I/O error with source
    pub fn io_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
