//! Provider values stored under tokens
//!
//! A provider is either a ready instance shared by every resolution, or a
//! factory that builds a fresh instance per call from caller-supplied
//! arguments. The kind is fixed at registration time so the registry can
//! reject an accessor that does not match.

use std::fmt;
use std::sync::Arc;

use crate::error::BoxError;
use crate::token::Token;

/// Shared factory closure for a token
pub type Factory<K> = Arc<
    dyn Fn(<K as Token>::Args) -> Result<Box<<K as Token>::Service>, BoxError> + Send + Sync,
>;

/// Which accessor a provider answers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    /// Ready instance, resolved with `get`
    Instance,
    /// Constructor, resolved with `instantiate`
    Factory,
}

impl ProviderKind {
    /// Lowercase label used in diagnostics
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Instance => "instance",
            Self::Factory => "factory",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Provider registered under token `K`
pub enum Provider<K: Token> {
    /// Singleton-like instance, returned as-is on every resolution
    Instance(Arc<K::Service>),
    /// Transient constructor, invoked once per resolution
    Factory(Factory<K>),
}

impl<K: Token> Provider<K> {
    /// Wrap a ready instance
    pub fn instance(service: Arc<K::Service>) -> Self {
        Self::Instance(service)
    }

    /// Wrap an infallible constructor
    pub fn factory<F>(build: F) -> Self
    where
        F: Fn(K::Args) -> Box<K::Service> + Send + Sync + 'static,
    {
        Self::Factory(Arc::new(move |args| Ok(build(args))))
    }

    /// Wrap a fallible constructor
    ///
    /// Errors returned by `build` reach the caller of `instantiate` unchanged.
    pub fn try_factory<F, E>(build: F) -> Self
    where
        F: Fn(K::Args) -> Result<Box<K::Service>, E> + Send + Sync + 'static,
        E: Into<BoxError>,
    {
        Self::Factory(Arc::new(move |args| build(args).map_err(Into::into)))
    }

    /// Kind of this provider
    pub fn kind(&self) -> ProviderKind {
        match self {
            Self::Instance(_) => ProviderKind::Instance,
            Self::Factory(_) => ProviderKind::Factory,
        }
    }
}

impl<K: Token> Clone for Provider<K> {
    fn clone(&self) -> Self {
        match self {
            Self::Instance(service) => Self::Instance(Arc::clone(service)),
            Self::Factory(build) => Self::Factory(Arc::clone(build)),
        }
    }
}

impl<K: Token> fmt::Debug for Provider<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Provider")
            .field("token", &K::NAME)
            .field("kind", &self.kind())
            .finish()
    }
}
