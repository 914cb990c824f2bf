//! # Inverse Domain
//!
//! Core of the Inverse dependency-injection registry.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`token`] | Token and token-set contracts |
//! | [`provider`] | Instance and factory providers |
//! | [`context`] | Context key types and predicates |
//! | [`registry`] | Token registry with context partitioning |
//! | [`error`] | Error taxonomy |
//!
//! Resolution is synchronous. Providers may expose async operations; the
//! registry stores and returns them without awaiting anything.

pub mod context;
pub mod error;
pub mod provider;
pub mod registry;
pub mod token;

// Re-export commonly used types
pub use context::{JsonContext, field_equals};
pub use error::{BoxError, Error, ErrorKind, Result};
pub use provider::{Factory, Provider, ProviderKind};
pub use registry::Registry;
pub use token::{Token, TokenSet};
