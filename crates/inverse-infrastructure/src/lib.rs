//! # Inverse Infrastructure
//!
//! Cross-cutting concerns around the registry engine.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment configuration (defaults, TOML, environment) |
//! | [`logging`] | Structured logging with tracing |
//! | [`bootstrap`] | Root registry creation from configuration |
//! | [`error_ext`] | Context helpers mapping foreign errors into domain errors |
//! | [`constants`] | Centralized configuration constants |

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;

// Re-export commonly used types
pub use bootstrap::root_registry;
pub use config::{AppConfig, ConfigLoader, LoggingConfig, RegistryConfig};
pub use error_ext::ErrorContext;
pub use logging::init_logging;
