//! Configuration management
//!
//! Figment-based loading of the registry and logging settings.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, LoggingConfig, RegistryConfig};
