//! Root registry bootstrap
//!
//! ```text
//! ConfigLoader → AppConfig ─┬─ logging  → init_logging
//!                           └─ registry → root_registry → Registry<S, C>
//! ```

use inverse_domain::registry::Registry;
use inverse_domain::token::TokenSet;
use tracing::info;

use crate::config::RegistryConfig;

/// Create the root registry named by configuration
pub fn root_registry<S: TokenSet, C>(config: &RegistryConfig) -> Registry<S, C> {
    info!(registry = %config.id, "Root registry created");
    Registry::new(config.id.as_str())
}
