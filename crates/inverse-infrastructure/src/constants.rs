//! Infrastructure layer constants

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "inverse.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "inverse";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "INVERSE";

/// Separator between the prefix and nested keys in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// REGISTRY CONSTANTS
// ============================================================================

/// Identifier of the root registry when none is configured
pub const DEFAULT_REGISTRY_ID: &str = "root";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the configured log filter
pub const LOG_FILTER_ENV: &str = "INVERSE_LOG";

/// File name prefix for rolling log files
pub const LOG_FILE_PREFIX: &str = "inverse";
