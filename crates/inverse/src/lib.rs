//! # Inverse
//!
//! A minimal dependency-injection registry: tokens map to providers, and a
//! registry can be partitioned into child registries selected by a predicate
//! over their context keys.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use inverse::{Registry, Token, TokenSet, field_equals};
//! use serde_json::json;
//!
//! pub trait Payments: Send + Sync {
//!     fn provider(&self) -> &'static str;
//! }
//!
//! struct PayPal;
//! impl Payments for PayPal {
//!     fn provider(&self) -> &'static str {
//!         "paypal"
//!     }
//! }
//!
//! struct Stripe;
//! impl Payments for Stripe {
//!     fn provider(&self) -> &'static str {
//!         "stripe"
//!     }
//! }
//!
//! struct Billing;
//! impl TokenSet for Billing {}
//!
//! struct PaymentsToken;
//! impl Token for PaymentsToken {
//!     type Set = Billing;
//!     type Service = dyn Payments;
//!     type Args = ();
//!     const NAME: &'static str = "payments";
//! }
//!
//! let paypal: Arc<dyn Payments> = Arc::new(PayPal);
//! let stripe: Arc<dyn Payments> = Arc::new(Stripe);
//!
//! let mut registry: Registry<Billing> = Registry::new("billing");
//! registry
//!     .create_context(json!({ "provider": "paypal" }))
//!     .set_instance(PaymentsToken, paypal);
//! registry
//!     .create_context(json!({ "provider": "stripe" }))
//!     .set_instance(PaymentsToken, stripe);
//!
//! let payments = registry
//!     .select(field_equals("provider", "stripe"))?
//!     .get(PaymentsToken)?;
//! assert_eq!(payments.provider(), "stripe");
//! # Ok::<(), inverse::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Registry engine, tokens, providers and errors
//! - `infrastructure` - Configuration, logging and root registry bootstrap

/// Domain layer - registry engine and error types
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use inverse_domain::*;
}

/// Infrastructure layer - configuration, logging and bootstrap
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use inverse_infrastructure::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::*;

// Re-export bootstrap entry points at the crate root
pub use infrastructure::{AppConfig, ConfigLoader, init_logging, root_registry};
