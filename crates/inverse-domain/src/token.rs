//! Token contracts
//!
//! A token is a zero-sized marker type naming an abstract capability. The
//! registry is parameterized by a [`TokenSet`], and only accepts tokens that
//! declare membership of that set, so the legal token set and each token's
//! service type are checked at compile time.
//!
//! ```
//! use inverse_domain::token::{Token, TokenSet};
//!
//! pub struct Billing;
//! impl TokenSet for Billing {}
//!
//! pub trait Payments: Send + Sync {
//!     fn provider(&self) -> &str;
//! }
//!
//! pub struct PaymentsToken;
//!
//! impl Token for PaymentsToken {
//!     type Set = Billing;
//!     type Service = dyn Payments;
//!     type Args = ();
//!     const NAME: &'static str = "payments";
//! }
//! ```

/// Closed set of tokens a registry accepts
pub trait TokenSet: 'static {}

/// Marker for one abstract dependency
pub trait Token: 'static {
    /// Token set this token belongs to
    type Set: TokenSet;

    /// Type resolved for this token
    type Service: ?Sized + Send + Sync + 'static;

    /// Arguments forwarded to a factory provider
    type Args: 'static;

    /// Identifier used in diagnostics
    const NAME: &'static str;
}
