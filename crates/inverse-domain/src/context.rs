//! Context keys
//!
//! Any value can key a child registry. The default is a JSON object, matched
//! by caller-supplied predicates; the registry itself never looks inside it.

use serde_json::Value;

/// Default context key type
pub type JsonContext = Value;

/// Predicate matching JSON contexts whose `field` equals `expected`
///
/// ```
/// use inverse_domain::context::field_equals;
/// use serde_json::json;
///
/// let is_stripe = field_equals("provider", "stripe");
/// assert!(is_stripe(&json!({ "provider": "stripe" })));
/// assert!(!is_stripe(&json!({ "provider": "paypal" })));
/// assert!(!is_stripe(&json!("stripe")));
/// ```
pub fn field_equals<V>(field: &str, expected: V) -> impl Fn(&JsonContext) -> bool + use<V>
where
    V: Into<Value>,
{
    let field = field.to_string();
    let expected = expected.into();
    move |context| context.get(&field) == Some(&expected)
}
