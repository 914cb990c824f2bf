//! Context selection with the payments providers

use std::sync::Arc;

use inverse::{Error, JsonContext, Registry, field_equals};
use serde_json::json;

use crate::mocks::{Billing, CONTAINER_ID, PayPal, Payment, Payments, PaymentsToken, Stripe};

fn is_provider(provider: &'static str) -> impl Fn(&JsonContext) -> bool {
    field_equals("provider", provider)
}

fn paypal() -> JsonContext {
    json!({ "provider": "paypal" })
}

fn stripe() -> JsonContext {
    json!({ "provider": "stripe" })
}

fn container() -> Registry<Billing> {
    let mut container = Registry::new(CONTAINER_ID);
    container.create_context(paypal());
    container.create_context(stripe());
    container
}

#[test]
fn test_contexts_are_added_per_key() {
    let container = container();

    assert!(container.context(&paypal()).is_some());
    assert!(container.context(&stripe()).is_some());
    assert!(
        container
            .context(&json!({ "provider": "skrill" }))
            .is_none()
    );
}

#[tokio::test]
async fn test_set_and_resolve_through_filter() {
    let mut container = container();
    let paypal: Arc<dyn Payments> = Arc::new(PayPal);
    let stripe: Arc<dyn Payments> = Arc::new(Stripe);
    container
        .select_mut(is_provider("paypal"))
        .unwrap()
        .set_instance(PaymentsToken, paypal);
    container
        .select_mut(is_provider("stripe"))
        .unwrap()
        .set_instance(PaymentsToken, stripe);

    let payment = container
        .select(is_provider("paypal"))
        .unwrap()
        .get(PaymentsToken)
        .unwrap()
        .create("xyz", "usd", 100)
        .await;
    assert_eq!(
        payment,
        Payment {
            payment_id: "xyz".to_string(),
            customer_id: "xyz".to_string(),
            provider: "paypal".to_string(),
            status: "created".to_string(),
            currency: "usd".to_string(),
            amount: 100,
        }
    );

    let payment = container
        .select(is_provider("stripe"))
        .unwrap()
        .get(PaymentsToken)
        .unwrap()
        .create("xyz", "jpy", 15000)
        .await;
    assert_eq!(payment.customer_id, "xyz");
    assert_eq!(payment.provider, "stripe");
    assert_eq!(payment.currency, "jpy");
    assert_eq!(payment.amount, 15000);
}

#[test]
fn test_missing_sub_container_fails() {
    let container = container();

    match container.select(is_provider("skrill")) {
        Err(Error::MissingChildContainer { registry }) => assert_eq!(registry, CONTAINER_ID),
        other => panic!("Expected MissingChildContainer error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_sub_container_without_dependency_fails() {
    let container = container();

    assert!(matches!(
        container.select(is_provider("paypal")).unwrap().get(PaymentsToken),
        Err(Error::MissingDependency { .. })
    ));
}

#[test]
fn test_parent_and_children_are_isolated() {
    let mut container = container();
    let stripe: Arc<dyn Payments> = Arc::new(Stripe);
    container.set_instance(PaymentsToken, Arc::clone(&stripe));

    assert!(!container.select(is_provider("stripe")).unwrap().has(PaymentsToken));

    container.remove(PaymentsToken);
    container
        .select_mut(is_provider("stripe"))
        .unwrap()
        .set_instance(PaymentsToken, stripe);
    assert!(!container.has(PaymentsToken));
}

#[test]
fn test_equivalent_predicates_pick_first_inserted_key() {
    let mut container: Registry<Billing> = Registry::new(CONTAINER_ID);
    let eu: Arc<dyn Payments> = Arc::new(Stripe);
    let us: Arc<dyn Payments> = Arc::new(Stripe);
    container
        .create_context(json!({ "provider": "stripe", "region": "eu" }))
        .set_instance(PaymentsToken, Arc::clone(&eu));
    container
        .create_context(json!({ "provider": "stripe", "region": "us" }))
        .set_instance(PaymentsToken, Arc::clone(&us));

    assert_eq!(container.context_count(), 2);

    let selected = container
        .select(is_provider("stripe"))
        .unwrap()
        .get(PaymentsToken)
        .unwrap();
    assert!(Arc::ptr_eq(&selected, &eu));

    let us_selected = container
        .select(field_equals("region", "us"))
        .unwrap()
        .get(PaymentsToken)
        .unwrap();
    assert!(Arc::ptr_eq(&us_selected, &us));
}

#[test]
fn test_equal_context_keys_do_not_collide() {
    let mut container: Registry<Billing> = Registry::new(CONTAINER_ID);
    let first: Arc<dyn Payments> = Arc::new(Stripe);
    container
        .create_context(stripe())
        .set_instance(PaymentsToken, Arc::clone(&first));
    container.create_context(stripe());

    assert_eq!(container.context_count(), 2);

    let selected = container.select(is_provider("stripe")).unwrap();
    assert!(selected.has(PaymentsToken));
    assert!(Arc::ptr_eq(&selected.get(PaymentsToken).unwrap(), &first));
}
