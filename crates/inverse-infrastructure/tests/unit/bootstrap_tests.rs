//! Bootstrap Tests

use std::sync::Arc;

use inverse_domain::{Error, Registry, Token, TokenSet};
use inverse_infrastructure::bootstrap::root_registry;
use inverse_infrastructure::config::RegistryConfig;
use inverse_infrastructure::constants::DEFAULT_REGISTRY_ID;

struct App;
impl TokenSet for App {}

struct Banner;
impl Token for Banner {
    type Set = App;
    type Service = str;
    type Args = ();
    const NAME: &'static str = "banner";
}

#[test]
fn test_root_registry_uses_configured_id() {
    let config = RegistryConfig {
        id: "payments".to_string(),
    };
    let registry: Registry<App> = root_registry(&config);

    assert_eq!(registry.id(), "payments");
    assert!(registry.is_empty());
    match registry.get(Banner) {
        Err(Error::MissingDependency { registry, token }) => {
            assert_eq!(registry, "payments");
            assert_eq!(token, "banner");
        }
        _ => panic!("Expected MissingDependency error"),
    }
}

#[test]
fn test_root_registry_default_id() {
    let mut registry: Registry<App, u8> = root_registry(&RegistryConfig::default());
    registry
        .create_context(1)
        .set_instance(Banner, Arc::<str>::from("welcome"));

    assert_eq!(registry.id(), DEFAULT_REGISTRY_ID);
    let child = registry.select(|tier| *tier == 1).unwrap();
    assert_eq!(child.id(), DEFAULT_REGISTRY_ID);
    assert_eq!(&*child.get(Banner).unwrap(), "welcome");
}
