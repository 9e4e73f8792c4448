//! Cycle Detection Tests

use ruse_domain::{Error, Settings};

use super::fixtures::{configured, injector};

#[test]
fn test_mutual_dependency_is_detected() {
    let injector = injector();
    match injector.get("chicken") {
        Err(Error::CircularDependency { identifier, chain }) => {
            assert_eq!(identifier, "chicken");
            assert_eq!(chain, ["chicken", "egg", "chicken"]);
        }
        other => panic!("Expected CircularDependency, got {:?}", other.err()),
    }
}

#[test]
fn test_cycle_reported_from_its_first_member() {
    match injector().get("egg") {
        Err(Error::CircularDependency { identifier, chain }) => {
            assert_eq!(identifier, "egg");
            assert_eq!(chain, ["egg", "chicken", "egg"]);
        }
        other => panic!("Expected CircularDependency, got {:?}", other.err()),
    }
}

#[test]
fn test_self_dependency_through_optional_parameter() {
    let injector = injector();
    assert!(matches!(
        injector.get("ouroboros"),
        Err(Error::CircularDependency { .. })
    ));
}

#[test]
fn test_injector_recovers_after_cycle() {
    let injector = injector();

    assert!(injector.get("chicken").is_err());
    assert_eq!(injector.cached_len(), 0);

    assert!(injector.get("service_b").is_ok());
    assert!(matches!(
        injector.get("egg"),
        Err(Error::CircularDependency { .. })
    ));
}

#[test]
fn test_shared_dependency_is_not_a_cycle() {
    let injector = configured(
        Settings::new()
            .alias("left", "service_b")
            .alias("right", "service_b"),
    );

    injector.get("left").unwrap();
    injector.get("right").unwrap();
    assert_eq!(injector.cached_len(), 2);
}
