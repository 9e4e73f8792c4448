//! Injector Tests
//!
//! Value identity, per-injector singletons, aliasing, configuration merging
//! and identifier validation.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use ruse_domain::{Error, Identifier, Settings, same_service, service};

use super::fixtures::{Mailer, ServiceA, ServiceB, configured, injector};

#[test]
fn test_value_is_returned_with_same_identity() {
    let value = service(String::from("mail.local"));
    let injector = configured(Settings::new().shared_value("smtp_host", Arc::clone(&value)));

    let first = injector.get("smtp_host").unwrap();
    let second = injector.get("smtp_host").unwrap();

    assert!(same_service(&first, &value));
    assert!(same_service(&first, &second));
}

#[test]
fn test_type_instances_are_singletons_per_injector() {
    let injector = injector();

    let first = injector.get("service_b").unwrap();
    let second = injector.get("service_b").unwrap();
    assert!(same_service(&first, &second));

    let service_b = injector.get_as::<ServiceB, _>("service_b").unwrap();
    let service_a = injector.get_as::<ServiceA, _>("service_a").unwrap();
    assert!(Arc::ptr_eq(&service_b.service_a, &service_a));
}

#[test]
fn test_separate_injectors_never_share_instances() {
    let first = injector();
    let second = injector();

    let a = first.get("service_a").unwrap();
    let b = second.get("service_a").unwrap();

    assert!(!same_service(&a, &b));
}

#[test]
fn test_factory_runs_once_per_injector() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let settings = Settings::new().factory("stamp", move || counter.fetch_add(1, Ordering::SeqCst));

    let injector = configured(settings.clone());
    let first = injector.get("stamp").unwrap();
    let second = injector.get("stamp").unwrap();
    assert!(same_service(&first, &second));
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    configured(settings).get("stamp").unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn test_factory_is_invoked_lazily() {
    let host = Arc::new(std::sync::Mutex::new(String::from("initial")));
    let source = Arc::clone(&host);
    let injector = configured(Settings::new().factory("smtp_host", move || {
        source.lock().map(|h| h.clone()).unwrap_or_default()
    }));

    *host.lock().unwrap() = String::from("late.local");

    let mailer = injector.get_as::<Mailer, _>("mailer").unwrap();
    assert_eq!(mailer.host.as_str(), "late.local");
}

#[test]
fn test_alias_resolves_to_target_and_shares_its_slot() {
    let injector = configured(Settings::new().alias("primary", "service_a"));

    let via_alias = injector.get("primary").unwrap();
    let direct = injector.get("service_a").unwrap();

    assert!(same_service(&via_alias, &direct));
    assert!(injector.is_cached("service_a"));
    assert!(!injector.is_cached("primary"));
    assert_eq!(injector.cached_len(), 1);
}

#[test]
fn test_alias_is_applied_before_own_resolvers() {
    let injector = configured(
        Settings::new()
            .value("smtp_host", String::from("direct"))
            .value("backup_host", String::from("backup"))
            .alias("smtp_host", "backup_host"),
    );

    let host = injector.get_as::<String, _>("smtp_host").unwrap();
    assert_eq!(host.as_str(), "backup");
}

#[test]
fn test_alias_is_rewritten_only_once() {
    let injector = configured(
        Settings::new()
            .alias("a", "b")
            .alias("b", "service_a")
            .value("b", 7_u32),
    );

    let value = injector.get_as::<u32, _>("a").unwrap();
    assert_eq!(*value, 7);
}

#[test]
fn test_unknown_identifier_fails() {
    let injector = injector();
    match injector.get("missing_service") {
        Err(Error::UnknownService { identifier }) => assert_eq!(identifier, "missing_service"),
        other => panic!("Expected UnknownService, got {:?}", other.err()),
    }
    assert!(!injector.can_resolve("missing_service"));
}

#[test]
fn test_unknown_error_reports_alias_target() {
    let injector = configured(Settings::new().alias("mailer", "ghost"));
    match injector.get("mailer") {
        Err(Error::UnknownService { identifier }) => assert_eq!(identifier, "ghost"),
        other => panic!("Expected UnknownService, got {:?}", other.err()),
    }
}

#[test]
fn test_blank_and_absent_identifiers_are_invalid() {
    let injector = injector();
    let absent: Option<&str> = None;

    assert!(matches!(
        injector.get(absent),
        Err(Error::InvalidIdentifier { .. })
    ));
    for blank in ["", "   "] {
        assert!(matches!(
            injector.get(blank),
            Err(Error::InvalidIdentifier { .. })
        ));
        assert!(!injector.can_resolve(blank));
    }
    assert!(!injector.can_resolve(absent));
}

#[test]
fn test_can_resolve_does_not_build() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let injector = configured(
        Settings::new()
            .factory("stamp", move || counter.fetch_add(1, Ordering::SeqCst))
            .alias("timestamp", "stamp"),
    );

    assert!(injector.can_resolve("stamp"));
    assert!(injector.can_resolve("timestamp"));
    assert!(injector.can_resolve("service_b"));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(injector.cached_len(), 0);
}

#[test]
fn test_configure_merges_and_applies_to_later_lookups() {
    let mut injector = injector();
    assert!(!injector.can_resolve("smtp_host"));

    injector
        .configure(Settings::new().value("smtp_host", String::from("first")))
        .unwrap();
    injector
        .configure(Settings::new().value("retries", 5_u32).namespace("N1"))
        .unwrap();

    assert!(injector.can_resolve("smtp_host"));
    assert!(injector.can_resolve("retries"));
    assert!(injector.can_resolve("foo"));
    assert_eq!(injector.settings().values().len(), 2);
}

#[test]
fn test_configure_keeps_cached_services() {
    let mut injector = configured(Settings::new().value("smtp_host", String::from("first")));
    let before = injector.get("smtp_host").unwrap();

    injector
        .configure(Settings::new().value("smtp_host", String::from("second")))
        .unwrap();

    assert!(same_service(&before, &injector.get("smtp_host").unwrap()));
}

#[test]
fn test_configure_rejects_malformed_settings_without_merging() {
    let mut injector = injector();

    let result = injector.configure(Settings::new().value("ok", 1_u8).alias("bad", " "));

    assert!(matches!(result, Err(Error::Configuration { .. })));
    assert!(injector.settings().is_empty());
}

#[test]
fn test_get_as_reports_type_mismatch() {
    let injector = configured(Settings::new().value("retries", 3_u32));
    match injector.get_as::<String, _>("retries") {
        Err(Error::TypeMismatch { identifier, .. }) => assert_eq!(identifier, "retries"),
        other => panic!("Expected TypeMismatch, got {:?}", other.err()),
    }
}

#[test]
fn test_identifier_inputs_are_interchangeable() {
    let injector = injector();
    let owned = String::from("service_a");
    let identifier = Identifier::new("service_a").unwrap();

    let a = injector.get("service_a").unwrap();
    assert!(same_service(&a, &injector.get(owned.clone()).unwrap()));
    assert!(same_service(&a, &injector.get(&owned).unwrap()));
    assert!(same_service(&a, &injector.get(&identifier).unwrap()));
    assert!(same_service(&a, &injector.get(Some("service_a")).unwrap()));
}
