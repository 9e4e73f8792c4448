//! Constructor Parameter Tests
//!
//! Required, optional, keyword and rest parameter handling by the object
//! builder, driven through the injector.

use std::sync::Arc;

use ruse_application::TypeCatalog;
use ruse_domain::{Arguments, Error, Settings, TypeDescriptor, service};
use ruse_infrastructure::di::{Injector, ObjectBuilder};

use super::fixtures::{
    DEFAULT_GREETING, DEFAULT_RETRIES, Greeter, Logger, Signup, configured, injector,
};

#[test]
fn test_required_keyword_is_injected() {
    let injector = configured(Settings::new().value("smtp_host", String::from("mail.local")));

    let signup = injector.get_as::<Signup, _>("signup").unwrap();

    assert_eq!(signup.mailer.host.as_str(), "mail.local");
    assert_eq!(signup.retries, DEFAULT_RETRIES);
}

#[test]
fn test_optional_keyword_is_injected_when_resolvable() {
    let injector = configured(
        Settings::new()
            .value("smtp_host", String::from("mail.local"))
            .value("retries", 9_u32),
    );

    let signup = injector.get_as::<Signup, _>("signup").unwrap();
    assert_eq!(signup.retries, 9);
}

#[test]
fn test_unresolvable_required_keyword_is_unknown_service() {
    let injector = injector();
    match injector.get("signup") {
        Err(Error::UnknownService { identifier }) => assert_eq!(identifier, "smtp_host"),
        other => panic!("Expected UnknownService, got {:?}", other.err()),
    }
    assert!(!injector.is_cached("signup"));
}

#[test]
fn test_optional_positional_falls_back_to_default() {
    let greeter = injector().get_as::<Greeter, _>("greeter").unwrap();
    assert_eq!(greeter.greeting, DEFAULT_GREETING);
}

#[test]
fn test_optional_positional_is_injected_when_registered() {
    let injector = configured(Settings::new().value("greeting", String::from("welcome")));
    let greeter = injector.get_as::<Greeter, _>("greeter").unwrap();
    assert_eq!(greeter.greeting, "welcome");
}

#[test]
fn test_rest_parameter_is_never_injected() {
    let injector = configured(Settings::new().value("sinks", String::from("stdout")));
    let logger = injector.get_as::<Logger, _>("logger").unwrap();
    assert_eq!(logger.argument_count, 0);
}

#[test]
fn test_keyword_collection_omitted_when_no_keywords_resolved() {
    let descriptor = TypeDescriptor::builder("Probe")
        .required("service_a")
        .keyword_optional("missing")
        .build(|_: Arguments| Ok(()));
    let injector = injector();

    let arguments = ObjectBuilder::new()
        .resolve_arguments(&descriptor, &injector)
        .unwrap();

    assert!(arguments.keywords().is_none());
    assert_eq!(arguments.positional().len(), 1);
    assert_eq!(arguments.positional()[0].name(), "service_a");
}

#[test]
fn test_arguments_keep_declared_order() {
    let descriptor = TypeDescriptor::builder("Probe")
        .required("second")
        .optional("absent")
        .required("first")
        .keyword("third")
        .build(|_: Arguments| Ok(()));
    let injector = configured(
        Settings::new()
            .value("first", 1_u8)
            .value("second", 2_u8)
            .value("third", 3_u8),
    );

    let arguments = ObjectBuilder::new()
        .resolve_arguments(&descriptor, &injector)
        .unwrap();

    let names: Vec<&str> = arguments.positional().iter().map(|a| a.name()).collect();
    assert_eq!(names, ["second", "first"]);
    assert!(arguments.keywords().is_some_and(|kw| kw.contains_key("third")));
}

#[test]
fn test_constructor_failure_propagates_as_construction_error() {
    let catalog = TypeCatalog::new().with(
        TypeDescriptor::builder("Strict")
            .required("port")
            .build(|args: Arguments| args.require::<u16>("port").map(|_| ())),
    );
    let injector = Injector::with_settings(
        Arc::new(catalog),
        Settings::new().shared_value("port", service(String::from("eighty"))),
    )
    .unwrap();

    match injector.get("strict") {
        Err(Error::Construction { type_name, .. }) => assert_eq!(type_name, "Strict"),
        other => panic!("Expected Construction error, got {:?}", other.err()),
    }
}

#[test]
fn test_blank_parameter_name_is_construction_error() {
    let catalog = TypeCatalog::new().with(
        TypeDescriptor::builder("Broken")
            .required(" ")
            .build(|_: Arguments| Ok(())),
    );
    let injector = Injector::new(Arc::new(catalog));

    assert!(matches!(
        injector.get("broken"),
        Err(Error::Construction { .. })
    ));
}

#[test]
fn test_missing_required_keyword_dependency_is_unknown_service() {
    let catalog = TypeCatalog::new().with(
        TypeDescriptor::builder("Courier")
            .keyword("dispatcher")
            .build(|_: Arguments| Ok(())),
    );
    let injector = Injector::new(Arc::new(catalog));

    match injector.get("courier") {
        Err(Error::UnknownService { identifier }) => assert_eq!(identifier, "dispatcher"),
        other => panic!("Expected UnknownService, got {:?}", other.err()),
    }
}
