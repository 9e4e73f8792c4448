//! Unit tests for type descriptors and constructor arguments

use std::sync::Arc;

use ruse_domain::{Arguments, Error, ParameterKind, TypeDescriptor, downcast, service};

struct Greeter {
    greeting: Arc<String>,
    punctuation: String,
}

fn greeter_descriptor() -> TypeDescriptor {
    TypeDescriptor::builder("Greeter")
        .required("greeting")
        .keyword_optional("punctuation")
        .rest("extra")
        .build(|args: Arguments| {
            let punctuation = args
                .get::<String>("punctuation")?
                .map_or_else(|| "!".to_string(), |p| p.to_string());
            Ok(Greeter {
                greeting: args.require("greeting")?,
                punctuation,
            })
        })
}

#[test]
fn test_builder_keeps_parameter_order_and_kinds() {
    let descriptor = greeter_descriptor();
    let kinds: Vec<(&str, ParameterKind)> = descriptor
        .parameters()
        .iter()
        .map(|p| (p.name(), p.kind()))
        .collect();

    assert_eq!(descriptor.name(), "Greeter");
    assert_eq!(
        kinds,
        [
            ("greeting", ParameterKind::Required),
            ("punctuation", ParameterKind::KeywordOptional),
            ("extra", ParameterKind::Rest),
        ]
    );
}

#[test]
fn test_parameter_kind_predicates() {
    assert!(ParameterKind::Required.is_required());
    assert!(ParameterKind::KeywordRequired.is_required());
    assert!(ParameterKind::KeywordRequired.is_keyword());
    assert!(ParameterKind::Optional.has_default());
    assert!(!ParameterKind::Optional.is_keyword());
    assert!(!ParameterKind::Rest.is_required());
    assert!(!ParameterKind::Rest.has_default());
}

#[test]
fn test_construct_applies_default_for_missing_optional() {
    let mut args = Arguments::new("Greeter");
    args.push_positional("greeting", service(String::from("hello")));

    let built = greeter_descriptor().construct(args).unwrap();
    let greeter = downcast::<Greeter>(&built).unwrap();

    assert_eq!(greeter.greeting.as_str(), "hello");
    assert_eq!(greeter.punctuation, "!");
}

#[test]
fn test_construct_uses_supplied_keyword() {
    let mut args = Arguments::new("Greeter");
    args.push_positional("greeting", service(String::from("hi")));
    args.insert_keyword("punctuation", service(String::from("?")));

    let built = greeter_descriptor().construct(args).unwrap();
    assert_eq!(downcast::<Greeter>(&built).unwrap().punctuation, "?");
}

#[test]
fn test_keyword_collection_absent_until_first_keyword() {
    let mut args = Arguments::new("Greeter");
    assert!(args.keywords().is_none());

    args.insert_keyword("punctuation", service(String::from(".")));
    assert_eq!(args.keywords().map(|kw| kw.len()), Some(1));
    assert!(args.contains("punctuation"));
    assert!(args.positional().is_empty());
}

#[test]
fn test_require_reports_missing_argument() {
    let args = Arguments::new("Greeter");
    match greeter_descriptor().construct(args) {
        Err(Error::Construction { type_name, message }) => {
            assert_eq!(type_name, "Greeter");
            assert!(message.contains("greeting"));
        }
        other => panic!("Expected Construction error, got {:?}", other.err()),
    }
}

#[test]
fn test_get_reports_wrong_argument_type() {
    let mut args = Arguments::new("Greeter");
    args.push_positional("greeting", service(42_u32));

    assert!(matches!(
        args.get::<String>("greeting"),
        Err(Error::Construction { .. })
    ));
    assert!(args.get::<String>("absent").unwrap().is_none());
}
