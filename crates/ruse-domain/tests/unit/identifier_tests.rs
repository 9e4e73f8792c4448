//! Unit tests for identifiers and their conversions

use ruse_domain::{Error, Identifier, IntoIdentifier};

#[test]
fn test_owned_and_borrowed_inputs_are_equal() {
    let borrowed = "service_a".into_identifier().unwrap();
    let owned = String::from("service_a").into_identifier().unwrap();
    let by_ref = (&String::from("service_a")).into_identifier().unwrap();

    assert_eq!(borrowed, owned);
    assert_eq!(owned, by_ref);
    assert_eq!(borrowed.as_str(), "service_a");
}

#[test]
fn test_absent_identifier_is_invalid() {
    let absent: Option<&str> = None;
    match absent.into_identifier() {
        Err(Error::InvalidIdentifier { identifier }) => assert!(identifier.is_empty()),
        other => panic!("Expected InvalidIdentifier, got {other:?}"),
    }
}

#[test]
fn test_present_option_converts_inner_value() {
    let identifier = Some("mailer").into_identifier().unwrap();
    assert_eq!(identifier.to_string(), "mailer");
}

#[test]
fn test_whitespace_only_identifier_is_invalid() {
    for input in ["", " ", "\t\n"] {
        assert!(
            matches!(input.into_identifier(), Err(Error::InvalidIdentifier { .. })),
            "{input:?} should be rejected"
        );
    }
}

#[test]
fn test_surrounding_whitespace_is_kept() {
    let identifier = Identifier::new(" mailer ").unwrap();
    assert_eq!(identifier.as_str(), " mailer ");
}

#[test]
fn test_serde_rejects_blank_identifier() {
    let parsed: Identifier = serde_json::from_str("\"mailer\"").unwrap();
    assert_eq!(parsed.as_str(), "mailer");

    assert!(serde_json::from_str::<Identifier>("\"\"").is_err());
    assert_eq!(serde_json::to_string(&parsed).unwrap(), "\"mailer\"");
}
