use greeter::{greet, greet_name, GreeterError, Name, NAME_REQUIRED_MESSAGE};
use proptest::prelude::*;

#[test]
fn test_greet_returns_hello_name() {
    assert_eq!(greet(Some("John")).unwrap(), "Hello John");
}

#[test]
fn test_greet_empty_name_is_validation_error() {
    let err = greet(Some("")).unwrap_err();
    assert!(matches!(err, GreeterError::ValidationError { .. }));
    assert_eq!(err.to_string(), r#""name" must be a String with some length"#);
}

#[test]
fn test_greet_missing_name_is_validation_error() {
    let err = greet(None).unwrap_err();
    assert!(matches!(err, GreeterError::ValidationError { .. }));
    assert_eq!(err.to_string(), NAME_REQUIRED_MESSAGE);
}

#[test]
fn test_greet_is_deterministic() {
    let first = greet(Some("Ana")).unwrap();
    let second = greet(Some("Ana")).unwrap();
    assert_eq!(first, "Hello Ana");
    assert_eq!(first, second);
}

#[test]
fn test_greet_keeps_whitespace_and_unicode() {
    assert_eq!(greet(Some(" ")).unwrap(), "Hello  ");
    assert_eq!(greet(Some("Zoë 山田")).unwrap(), "Hello Zoë 山田");
}

#[test]
fn test_greet_name_matches_greet() -> anyhow::Result<()> {
    let name = Name::try_from("Grace")?;
    assert_eq!(greet_name(&name), greet(Some("Grace"))?);
    Ok(())
}

proptest! {
    #[test]
    fn prop_greet_concatenates(s in ".+") {
        prop_assert_eq!(greet(Some(&s)).unwrap(), format!("Hello {}", s));
    }
}
