use super::*;
use sf_core::ObjectIdentifier;

#[test]
fn test_random_identifiers_are_valid_and_distinct() {
    let a = random_account_object_identifier();
    let b = random_account_object_identifier();
    assert!(a.is_valid());
    assert_ne!(a, b);
    assert!(random_database_object_identifier().is_valid());
    assert!(random_schema_object_identifier().is_valid());
    assert_eq!(
        random_schema_object_identifier_with_arguments().argument_data_types(),
        ["VARCHAR"]
    );
}

#[test]
fn test_random_string_shape() {
    let s = random_string();
    assert!(s.starts_with("TEST_"));
    assert_eq!(s.len(), 17);
    assert!(s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'));
}
