use super::*;

#[test]
fn test_lookup_is_case_insensitive() {
    let row = Row::from_pairs([("name", Some("R1")), ("comment", None)]);
    assert_eq!(row.get("NAME"), Some(Some("R1")));
    assert_eq!(row.get("Comment"), Some(None));
    assert_eq!(row.get("owner"), None);
    assert_eq!(row.len(), 2);
}

#[test]
fn test_new_pads_missing_values() {
    let row = Row::new(
        vec!["a".to_string(), "b".to_string()],
        vec![Some("1".to_string())],
    );
    assert_eq!(row.get("b"), Some(None));
    assert_eq!(row.columns(), ["a", "b"]);
}
