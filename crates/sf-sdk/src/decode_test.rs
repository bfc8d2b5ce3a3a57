use super::*;

#[derive(Debug, PartialEq)]
struct Record {
    name: String,
    is_default: bool,
    retention: Option<i32>,
    comment: Option<String>,
}

impl FromRow for Record {
    fn from_row(row: &Row) -> Result<Self, DecodeError> {
        Ok(Self {
            name: row.decode("name")?,
            is_default: row.decode("is_default")?,
            retention: row.decode_opt("retention_time")?,
            comment: row.decode_opt("comment")?,
        })
    }
}

#[test]
fn test_decode_full_row() {
    let row = Row::from_pairs([
        ("name", Some("DB1")),
        ("is_default", Some("N")),
        ("retention_time", Some("7")),
        ("comment", Some("")),
    ]);
    assert_eq!(
        Record::from_row(&row).unwrap(),
        Record {
            name: "DB1".to_string(),
            is_default: false,
            retention: Some(7),
            comment: Some(String::new()),
        }
    );
}

#[test]
fn test_optional_columns_tolerate_absence_and_empty_numbers() {
    let row = Row::from_pairs([
        ("name", Some("DB1")),
        ("is_default", Some("true")),
        ("retention_time", Some("")),
    ]);
    let record = Record::from_row(&row).unwrap();
    assert_eq!(record.retention, None);
    assert_eq!(record.comment, None);
}

#[test]
fn test_required_column_missing() {
    let row = Row::from_pairs([("is_default", Some("Y"))]);
    let err = Record::from_row(&row).unwrap_err();
    assert_eq!(err, DecodeError::new("name", "column missing from result"));
}

#[test]
fn test_required_column_null() {
    let row = Row::from_pairs([("name", None), ("is_default", Some("Y"))]);
    assert_eq!(Record::from_row(&row).unwrap_err().message, "unexpected NULL");
}

#[test]
fn test_bad_value_names_column() {
    let row = Row::from_pairs([("name", Some("X")), ("is_default", Some("maybe"))]);
    let err = Record::from_row(&row).unwrap_err();
    assert_eq!(err.column, "is_default");
    assert!(err.to_string().contains("expected a boolean"));
}

#[test]
fn test_decode_rows_stops_at_first_failure() {
    let good = Row::from_pairs([("name", Some("A")), ("is_default", Some("Y"))]);
    let bad = Row::from_pairs([("name", Some("B"))]);
    assert_eq!(decode_rows::<Record>(&[good.clone()]).unwrap().len(), 1);
    let err = decode_rows::<Record>(&[good, bad]).unwrap_err();
    assert_eq!(err.column, "is_default");
}
