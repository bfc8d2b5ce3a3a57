//! Row decoding for SHOW/DESCRIBE results.

use sf_db::Row;
use thiserror::Error;

/// A column could not be decoded into its declared type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("decode column '{column}': {message}")]
pub struct DecodeError {
    pub column: String,
    pub message: String,
}

impl DecodeError {
    pub fn new(column: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            message: message.into(),
        }
    }
}

/// Parse one textual column value.
pub trait FromColumn: Sized {
    /// Whether an empty string reads as NULL for optional columns.
    const EMPTY_IS_NULL: bool = true;

    fn from_column(raw: &str) -> Result<Self, String>;
}

impl FromColumn for String {
    const EMPTY_IS_NULL: bool = false;

    fn from_column(raw: &str) -> Result<Self, String> {
        Ok(raw.to_string())
    }
}

impl FromColumn for bool {
    fn from_column(raw: &str) -> Result<Self, String> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "true" | "y" | "yes" => Ok(true),
            "false" | "n" | "no" => Ok(false),
            other => Err(format!("expected a boolean, got '{other}'")),
        }
    }
}

macro_rules! impl_numeric_from_column {
    ($($ty:ty),*) => {
        $(
            impl FromColumn for $ty {
                fn from_column(raw: &str) -> Result<Self, String> {
                    raw.trim()
                        .parse::<$ty>()
                        .map_err(|e| format!("expected a number, got '{raw}': {e}"))
                }
            }
        )*
    };
}

impl_numeric_from_column!(i32, i64, u32, u64, f64);

/// Build a record from one result row.
pub trait FromRow: Sized {
    fn from_row(row: &Row) -> Result<Self, DecodeError>;
}

/// Typed column access used by generated `FromRow` impls.
pub trait RowExt {
    /// Required column; absent columns and NULL are errors.
    fn decode<T: FromColumn>(&self, column: &str) -> Result<T, DecodeError>;

    /// Optional column; absent columns and NULL read as `None`.
    fn decode_opt<T: FromColumn>(&self, column: &str) -> Result<Option<T>, DecodeError>;
}

impl RowExt for Row {
    fn decode<T: FromColumn>(&self, column: &str) -> Result<T, DecodeError> {
        match self.get(column) {
            None => Err(DecodeError::new(column, "column missing from result")),
            Some(None) => Err(DecodeError::new(column, "unexpected NULL")),
            Some(Some(raw)) => T::from_column(raw).map_err(|msg| DecodeError::new(column, msg)),
        }
    }

    fn decode_opt<T: FromColumn>(&self, column: &str) -> Result<Option<T>, DecodeError> {
        match self.get(column) {
            None | Some(None) => Ok(None),
            Some(Some(raw)) if T::EMPTY_IS_NULL && raw.trim().is_empty() => Ok(None),
            Some(Some(raw)) => T::from_column(raw)
                .map(Some)
                .map_err(|msg| DecodeError::new(column, msg)),
        }
    }
}

/// Decode every row, stopping at the first failure.
pub fn decode_rows<T: FromRow>(rows: &[Row]) -> Result<Vec<T>, DecodeError> {
    rows.iter().map(T::from_row).collect()
}

#[cfg(test)]
#[path = "decode_test.rs"]
mod tests;
