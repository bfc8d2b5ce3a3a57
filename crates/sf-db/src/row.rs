//! Result rows returned by `Driver::query`

/// One result row. Values are the driver's textual rendering; `None` is SQL NULL.
///
/// Column lookup is case-insensitive, matching how Snowflake reports
/// `SHOW`/`DESCRIBE` column names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    columns: Vec<String>,
    values: Vec<Option<String>>,
}

impl Row {
    /// Build a row; `values` shorter than `columns` are padded with NULL.
    pub fn new(columns: Vec<String>, mut values: Vec<Option<String>>) -> Self {
        values.resize(columns.len(), None);
        Self { columns, values }
    }

    /// Convenience constructor for tests and fixtures.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, Option<&'a str>)>) -> Self {
        let (columns, values) = pairs
            .into_iter()
            .map(|(c, v)| (c.to_string(), v.map(str::to_string)))
            .unzip();
        Self { columns, values }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn index_of(&self, column: &str) -> Option<usize> {
        self.columns
            .iter()
            .position(|c| c.eq_ignore_ascii_case(column))
    }

    /// `None` when the column is absent, `Some(None)` when it is NULL.
    pub fn get(&self, column: &str) -> Option<Option<&str>> {
        self.index_of(column)
            .map(|idx| self.values[idx].as_deref())
    }
}

#[cfg(test)]
#[path = "row_test.rs"]
mod tests;
