//! Clause types shared by several object families.

use crate::ddl::{ParameterOptions, SqlBuilder, SqlRender};
use crate::validation::{valid_identifier, Validate, ValidationError};
use sf_core::SchemaObjectIdentifier;

/// `LIKE '<pattern>'`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Like {
    pub pattern: String,
}

impl Like {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }
}

impl SqlRender for Like {
    fn render(&self, b: &mut SqlBuilder) {
        b.parameter(
            "LIKE",
            Some(self.pattern.as_str()),
            ParameterOptions::new().single_quotes().no_equals(),
        );
    }
}

impl Validate for Like {
    fn collect_errors(&self, _errs: &mut Vec<ValidationError>) {}
}

/// `LIMIT <rows> [FROM '<name>']`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LimitFrom {
    pub rows: i32,
    pub from: Option<String>,
}

impl LimitFrom {
    pub fn new(rows: i32) -> Self {
        Self { rows, from: None }
    }

    pub fn with_from(mut self, from: impl Into<String>) -> Self {
        self.from = Some(from.into());
        self
    }
}

impl SqlRender for LimitFrom {
    fn render(&self, b: &mut SqlBuilder) {
        b.parameter("LIMIT", Some(&self.rows), ParameterOptions::new().no_equals());
        b.parameter(
            "FROM",
            self.from.as_ref(),
            ParameterOptions::new().single_quotes().no_equals(),
        );
    }
}

impl Validate for LimitFrom {
    fn collect_errors(&self, _errs: &mut Vec<ValidationError>) {}
}

/// `"<db>"."<schema>"."<tag>" = '<value>'`, used inside `TAG (…)` lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagAssociation {
    pub name: SchemaObjectIdentifier,
    pub value: String,
}

impl TagAssociation {
    pub fn new(name: SchemaObjectIdentifier, value: impl Into<String>) -> Self {
        Self {
            name,
            value: value.into(),
        }
    }
}

impl SqlRender for TagAssociation {
    fn render(&self, b: &mut SqlBuilder) {
        b.identifier("", &self.name);
        b.static_sql("=");
        b.parameter("", Some(self.value.as_str()), ParameterOptions::new().single_quotes());
    }
}

impl Validate for TagAssociation {
    fn collect_errors(&self, errs: &mut Vec<ValidationError>) {
        if !valid_identifier(&self.name) {
            errs.push(ValidationError::invalid_identifier("TagAssociation", "name"));
        }
    }
}

#[cfg(test)]
#[path = "common_test.rs"]
mod tests;
