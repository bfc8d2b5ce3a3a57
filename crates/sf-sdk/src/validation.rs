//! Validation runtime for option trees.
//!
//! `sf-gen` emits a straight-line [`Validate::collect_errors`] per option
//! struct: the struct's declared rules in order, then a recursive call into
//! every present child struct. The helpers here are the rule predicates those
//! bodies call.

use sf_core::identifier::{
    AccountObjectIdentifier, DatabaseObjectIdentifier, ObjectIdentifier, SchemaObjectIdentifier,
    SchemaObjectIdentifierWithArguments,
};
use std::fmt;
use thiserror::Error;

/// One violated rule, naming the struct and the offending fields.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{structure}: options are nil")]
    NilOptions { structure: &'static str },

    #[error("{structure}: invalid object identifier in field '{field}'")]
    InvalidIdentifier {
        structure: &'static str,
        field: &'static str,
    },

    #[error("{structure}: field '{field}' must be a plain name of letters, digits and underscores")]
    InvalidName {
        structure: &'static str,
        field: &'static str,
    },

    #[error("{structure}: fields [{}] are incompatible and cannot be set at the same time", .fields.join(", "))]
    ConflictingFields {
        structure: &'static str,
        fields: Vec<&'static str>,
    },

    #[error("{structure}: exactly one of [{}] must be set", .fields.join(", "))]
    ExactlyOneOf {
        structure: &'static str,
        fields: Vec<&'static str>,
    },

    #[error("{structure}: at least one of [{}] must be set", .fields.join(", "))]
    AtLeastOneOf {
        structure: &'static str,
        fields: Vec<&'static str>,
    },
}

impl ValidationError {
    pub fn nil_options(structure: &'static str) -> Self {
        Self::NilOptions { structure }
    }

    pub fn invalid_identifier(structure: &'static str, field: &'static str) -> Self {
        Self::InvalidIdentifier { structure, field }
    }

    pub fn invalid_name(structure: &'static str, field: &'static str) -> Self {
        Self::InvalidName { structure, field }
    }

    pub fn conflicting_fields(structure: &'static str, fields: &[&'static str]) -> Self {
        Self::ConflictingFields {
            structure,
            fields: fields.to_vec(),
        }
    }

    pub fn exactly_one_of(structure: &'static str, fields: &[&'static str]) -> Self {
        Self::ExactlyOneOf {
            structure,
            fields: fields.to_vec(),
        }
    }

    pub fn at_least_one_of(structure: &'static str, fields: &[&'static str]) -> Self {
        Self::AtLeastOneOf {
            structure,
            fields: fields.to_vec(),
        }
    }
}

/// Every violation found in one tree, in discovery order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }

    pub fn contains(&self, error: &ValidationError) -> bool {
        self.0.contains(error)
    }

    pub fn into_inner(self) -> Vec<ValidationError> {
        self.0
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        f.write_str(&joined.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        Self(vec![error])
    }
}

/// Declared invariants of an option struct.
pub trait Validate {
    /// Push every violation of this node and its children.
    fn collect_errors(&self, errs: &mut Vec<ValidationError>);

    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errs = Vec::new();
        self.collect_errors(&mut errs);
        if errs.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(errs))
        }
    }
}

/// Validate a possibly-absent root. `None` yields a single nil-options
/// error and nothing else is checked.
pub fn validate_options<T: Validate>(
    structure: &'static str,
    opts: Option<&T>,
) -> Result<(), ValidationErrors> {
    match opts {
        Some(opts) => opts.validate(),
        None => Err(ValidationError::nil_options(structure).into()),
    }
}

/// Kind-specific "set" predicate used by the field-set rules.
pub trait IsSet {
    fn is_set(&self) -> bool;
}

impl IsSet for bool {
    fn is_set(&self) -> bool {
        *self
    }
}

impl<T> IsSet for Option<T> {
    fn is_set(&self) -> bool {
        self.is_some()
    }
}

impl<T> IsSet for Vec<T> {
    fn is_set(&self) -> bool {
        !self.is_empty()
    }
}

impl IsSet for String {
    fn is_set(&self) -> bool {
        !self.is_empty()
    }
}

/// Fields checked by the valid-identifier rule. An absent optional
/// identifier passes; a present one must be valid.
pub trait IdentifierField {
    fn identifier_ok(&self) -> bool;
}

macro_rules! impl_identifier_field {
    ($($ty:ty),*) => {
        $(
            impl IsSet for $ty {
                fn is_set(&self) -> bool {
                    self.is_valid()
                }
            }

            impl IdentifierField for $ty {
                fn identifier_ok(&self) -> bool {
                    self.is_valid()
                }
            }

            impl IdentifierField for Option<$ty> {
                fn identifier_ok(&self) -> bool {
                    self.as_ref().map_or(true, ObjectIdentifier::is_valid)
                }
            }
        )*
    };
}

impl_identifier_field!(
    AccountObjectIdentifier,
    DatabaseObjectIdentifier,
    SchemaObjectIdentifier,
    SchemaObjectIdentifierWithArguments
);

pub fn valid_identifier<I: IdentifierField + ?Sized>(field: &I) -> bool {
    field.identifier_ok()
}

/// Conflicting-fields rule: fewer than two are set.
pub fn fewer_than_two(set: &[bool]) -> bool {
    set.iter().filter(|s| **s).count() < 2
}

pub fn exactly_one(set: &[bool]) -> bool {
    set.iter().filter(|s| **s).count() == 1
}

pub fn at_least_one(set: &[bool]) -> bool {
    set.iter().any(|s| *s)
}

#[cfg(test)]
#[path = "validation_test.rs"]
mod tests;
