//! Test helpers: random identifiers and validation assertions.
//!
//! Used by the generated `gen_test.rs` skeletons and by integration tests
//! (enable the `test-support` feature).

use crate::validation::{Validate, ValidationError};
use sf_core::{
    AccountObjectIdentifier, DatabaseObjectIdentifier, SchemaObjectIdentifier,
    SchemaObjectIdentifierWithArguments,
};

/// Upper-case alphanumeric name, unique per call.
pub fn random_string() -> String {
    let id = uuid::Uuid::new_v4().simple().to_string().to_ascii_uppercase();
    format!("TEST_{}", &id[..12])
}

pub fn random_account_object_identifier() -> AccountObjectIdentifier {
    AccountObjectIdentifier::new(random_string())
}

pub fn random_database_object_identifier() -> DatabaseObjectIdentifier {
    DatabaseObjectIdentifier::new(random_string(), random_string())
}

pub fn random_schema_object_identifier() -> SchemaObjectIdentifier {
    SchemaObjectIdentifier::new(random_string(), random_string(), random_string())
}

pub fn random_schema_object_identifier_with_arguments() -> SchemaObjectIdentifierWithArguments {
    random_schema_object_identifier().with_arguments(vec!["VARCHAR".to_string()])
}

/// Assert that validating `opts` fails with `expected` among the errors.
#[track_caller]
pub fn assert_validation_error<T: Validate>(opts: &T, expected: ValidationError) {
    match opts.validate() {
        Ok(()) => panic!("expected validation error `{expected}`, but options are valid"),
        Err(errs) => assert!(
            errs.contains(&expected),
            "expected validation error `{expected}`, got `{errs}`"
        ),
    }
}

#[cfg(test)]
#[path = "testing_test.rs"]
mod tests;
