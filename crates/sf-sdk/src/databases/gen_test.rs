// @generated by sf-gen from the Databases definition. Do not edit.
#![allow(unused_imports)]

use super::*;
use crate::ddl::render;
use crate::testing::*;
use crate::validation::{Validate, ValidationError};

mod create_database_options {
    use super::*;

    fn setup() -> CreateDatabaseOptions {
        CreateDatabaseOptions {
            name: random_account_object_identifier(),
            ..Default::default()
        }
    }

    #[test]
    fn test_basic() {
        let opts = setup();
        assert!(opts.validate().is_ok());
        assert!(render(&opts).starts_with("CREATE"));
    }

    #[test]
    fn test_invalid_identifier_name() {
        let mut opts = setup();
        opts.name = Default::default();
        assert_validation_error(&opts, ValidationError::invalid_identifier("CreateDatabaseOptions", "name"));
    }

    #[test]
    fn test_invalid_identifier_clone_source() {
        let mut opts = setup();
        opts.clone_source = Some(Default::default());
        assert_validation_error(&opts, ValidationError::invalid_identifier("CreateDatabaseOptions", "clone_source"));
    }

    #[test]
    fn test_invalid_identifier_external_volume() {
        let mut opts = setup();
        opts.external_volume = Some(Default::default());
        assert_validation_error(&opts, ValidationError::invalid_identifier("CreateDatabaseOptions", "external_volume"));
    }

    #[test]
    fn test_invalid_identifier_catalog() {
        let mut opts = setup();
        opts.catalog = Some(Default::default());
        assert_validation_error(&opts, ValidationError::invalid_identifier("CreateDatabaseOptions", "catalog"));
    }

    #[test]
    fn test_conflicting_or_replace_if_not_exists() {
        let mut opts = setup();
        opts.or_replace = true;
        opts.if_not_exists = true;
        assert_validation_error(&opts, ValidationError::conflicting_fields("CreateDatabaseOptions", &["or_replace", "if_not_exists"]));
    }
}

mod alter_database_options {
    use super::*;

    fn setup() -> AlterDatabaseOptions {
        AlterDatabaseOptions {
            name: random_account_object_identifier(),
            new_name: Some(random_account_object_identifier()),
            ..Default::default()
        }
    }

    #[test]
    fn test_basic() {
        let opts = setup();
        assert!(opts.validate().is_ok());
        assert!(render(&opts).starts_with("ALTER DATABASE"));
    }

    #[test]
    fn test_invalid_identifier_name() {
        let mut opts = setup();
        opts.name = Default::default();
        assert_validation_error(&opts, ValidationError::invalid_identifier("AlterDatabaseOptions", "name"));
    }

    #[test]
    fn test_invalid_identifier_new_name() {
        let mut opts = setup();
        opts.new_name = Some(Default::default());
        assert_validation_error(&opts, ValidationError::invalid_identifier("AlterDatabaseOptions", "new_name"));
    }

    #[test]
    fn test_invalid_identifier_swap_with() {
        let mut opts = setup();
        opts.swap_with = Some(Default::default());
        assert_validation_error(&opts, ValidationError::invalid_identifier("AlterDatabaseOptions", "swap_with"));
    }

    #[test]
    fn test_exactly_one_of_new_name_none() {
        let mut opts = setup();
        opts.new_name = None;
        opts.swap_with = None;
        opts.set = None;
        opts.unset = None;
        opts.set_tag = Vec::new();
        opts.unset_tag = Vec::new();
        assert_validation_error(&opts, ValidationError::exactly_one_of("AlterDatabaseOptions", &["new_name", "swap_with", "set", "unset", "set_tag", "unset_tag"]));
    }

    #[test]
    fn test_exactly_one_of_new_name_two() {
        let mut opts = setup();
        opts.new_name = Some(random_account_object_identifier());
        opts.swap_with = Some(random_account_object_identifier());
        assert_validation_error(&opts, ValidationError::exactly_one_of("AlterDatabaseOptions", &["new_name", "swap_with", "set", "unset", "set_tag", "unset_tag"]));
    }
}

mod database_set {
    use super::*;

    fn setup() -> DatabaseSet {
        DatabaseSet {
            data_retention_time_in_days: Some(1),
            ..Default::default()
        }
    }

    #[test]
    fn test_basic() {
        let opts = setup();
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn test_at_least_one_of_data_retention_time_in_days() {
        let mut opts = setup();
        opts.data_retention_time_in_days = None;
        opts.max_data_extension_time_in_days = None;
        opts.external_volume = None;
        opts.catalog = None;
        opts.default_ddl_collation = None;
        opts.log_level = None;
        opts.trace_level = None;
        opts.comment = None;
        assert_validation_error(&opts, ValidationError::at_least_one_of("DatabaseSet", &["data_retention_time_in_days", "max_data_extension_time_in_days", "external_volume", "catalog", "default_ddl_collation", "log_level", "trace_level", "comment"]));
    }

    #[test]
    fn test_invalid_identifier_external_volume() {
        let mut opts = setup();
        opts.external_volume = Some(Default::default());
        assert_validation_error(&opts, ValidationError::invalid_identifier("DatabaseSet", "external_volume"));
    }

    #[test]
    fn test_invalid_identifier_catalog() {
        let mut opts = setup();
        opts.catalog = Some(Default::default());
        assert_validation_error(&opts, ValidationError::invalid_identifier("DatabaseSet", "catalog"));
    }
}

mod database_unset {
    use super::*;

    fn setup() -> DatabaseUnset {
        DatabaseUnset {
            data_retention_time_in_days: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_basic() {
        let opts = setup();
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn test_at_least_one_of_data_retention_time_in_days() {
        let mut opts = setup();
        opts.data_retention_time_in_days = false;
        opts.max_data_extension_time_in_days = false;
        opts.external_volume = false;
        opts.catalog = false;
        opts.default_ddl_collation = false;
        opts.log_level = false;
        opts.trace_level = false;
        opts.comment = false;
        assert_validation_error(&opts, ValidationError::at_least_one_of("DatabaseUnset", &["data_retention_time_in_days", "max_data_extension_time_in_days", "external_volume", "catalog", "default_ddl_collation", "log_level", "trace_level", "comment"]));
    }
}

mod drop_database_options {
    use super::*;

    fn setup() -> DropDatabaseOptions {
        DropDatabaseOptions {
            name: random_account_object_identifier(),
            ..Default::default()
        }
    }

    #[test]
    fn test_basic() {
        let opts = setup();
        assert!(opts.validate().is_ok());
        assert!(render(&opts).starts_with("DROP DATABASE"));
    }

    #[test]
    fn test_invalid_identifier_name() {
        let mut opts = setup();
        opts.name = Default::default();
        assert_validation_error(&opts, ValidationError::invalid_identifier("DropDatabaseOptions", "name"));
    }

    #[test]
    fn test_conflicting_cascade_restrict() {
        let mut opts = setup();
        opts.cascade = true;
        opts.restrict = true;
        assert_validation_error(&opts, ValidationError::conflicting_fields("DropDatabaseOptions", &["cascade", "restrict"]));
    }
}

mod undrop_database_options {
    use super::*;

    fn setup() -> UndropDatabaseOptions {
        UndropDatabaseOptions {
            name: random_account_object_identifier(),
        }
    }

    #[test]
    fn test_basic() {
        let opts = setup();
        assert!(opts.validate().is_ok());
        assert!(render(&opts).starts_with("UNDROP DATABASE"));
    }

    #[test]
    fn test_invalid_identifier_name() {
        let mut opts = setup();
        opts.name = Default::default();
        assert_validation_error(&opts, ValidationError::invalid_identifier("UndropDatabaseOptions", "name"));
    }
}

mod show_database_options {
    use super::*;

    fn setup() -> ShowDatabaseOptions {
        ShowDatabaseOptions::default()
    }

    #[test]
    fn test_basic() {
        let opts = setup();
        assert!(opts.validate().is_ok());
        assert!(render(&opts).starts_with("SHOW"));
    }
}

mod describe_database_options {
    use super::*;

    fn setup() -> DescribeDatabaseOptions {
        DescribeDatabaseOptions {
            name: random_account_object_identifier(),
        }
    }

    #[test]
    fn test_basic() {
        let opts = setup();
        assert!(opts.validate().is_ok());
        assert!(render(&opts).starts_with("DESCRIBE DATABASE"));
    }

    #[test]
    fn test_invalid_identifier_name() {
        let mut opts = setup();
        opts.name = Default::default();
        assert_validation_error(&opts, ValidationError::invalid_identifier("DescribeDatabaseOptions", "name"));
    }
}
