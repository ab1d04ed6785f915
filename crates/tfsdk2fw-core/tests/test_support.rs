//! Shared test support utilities for integration tests

#![allow(dead_code)]

use serde_json::json;
use tfsdk2fw_core::{
    migrate, ConfigMode, MigrationOptions, MigrationResult, PropertySpec, ResourceSpec, ValueType,
};

pub fn string() -> PropertySpec {
    PropertySpec::new(ValueType::String)
}

pub fn int() -> PropertySpec {
    PropertySpec::new(ValueType::Int)
}

pub fn boolean() -> PropertySpec {
    PropertySpec::new(ValueType::Bool)
}

pub fn string_map() -> PropertySpec {
    PropertySpec::aggregate_of(ValueType::Map, ValueType::String)
}

/// A single required, force-new string
pub fn required_name_resource() -> ResourceSpec {
    ResourceSpec::new().with_property("name", string().with_required().with_force_new())
}

/// Computed-only list of nested objects
pub fn computed_object_resource() -> ResourceSpec {
    ResourceSpec::new().with_property(
        "status",
        PropertySpec::nested(
            ValueType::List,
            ResourceSpec::new()
                .with_property("code", int().with_computed())
                .with_property("msg", string().with_computed()),
        )
        .with_computed(),
    )
}

/// Optional `tags` with computed-only `tags_all`
pub fn tagged_resource() -> ResourceSpec {
    ResourceSpec::new()
        .with_property("name", string().with_required())
        .with_property("tags", string_map().with_optional())
        .with_property("tags_all", string_map().with_computed())
}

/// A queue-like resource touching most emission paths
pub fn queue_resource() -> ResourceSpec {
    let redrive = ResourceSpec::new()
        .with_property("dead_letter_target_arn", string().with_required())
        .with_property("max_receive_count", int().with_optional().with_default(json!(10)));

    let policy_statement = ResourceSpec::new()
        .with_property("sid", string().with_optional())
        .with_property(
            "principals",
            PropertySpec::aggregate_of(ValueType::Set, ValueType::String).with_required(),
        );

    ResourceSpec::new()
        .with_description("Provides an SQS queue")
        .with_schema_version(1)
        .with_import()
        .with_update()
        .with_property("arn", string().with_computed())
        .with_property("name", string().with_optional().with_computed().with_force_new())
        .with_property("fifo_queue", boolean().with_optional().with_force_new().with_default(json!(false)))
        .with_property(
            "delay_seconds",
            int().with_optional().with_default(json!(0)).with_validator(),
        )
        .with_property("kms_master_key_id", string().with_optional().with_sensitive())
        .with_property("url", string().with_computed().with_deprecated("use id"))
        .with_property(
            "redrive_policy",
            PropertySpec::nested(ValueType::List, redrive)
                .with_optional()
                .with_items(1, 1),
        )
        .with_property(
            "policy_statement",
            PropertySpec::nested(ValueType::Set, policy_statement)
                .with_optional()
                .with_config_mode(ConfigMode::Block),
        )
        .with_property("tags", string_map().with_optional())
        .with_property("tags_all", string_map().with_optional().with_computed())
}

/// Migrate as a resource, failing the test on error
pub fn assert_migration_succeeds(spec: &ResourceSpec) -> MigrationResult {
    match migrate(spec, &MigrationOptions::resource("aws_test_thing")) {
        Ok(result) => result,
        Err(e) => panic!("migration failed: {}", e),
    }
}

/// Migrate as a data source, failing the test on error
pub fn assert_data_source_migration_succeeds(spec: &ResourceSpec) -> MigrationResult {
    match migrate(spec, &MigrationOptions::data_source("aws_test_thing")) {
        Ok(result) => result,
        Err(e) => panic!("migration failed: {}", e),
    }
}
