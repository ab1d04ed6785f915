//! Tfsdk2fw Core - Migration engine for Terraform provider schemas
//!
//! This crate translates resource and data source schemas written against the
//! Terraform Plugin SDK into Plugin Framework schema definitions, emitted as
//! Go source fragments for an external template to wrap.
//!
//! # Main Components
//!
//! - **Source Model**: [`ResourceSpec`] / [`PropertySpec`] trees, loadable from JSON or YAML
//! - **Migration Engine**: classification, type mapping and emission into typed target trees
//! - **Renderers**: Go source text for the schema literal and the model struct
//! - **Registry**: provider registry documents keyed by type name
//!
//! # Example
//!
//! ```
//! use tfsdk2fw_core::{migrate, MigrationOptions, PropertySpec, ResourceSpec, ValueType};
//!
//! fn example() -> tfsdk2fw_core::Result<()> {
//!     let spec = ResourceSpec::new()
//!         .with_property("name", PropertySpec::new(ValueType::String).with_required().with_force_new());
//!
//!     let result = migrate(&spec, &MigrationOptions::resource("aws_sqs_queue"))?;
//!     println!("{}", result.schema_text);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

pub mod error;
pub mod migration;
pub mod registry;
pub mod render;
pub mod target;
pub mod types;

// Re-export main types for convenience
pub use error::{Error, Result, SchemaKind, Severity};
pub use migration::{
    migrate, AdvisoryCode, Capabilities, Classification, ClassifiedProperty, Diagnostic,
    DiagnosticSummary, MigrationMetadata, MigrationOptions, MigrationResult,
};
pub use registry::{ProviderRegistry, SchemaTarget};
pub use target::{ModelStruct, ResourceSchema};
pub use types::{ConfigMode, Element, PropertySpec, ResourceSpec, ValueType};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_error_creation() {
        let err = Error::unsupported_type(&["foo", "bar"], "(attribute) list of object");
        assert_eq!(
            err.to_string(),
            "foo.bar is of unsupported type: (attribute) list of object"
        );
    }

    #[test]
    fn test_schema_kind_equality() {
        assert_eq!(SchemaKind::Resource, SchemaKind::Resource);
        assert_ne!(SchemaKind::Resource, SchemaKind::DataSource);
    }
}
