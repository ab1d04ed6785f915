//! Migration engine for converting Plugin SDK resource schemas to Plugin Framework schemas
//!
//! The engine walks a [`ResourceSpec`] once, building typed target trees
//! ([`ResourceSchema`] and [`ModelStruct`]) and a [`Findings`] value, then
//! renders both trees to Go source fragments.
//!
//! Copyright (c) 2025 Tfsdk2fw Team
//! Licensed under the Apache-2.0 license

pub mod attribute;
pub mod block;
pub mod classify;
pub mod computed;
pub mod findings;
pub mod naming;
pub mod orchestrator;
pub mod type_mapper;

use crate::render;
use crate::target::{ModelStruct, ResourceSchema};
use crate::types::ResourceSpec;
use crate::{Result, SchemaKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::time::Instant;

pub use attribute::AttributeEmission;
pub use block::block_cardinality;
pub use classify::{classify, classify_tree, Classification, ClassifiedProperty};
pub use findings::{AdvisoryCode, Diagnostic, DiagnosticSummary, Findings};
pub use naming::go_field_name;
pub use orchestrator::{model_struct, Emitter};

/// What is being migrated and under which names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MigrationOptions {
    pub kind: SchemaKind,
    /// Terraform type name, e.g. `aws_sqs_queue`
    pub type_name: String,
    /// Go name of the generated resource, e.g. `Queue`
    pub name: String,
    /// Go package the fragments are destined for
    pub package_name: String,
}

impl MigrationOptions {
    pub fn resource(type_name: impl Into<String>) -> Self {
        Self::new(SchemaKind::Resource, type_name)
    }

    pub fn data_source(type_name: impl Into<String>) -> Self {
        Self::new(SchemaKind::DataSource, type_name)
    }

    pub fn new(kind: SchemaKind, type_name: impl Into<String>) -> Self {
        Self {
            kind,
            type_name: type_name.into(),
            name: String::new(),
            package_name: String::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_package_name(mut self, package_name: impl Into<String>) -> Self {
        self.package_name = package_name.into();
        self
    }
}

/// Follow-up code the caller's templates should generate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    /// The source supports import
    pub emit_import_state: bool,
    /// The source supports in-place update
    pub emit_update_skeleton: bool,
    /// Resource with both `tags` and `tags_all`; needs tag-aware plan modification
    pub emit_modify_plan: bool,
    pub has_top_level_tags_map: bool,
    pub has_top_level_tags_all_map: bool,
    /// Schema text references `attr.Type`
    pub import_framework_attr: bool,
    /// Schema text references provider custom types
    pub import_provider_framework_types: bool,
}

impl Capabilities {
    fn from_findings(spec: &ResourceSpec, kind: SchemaKind, findings: &Findings) -> Self {
        Self {
            emit_import_state: spec.importable,
            emit_update_skeleton: spec.updatable,
            emit_modify_plan: kind == SchemaKind::Resource
                && findings.has_top_level_tags_map
                && findings.has_top_level_tags_all_map,
            has_top_level_tags_map: findings.has_top_level_tags_map,
            has_top_level_tags_all_map: findings.has_top_level_tags_all_map,
            import_framework_attr: findings.import_framework_attr,
            import_provider_framework_types: findings.import_provider_framework_types,
        }
    }
}

/// Informational metadata; not part of the output's determinism
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MigrationMetadata {
    pub type_name: String,
    pub name: String,
    pub package_name: String,
    pub kind: SchemaKind,
    /// RFC 3339
    pub generated_at: String,
    pub duration_ms: u64,
    pub engine_version: String,
}

/// Everything produced by one migration
#[derive(Debug, Clone, Serialize)]
pub struct MigrationResult {
    pub schema: ResourceSchema,
    pub model: ModelStruct,
    /// `schema.Schema{...}` literal
    pub schema_text: String,
    /// Model struct field lines
    pub model_text: String,
    pub capabilities: Capabilities,
    /// Deduplicated plan modifier packages, sorted
    pub plan_modifier_packages: BTreeSet<String>,
    pub diagnostics: Vec<Diagnostic>,
    pub metadata: MigrationMetadata,
}

impl MigrationResult {
    pub fn summary(&self) -> DiagnosticSummary {
        DiagnosticSummary::from_diagnostics(&self.diagnostics)
    }
}

/// Migrate one resource or data source schema.
///
/// # Errors
///
/// Returns [`crate::Error::UnsupportedType`] naming the dotted path of the
/// first property whose kind cannot be represented. No partial output is
/// produced in that case.
///
/// # Example
///
/// ```
/// use tfsdk2fw_core::{migrate, MigrationOptions, PropertySpec, ResourceSpec, ValueType};
///
/// # fn example() -> tfsdk2fw_core::Result<()> {
/// let spec = ResourceSpec::new()
///     .with_property("name", PropertySpec::new(ValueType::String).with_required());
///
/// let result = migrate(&spec, &MigrationOptions::resource("example_thing"))?;
/// assert!(result.schema_text.contains("\"name\": schema.StringAttribute{"));
/// # Ok(())
/// # }
/// # example().unwrap();
/// ```
pub fn migrate(spec: &ResourceSpec, options: &MigrationOptions) -> Result<MigrationResult> {
    let span = tracing::info_span!("migrate", type_name = %options.type_name, kind = %options.kind);
    let _enter = span.enter();
    let start_time = Instant::now();

    let (schema, findings) = Emitter::new(options.kind).emit_resource(spec)?;
    let model = model_struct(&schema);
    let schema_text = render::render_schema(&schema);
    let model_text = render::render_model(&model);

    let capabilities = Capabilities::from_findings(spec, options.kind, &findings);
    let duration_ms = start_time.elapsed().as_millis() as u64;

    tracing::debug!(
        attributes = schema.root.attributes.len(),
        blocks = schema.root.blocks.len(),
        diagnostics = findings.diagnostics.len(),
        duration_ms,
        "Migration complete"
    );

    Ok(MigrationResult {
        schema,
        model,
        schema_text,
        model_text,
        capabilities,
        plan_modifier_packages: findings.plan_modifier_packages,
        diagnostics: findings.diagnostics,
        metadata: MigrationMetadata {
            type_name: options.type_name.clone(),
            name: options.name.clone(),
            package_name: options.package_name.clone(),
            kind: options.kind,
            generated_at: chrono::Utc::now().to_rfc3339(),
            duration_ms,
            engine_version: crate::VERSION.to_string(),
        },
    })
}
