//! Provider registry documents
//!
//! A registry document carries every resource and data source schema of a
//! provider, keyed by Terraform type name. Documents are JSON or YAML.

use crate::error::{Error, Result};
use crate::types::ResourceSpec;
use crate::SchemaKind;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Resource and data source schemas of one provider
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProviderRegistry {
    #[serde(default)]
    pub resources: BTreeMap<String, ResourceSpec>,
    #[serde(default)]
    pub data_sources: BTreeMap<String, ResourceSpec>,
}

/// A type name together with the map it is looked up in
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaTarget {
    Resource(String),
    DataSource(String),
}

impl SchemaTarget {
    pub fn kind(&self) -> SchemaKind {
        match self {
            SchemaTarget::Resource(_) => SchemaKind::Resource,
            SchemaTarget::DataSource(_) => SchemaKind::DataSource,
        }
    }

    pub fn type_name(&self) -> &str {
        match self {
            SchemaTarget::Resource(name) | SchemaTarget::DataSource(name) => name,
        }
    }
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a registry document; `.yaml`/`.yml` is YAML, anything else JSON
    pub fn from_path(path: &Path) -> Result<Self> {
        load_document(path, "provider registry")
    }

    pub fn with_resource(mut self, type_name: impl Into<String>, spec: ResourceSpec) -> Self {
        self.resources.insert(type_name.into(), spec);
        self
    }

    pub fn with_data_source(mut self, type_name: impl Into<String>, spec: ResourceSpec) -> Self {
        self.data_sources.insert(type_name.into(), spec);
        self
    }

    pub fn lookup(&self, target: &SchemaTarget) -> Result<&ResourceSpec> {
        let map = match target {
            SchemaTarget::Resource(_) => &self.resources,
            SchemaTarget::DataSource(_) => &self.data_sources,
        };
        map.get(target.type_name()).ok_or_else(|| Error::ResourceNotFound {
            kind: target.kind(),
            type_name: target.type_name().to_string(),
        })
    }
}

impl ResourceSpec {
    /// Load a single resource schema document
    pub fn from_path(path: &Path) -> Result<Self> {
        load_document(path, "resource schema")
    }
}

fn load_document<T: DeserializeOwned>(path: &Path, what: &str) -> Result<T> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        message: format!("Failed to read {} from {:?}", what, path),
        source: e,
    })?;

    tracing::debug!(path = %path.display(), bytes = content.len(), "Loading {}", what);

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("yaml") | Some("yml") => serde_yaml::from_str(&content).map_err(|e| Error::Yaml {
            message: format!("Failed to parse {} from {:?}: {}", what, path, e),
            source: e,
        }),
        _ => serde_json::from_str(&content).map_err(|e| Error::Json {
            message: format!("Failed to parse {} from {:?}: {}", what, path, e),
            source: e,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PropertySpec, ValueType};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn registry() -> ProviderRegistry {
        ProviderRegistry::new()
            .with_resource(
                "aws_sqs_queue",
                ResourceSpec::new().with_property("name", PropertySpec::new(ValueType::String).with_optional()),
            )
            .with_data_source("aws_sqs_queue", ResourceSpec::new())
    }

    #[test]
    fn test_lookup_by_kind() {
        let registry = registry();
        let resource = registry
            .lookup(&SchemaTarget::Resource("aws_sqs_queue".to_string()))
            .unwrap();
        assert!(resource.schema.contains_key("name"));

        let data_source = registry
            .lookup(&SchemaTarget::DataSource("aws_sqs_queue".to_string()))
            .unwrap();
        assert!(data_source.schema.is_empty());
    }

    #[test]
    fn test_lookup_missing() {
        let err = registry()
            .lookup(&SchemaTarget::DataSource("aws_sns_topic".to_string()))
            .unwrap_err();
        assert_eq!(err.to_string(), "data source type aws_sns_topic not found");
    }

    #[test]
    fn test_from_yaml_file() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(
            file,
            "resources:\n  aws_sqs_queue:\n    schema:\n      fifo_queue:\n        type: bool\n        optional: true\n        force_new: true\n"
        )
        .unwrap();

        let registry = ProviderRegistry::from_path(file.path()).unwrap();
        let spec = &registry.resources["aws_sqs_queue"];
        assert!(spec.schema["fifo_queue"].force_new);
        assert!(registry.data_sources.is_empty());
    }

    #[test]
    fn test_resource_spec_from_json_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"schema": {{"arn": {{"type": "string", "computed": true}}}}, "importable": true}}"#).unwrap();

        let spec = ResourceSpec::from_path(file.path()).unwrap();
        assert!(spec.importable);
        assert!(spec.schema["arn"].is_computed_only());
    }

    #[test]
    fn test_parse_error_names_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "not json").unwrap();

        let err = ProviderRegistry::from_path(file.path()).unwrap_err();
        assert!(matches!(err, Error::Json { .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = ResourceSpec::from_path(Path::new("/nonexistent/schema.json")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
