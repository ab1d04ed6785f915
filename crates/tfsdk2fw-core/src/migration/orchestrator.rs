//! Walks a resource's properties and assembles the target schema
//!
//! Copyright (c) 2025 Tfsdk2fw Team
//! Licensed under the Apache-2.0 license

use super::attribute::AttributeEmission;
use super::classify::{classify, Classification};
use super::findings::{AdvisoryCode, Findings};
use super::naming::go_field_name;
use crate::error::Result;
use crate::target::{ModelField, ModelStruct, NestedObject, ResourceSchema, TagsPlaceholder};
use crate::types::{PropertySpec, ResourceSpec, ValueType};
use crate::SchemaKind;
use std::borrow::Cow;
use std::collections::BTreeMap;

/// Emission settings shared by every step of one migration.
///
/// Holds no mutable state; each step returns its own [`Findings`].
#[derive(Debug, Clone, Copy)]
pub struct Emitter {
    pub(crate) kind: SchemaKind,
}

/// Attributes, blocks and tag placeholders of one nesting level
struct Level {
    object: NestedObject,
    tags: BTreeMap<String, TagsPlaceholder>,
}

impl Emitter {
    pub fn new(kind: SchemaKind) -> Self {
        Self { kind }
    }

    /// Emit the root schema of a resource or data source
    pub fn emit_resource(&self, spec: &ResourceSpec) -> Result<(ResourceSchema, Findings)> {
        let mut findings = Findings::default();

        let resource = if spec.schema.contains_key("id") {
            findings.advise(
                AdvisoryCode::ExplicitId,
                &["id"],
                "Explicit `id` attribute defined",
                false,
            );
            Cow::Borrowed(spec)
        } else {
            let mut owned = spec.clone();
            owned.schema.insert("id".to_string(), self.synthesized_id());
            Cow::Owned(owned)
        };

        let (level, walked) = self.walk(&[], &resource)?;
        findings.merge(walked);

        Ok((
            ResourceSchema {
                root: level.object,
                tags: level.tags,
                version: spec.schema_version,
                description: spec.description.clone(),
                deprecation_message: spec.deprecation_message.clone(),
            },
            findings,
        ))
    }

    /// Emit the attributes and blocks of a nested resource
    pub fn emit_attributes_and_blocks(
        &self,
        path: &[&str],
        resource: &ResourceSpec,
    ) -> Result<(NestedObject, Findings)> {
        let (level, findings) = self.walk(path, resource)?;
        Ok((level.object, findings))
    }

    /// `id` added to schemas that do not declare one
    fn synthesized_id(&self) -> PropertySpec {
        let id = PropertySpec::new(ValueType::String).with_computed();
        match self.kind {
            SchemaKind::Resource => id,
            SchemaKind::DataSource => id.with_optional(),
        }
    }

    /// Attributes first, then blocks; each in name order
    fn walk(&self, path: &[&str], resource: &ResourceSpec) -> Result<(Level, Findings)> {
        let mut findings = Findings::default();
        let mut level = Level {
            object: NestedObject::default(),
            tags: BTreeMap::new(),
        };

        let (attributes, blocks): (Vec<_>, Vec<_>) = resource
            .schema
            .iter()
            .partition(|(_, property)| classify(property) == Classification::Attribute);

        for (name, property) in attributes {
            let mut child = path.to_vec();
            child.push(name);

            let (emission, emitted) = self.emit_attribute(&child, property)?;
            findings.merge(emitted);
            match emission {
                AttributeEmission::Attribute(attribute) => {
                    level.object.attributes.insert(name.clone(), attribute);
                }
                AttributeEmission::Tags(placeholder) => {
                    level.tags.insert(name.clone(), placeholder);
                }
            }
        }

        for (name, property) in blocks {
            let mut child = path.to_vec();
            child.push(name);

            let (block, emitted) = self.emit_block(&child, property)?;
            findings.merge(emitted);
            level.object.blocks.insert(name.clone(), block);
        }

        Ok((level, findings))
    }
}

/// Companion model struct: one field per top-level attribute, tags maps included
pub fn model_struct(schema: &ResourceSchema) -> ModelStruct {
    let mut types: BTreeMap<&str, &str> = schema
        .root
        .attributes
        .iter()
        .map(|(name, attribute)| (name.as_str(), attribute.model_type()))
        .collect();
    for name in schema.tags.keys() {
        types.insert(name.as_str(), "types.Map");
    }

    ModelStruct {
        fields: types
            .into_iter()
            .map(|(name, go_type)| ModelField {
                go_name: go_field_name(name),
                go_type: go_type.to_string(),
                tfsdk_name: name.to_string(),
            })
            .collect(),
    }
}
