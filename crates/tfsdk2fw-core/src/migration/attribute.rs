//! Attribute emission
//!
//! Copyright (c) 2025 Tfsdk2fw Team
//! Licensed under the Apache-2.0 license

use super::computed;
use super::findings::{AdvisoryCode, Findings};
use super::orchestrator::Emitter;
use super::type_mapper::{is_arn_name, plan_modifier, primitive_type, scalar_attribute_kind};
use crate::error::{Error, Result};
use crate::target::{
    AttributeDef, AttributeKind, CustomType, ModifierAction, TagsPlaceholder, TypeDescriptor,
};
use crate::types::{Element, PropertySpec, ValueType};
use crate::SchemaKind;

/// Result of emitting one attribute-classified property
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeEmission {
    Attribute(AttributeDef),
    /// Top-level tags map handed over to the tags helpers
    Tags(TagsPlaceholder),
}

impl Emitter {
    /// Emit an attribute for the property at `path` (root first, property name last)
    pub fn emit_attribute(
        &self,
        path: &[&str],
        property: &PropertySpec,
    ) -> Result<(AttributeEmission, Findings)> {
        let name = path.last().copied().unwrap_or_default();
        let is_top_level = path.len() == 1;
        let mut findings = Findings::default();

        let (kind, custom_type) = match property.value_type {
            ValueType::Bool | ValueType::Float | ValueType::Int => {
                (self.scalar_kind(path, property.value_type)?, None)
            }
            ValueType::String => {
                // Computed-only ARNs are left as plain strings
                if is_arn_name(name) && !property.is_computed_only() {
                    findings.import_provider_framework_types = true;
                    (AttributeKind::String, Some(CustomType::Arn))
                } else {
                    (AttributeKind::String, None)
                }
            }
            ValueType::List => {
                let (element, nested) = self.element_type(path, property)?;
                findings.merge(nested);
                (AttributeKind::List { element }, None)
            }
            ValueType::Map => {
                let (element, nested) = self.element_type(path, property)?;
                findings.merge(nested);
                if is_top_level && element == TypeDescriptor::String {
                    if let Some(placeholder) = tags_placeholder(name, property) {
                        record_tags(&mut findings, path, name, placeholder);
                        // The helper line carries no field markers
                        if property.force_new {
                            let modifier = plan_modifier(
                                &AttributeKind::Map { element },
                                ModifierAction::RequiresReplace,
                            );
                            findings.plan_modifier_packages.insert(modifier.family.package().to_string());
                        }
                        advise_unmigrated(&mut findings, path, property, false);
                        return Ok((AttributeEmission::Tags(placeholder), findings));
                    }
                }
                (AttributeKind::Map { element }, None)
            }
            ValueType::Set => {
                let (element, nested) = self.element_type(path, property)?;
                findings.merge(nested);
                (AttributeKind::Set { element }, None)
            }
            ValueType::Object | ValueType::Invalid => {
                return Err(Error::unsupported_type(path, property.value_type.to_string()));
            }
        };

        let mut attribute = AttributeDef::new(kind);
        attribute.custom_type = custom_type;
        attribute.required = property.required;
        attribute.optional = property.optional;
        attribute.computed = property.computed;
        attribute.sensitive = property.sensitive;
        attribute.description = property.description.clone();
        attribute.deprecation_message = property.deprecated.clone();

        if is_top_level && name == "id" {
            attribute.id_helper = attribute.kind == AttributeKind::String && custom_type.is_none();

            // Identifiers never change once assigned
            if self.kind == SchemaKind::Resource {
                let modifier = plan_modifier(&attribute.kind, ModifierAction::UseStateForUnknown);
                findings.plan_modifier_packages.insert(modifier.family.package().to_string());
                attribute.plan_modifiers.push(modifier);
            }
        }

        if property.force_new {
            let modifier = plan_modifier(&attribute.kind, ModifierAction::RequiresReplace);
            findings.plan_modifier_packages.insert(modifier.family.package().to_string());
            attribute.plan_modifiers.push(modifier);
        }

        advise_unmigrated(&mut findings, path, property, true);
        attribute.unsupported_default = property.default.clone();
        attribute.has_validator = property.has_validator;

        Ok((AttributeEmission::Attribute(attribute), findings))
    }

    fn scalar_kind(&self, path: &[&str], value_type: ValueType) -> Result<AttributeKind> {
        scalar_attribute_kind(value_type)
            .ok_or_else(|| Error::unsupported_type(path, value_type.to_string()))
    }

    /// Element type of an aggregate attribute
    fn element_type(
        &self,
        path: &[&str],
        property: &PropertySpec,
    ) -> Result<(TypeDescriptor, Findings)> {
        match &property.elem {
            Some(Element::Schema(leaf)) => primitive_type(leaf.value_type)
                .map(|element| (element, Findings::default()))
                .ok_or_else(|| {
                    Error::unsupported_type(
                        path,
                        format!("(attribute) {} of {}", property.value_type, leaf.value_type),
                    )
                }),
            // Only computed-only (or explicitly attribute-mode) aggregates of objects get here
            Some(Element::Resource(resource)) => {
                let (object, findings) = computed::object_type(path, resource)?;
                Ok((TypeDescriptor::Object(object), findings))
            }
            None => Err(Error::unsupported_type(
                path,
                format!("(attribute) {} without element", property.value_type),
            )),
        }
    }
}

/// Advisories for the default and validator, which have no framework counterpart
fn advise_unmigrated(findings: &mut Findings, path: &[&str], property: &PropertySpec, inline: bool) {
    if let Some(default) = &property.default {
        findings.advise(
            AdvisoryCode::DefaultValue,
            path,
            format!("Default {} cannot be migrated", default),
            inline,
        );
    }

    if property.has_validator {
        findings.advise(
            AdvisoryCode::Validator,
            path,
            "Validation function cannot be migrated",
            inline,
        );
    }
}

fn tags_placeholder(name: &str, property: &PropertySpec) -> Option<TagsPlaceholder> {
    match name {
        "tags" if property.is_computed_only() => Some(TagsPlaceholder::ComputedOnly),
        "tags" => Some(TagsPlaceholder::Configurable),
        "tags_all" => Some(TagsPlaceholder::ComputedOnly),
        _ => None,
    }
}

fn record_tags(findings: &mut Findings, path: &[&str], name: &str, placeholder: TagsPlaceholder) {
    if name == "tags" {
        findings.has_top_level_tags_map = true;
    } else {
        findings.has_top_level_tags_all_map = true;
    }
    findings.advise(
        AdvisoryCode::TagsHelper,
        path,
        format!("Top-level `{}` map left to {}", name, placeholder.helper()),
        true,
    );
}
