//! Attribute-vs-block classification
//!
//! Copyright (c) 2025 Tfsdk2fw Team
//! Licensed under the Apache-2.0 license

use crate::types::{ConfigMode, Element, PropertySpec, ResourceSpec, ValueType};
use serde::Serialize;
use std::fmt;

/// How a property is represented in the target schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Classification {
    Attribute,
    Block,
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::Attribute => write!(f, "attribute"),
            Classification::Block => write!(f, "block"),
        }
    }
}

/// Decide whether a property becomes an attribute or a block.
///
/// Rules are evaluated in order and the first match wins:
/// 1. no nested element: attribute
/// 2. maps: attribute (maps have no block representation)
/// 3. explicit `config_mode` override
/// 4. computed-only: attribute (never appears in configuration)
/// 5. aggregate of primitives: attribute
/// 6. aggregate of nested resources: block
///
/// Rule 4 deliberately precedes rule 6; computed-only nested objects are
/// emitted as object-typed attributes.
pub fn classify(property: &PropertySpec) -> Classification {
    let Some(elem) = &property.elem else {
        return Classification::Attribute;
    };

    if property.value_type == ValueType::Map {
        return Classification::Attribute;
    }

    match property.config_mode {
        ConfigMode::Attribute => return Classification::Attribute,
        ConfigMode::Block => return Classification::Block,
        ConfigMode::Auto => {}
    }

    if property.is_computed_only() {
        return Classification::Attribute;
    }

    match elem {
        Element::Schema(_) => Classification::Attribute,
        Element::Resource(_) => Classification::Block,
    }
}

/// Classification of one property within a resource tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedProperty {
    /// Dotted path from the resource root
    pub path: String,
    pub value_type: ValueType,
    pub classification: Classification,
    pub computed_only: bool,
    /// Attribute whose element is a nested resource, emitted as an object type
    pub object_typed: bool,
}

/// Classify every property of a resource, descending into blocks.
///
/// Properties inside object-typed attributes are not listed; they become
/// object type members rather than attributes or blocks.
pub fn classify_tree(resource: &ResourceSpec) -> Vec<ClassifiedProperty> {
    let mut classified = Vec::new();
    collect(&[], resource, &mut classified);
    classified
}

fn collect(path: &[&str], resource: &ResourceSpec, out: &mut Vec<ClassifiedProperty>) {
    for (name, property) in &resource.schema {
        let mut child = path.to_vec();
        child.push(name);

        let classification = classify(property);
        let nested = match &property.elem {
            Some(Element::Resource(nested)) => Some(nested),
            _ => None,
        };

        out.push(ClassifiedProperty {
            path: child.join("."),
            value_type: property.value_type,
            classification,
            computed_only: property.is_computed_only(),
            object_typed: classification == Classification::Attribute && nested.is_some(),
        });

        if let (Classification::Block, Some(nested)) = (classification, nested) {
            collect(&child, nested, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nested_resource() -> ResourceSpec {
        ResourceSpec::new().with_property("name", PropertySpec::new(ValueType::String).with_required())
    }

    #[test]
    fn test_scalar_is_attribute() {
        let property = PropertySpec::new(ValueType::String).with_required();
        assert_eq!(classify(&property), Classification::Attribute);
    }

    #[test]
    fn test_map_is_attribute_even_with_block_override() {
        let property = PropertySpec::nested(ValueType::Map, nested_resource())
            .with_optional()
            .with_config_mode(ConfigMode::Block);
        assert_eq!(classify(&property), Classification::Attribute);
    }

    #[test]
    fn test_override_is_honored() {
        let forced_attribute = PropertySpec::nested(ValueType::List, nested_resource())
            .with_optional()
            .with_config_mode(ConfigMode::Attribute);
        assert_eq!(classify(&forced_attribute), Classification::Attribute);

        let forced_block = PropertySpec::nested(ValueType::List, nested_resource())
            .with_computed()
            .with_config_mode(ConfigMode::Block);
        assert_eq!(classify(&forced_block), Classification::Block);
    }

    #[test]
    fn test_computed_only_nested_is_attribute() {
        let property = PropertySpec::nested(ValueType::List, nested_resource()).with_computed();
        assert_eq!(classify(&property), Classification::Attribute);
    }

    #[test]
    fn test_optional_computed_nested_is_block() {
        let property = PropertySpec::nested(ValueType::Set, nested_resource())
            .with_optional()
            .with_computed();
        assert_eq!(classify(&property), Classification::Block);
    }

    #[test]
    fn test_aggregate_of_primitives_is_attribute() {
        let property = PropertySpec::aggregate_of(ValueType::Set, ValueType::String).with_optional();
        assert_eq!(classify(&property), Classification::Attribute);
    }

    #[test]
    fn test_classify_tree_descends_into_blocks_only() {
        let resource = ResourceSpec::new()
            .with_property(
                "rule",
                PropertySpec::nested(ValueType::List, nested_resource()).with_optional(),
            )
            .with_property(
                "status",
                PropertySpec::nested(ValueType::List, nested_resource()).with_computed(),
            );

        let classified = classify_tree(&resource);
        let paths: Vec<_> = classified.iter().map(|c| c.path.as_str()).collect();
        assert_eq!(paths, vec!["rule", "rule.name", "status"]);
        assert_eq!(classified[0].classification, Classification::Block);
        assert!(classified[2].object_typed);
        assert!(classified[2].computed_only);
    }
}
