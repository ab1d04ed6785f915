//! Kind mapping between the two schema models
//!
//! Copyright (c) 2025 Tfsdk2fw Team
//! Licensed under the Apache-2.0 license

use crate::target::{AttributeKind, ModifierAction, PlanModifier, TypeDescriptor};
use crate::types::ValueType;

/// Target value type of a primitive kind; `None` for aggregates and
/// unsupported kinds
pub fn primitive_type(value_type: ValueType) -> Option<TypeDescriptor> {
    match value_type {
        ValueType::Bool => Some(TypeDescriptor::Bool),
        ValueType::Float => Some(TypeDescriptor::Float64),
        ValueType::Int => Some(TypeDescriptor::Int64),
        ValueType::String => Some(TypeDescriptor::String),
        ValueType::List
        | ValueType::Map
        | ValueType::Set
        | ValueType::Object
        | ValueType::Invalid => None,
    }
}

/// Attribute kind of a primitive kind
pub fn scalar_attribute_kind(value_type: ValueType) -> Option<AttributeKind> {
    match value_type {
        ValueType::Bool => Some(AttributeKind::Bool),
        ValueType::Float => Some(AttributeKind::Float64),
        ValueType::Int => Some(AttributeKind::Int64),
        ValueType::String => Some(AttributeKind::String),
        ValueType::List
        | ValueType::Map
        | ValueType::Set
        | ValueType::Object
        | ValueType::Invalid => None,
    }
}

/// Names that hold an ARN
pub fn is_arn_name(name: &str) -> bool {
    name == "arn" || name.ends_with("_arn")
}

/// Plan modifier of the family matching an attribute kind
pub fn plan_modifier(kind: &AttributeKind, action: ModifierAction) -> PlanModifier {
    PlanModifier {
        family: kind.modifier_family(),
        action,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::target::ModifierFamily;

    #[test]
    fn test_primitive_types() {
        assert_eq!(primitive_type(ValueType::Float), Some(TypeDescriptor::Float64));
        assert_eq!(primitive_type(ValueType::Int), Some(TypeDescriptor::Int64));
        assert_eq!(primitive_type(ValueType::List), None);
        assert_eq!(primitive_type(ValueType::Object), None);
    }

    #[test]
    fn test_scalar_attribute_kinds() {
        assert_eq!(scalar_attribute_kind(ValueType::Bool), Some(AttributeKind::Bool));
        assert_eq!(scalar_attribute_kind(ValueType::Invalid), None);
    }

    #[test]
    fn test_arn_names() {
        assert!(is_arn_name("arn"));
        assert!(is_arn_name("role_arn"));
        assert!(!is_arn_name("arnold"));
        assert!(!is_arn_name("arn_prefix"));
    }

    #[test]
    fn test_plan_modifier_family() {
        let modifier = plan_modifier(
            &AttributeKind::Map {
                element: TypeDescriptor::String,
            },
            ModifierAction::RequiresReplace,
        );
        assert_eq!(modifier.family, ModifierFamily::Map);
        assert_eq!(modifier.call(), "mapplanmodifier.RequiresReplace()");
    }
}
