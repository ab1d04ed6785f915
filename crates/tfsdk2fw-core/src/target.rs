//! Target model: Plugin Framework schema descriptors
//!
//! The migration engine builds these trees during its walk over the source
//! model; the renderers in [`crate::render`] turn them into Go source text
//! afterwards. Maps are `BTreeMap`s so that rendering order is always name
//! order.

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Value type of an element or of an object type's attribute
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeDescriptor {
    Bool,
    Float64,
    Int64,
    String,
    List(Box<TypeDescriptor>),
    Map(Box<TypeDescriptor>),
    Set(Box<TypeDescriptor>),
    Object(ObjectType),
}

/// Structural object type used for computed-only nested data
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ObjectType {
    pub attr_types: BTreeMap<String, TypeDescriptor>,
}

/// Plan modifier family; one per attribute value kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ModifierFamily {
    Bool,
    Float64,
    Int64,
    String,
    List,
    Map,
    Set,
}

impl ModifierFamily {
    /// Go package providing the family's plan modifiers
    pub fn package(self) -> &'static str {
        match self {
            ModifierFamily::Bool => "boolplanmodifier",
            ModifierFamily::Float64 => "float64planmodifier",
            ModifierFamily::Int64 => "int64planmodifier",
            ModifierFamily::String => "stringplanmodifier",
            ModifierFamily::List => "listplanmodifier",
            ModifierFamily::Map => "mapplanmodifier",
            ModifierFamily::Set => "setplanmodifier",
        }
    }

    /// Type name inside the `planmodifier` package
    pub fn interface(self) -> &'static str {
        match self {
            ModifierFamily::Bool => "Bool",
            ModifierFamily::Float64 => "Float64",
            ModifierFamily::Int64 => "Int64",
            ModifierFamily::String => "String",
            ModifierFamily::List => "List",
            ModifierFamily::Map => "Map",
            ModifierFamily::Set => "Set",
        }
    }
}

/// What a plan modifier does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ModifierAction {
    /// Keep the prior state value when the planned value is unknown
    UseStateForUnknown,
    /// A change forces the resource to be replaced
    RequiresReplace,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlanModifier {
    pub family: ModifierFamily,
    pub action: ModifierAction,
}

impl PlanModifier {
    /// Go call expression, e.g. `stringplanmodifier.RequiresReplace()`
    pub fn call(&self) -> String {
        let function = match self.action {
            ModifierAction::UseStateForUnknown => "UseStateForUnknown",
            ModifierAction::RequiresReplace => "RequiresReplace",
        };
        format!("{}.{}()", self.family.package(), function)
    }
}

/// Kind of an emitted attribute
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeKind {
    Bool,
    Float64,
    Int64,
    String,
    List { element: TypeDescriptor },
    Map { element: TypeDescriptor },
    Set { element: TypeDescriptor },
}

impl AttributeKind {
    /// Schema constructor, e.g. `schema.StringAttribute`
    pub fn constructor(&self) -> &'static str {
        match self {
            AttributeKind::Bool => "schema.BoolAttribute",
            AttributeKind::Float64 => "schema.Float64Attribute",
            AttributeKind::Int64 => "schema.Int64Attribute",
            AttributeKind::String => "schema.StringAttribute",
            AttributeKind::List { .. } => "schema.ListAttribute",
            AttributeKind::Map { .. } => "schema.MapAttribute",
            AttributeKind::Set { .. } => "schema.SetAttribute",
        }
    }

    /// Value type of the corresponding model struct field
    pub fn model_type(&self) -> &'static str {
        match self {
            AttributeKind::Bool => "types.Bool",
            AttributeKind::Float64 => "types.Float64",
            AttributeKind::Int64 => "types.Int64",
            AttributeKind::String => "types.String",
            AttributeKind::List { .. } => "types.List",
            AttributeKind::Map { .. } => "types.Map",
            AttributeKind::Set { .. } => "types.Set",
        }
    }

    pub fn modifier_family(&self) -> ModifierFamily {
        match self {
            AttributeKind::Bool => ModifierFamily::Bool,
            AttributeKind::Float64 => ModifierFamily::Float64,
            AttributeKind::Int64 => ModifierFamily::Int64,
            AttributeKind::String => ModifierFamily::String,
            AttributeKind::List { .. } => ModifierFamily::List,
            AttributeKind::Map { .. } => ModifierFamily::Map,
            AttributeKind::Set { .. } => ModifierFamily::Set,
        }
    }

    /// Element type of an aggregate attribute
    pub fn element(&self) -> Option<&TypeDescriptor> {
        match self {
            AttributeKind::List { element }
            | AttributeKind::Map { element }
            | AttributeKind::Set { element } => Some(element),
            AttributeKind::Bool
            | AttributeKind::Float64
            | AttributeKind::Int64
            | AttributeKind::String => None,
        }
    }
}

/// Custom value types provided by the provider itself
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CustomType {
    /// ARN-validated string
    Arn,
}

impl CustomType {
    pub fn schema_type(self) -> &'static str {
        match self {
            CustomType::Arn => "fwtypes.ARNType",
        }
    }

    pub fn model_type(self) -> &'static str {
        match self {
            CustomType::Arn => "fwtypes.ARN",
        }
    }
}

/// A Plugin Framework attribute
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttributeDef {
    pub kind: AttributeKind,
    pub custom_type: Option<CustomType>,
    pub required: bool,
    pub optional: bool,
    pub computed: bool,
    pub sensitive: bool,
    pub description: String,
    pub deprecation_message: String,
    pub plan_modifiers: Vec<PlanModifier>,
    /// Top-level `id`; a shared helper should eventually replace the literal
    pub id_helper: bool,
    /// Default value that has no framework equivalent
    pub unsupported_default: Option<Value>,
    /// A validation function that has no framework equivalent
    pub has_validator: bool,
}

impl AttributeDef {
    pub fn new(kind: AttributeKind) -> Self {
        Self {
            kind,
            custom_type: None,
            required: false,
            optional: false,
            computed: false,
            sensitive: false,
            description: String::new(),
            deprecation_message: String::new(),
            plan_modifiers: Vec::new(),
            id_helper: false,
            unsupported_default: None,
            has_validator: false,
        }
    }

    /// Value type of the corresponding model struct field
    pub fn model_type(&self) -> &'static str {
        match self.custom_type {
            Some(custom) => custom.model_type(),
            None => self.kind.model_type(),
        }
    }
}

/// Nesting mode of a block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BlockNesting {
    List,
    Set,
}

impl BlockNesting {
    pub fn constructor(self) -> &'static str {
        match self {
            BlockNesting::List => "schema.ListNestedBlock",
            BlockNesting::Set => "schema.SetNestedBlock",
        }
    }
}

/// A Plugin Framework nested block
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlockDef {
    pub nesting: BlockNesting,
    pub nested: NestedObject,
    /// Zero means unset
    pub min_items: u32,
    /// Zero means unset
    pub max_items: u32,
    pub description: String,
    pub deprecation_message: String,
}

/// Attributes and blocks of a schema or of a nested block object
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NestedObject {
    pub attributes: BTreeMap<String, AttributeDef>,
    pub blocks: BTreeMap<String, BlockDef>,
}

/// Which tags helper stands in for a top-level tags map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TagsPlaceholder {
    /// `tags` accepted from configuration
    Configurable,
    /// `tags_all`, or a `tags` map that is only ever computed
    ComputedOnly,
}

impl TagsPlaceholder {
    pub fn helper(self) -> &'static str {
        match self {
            TagsPlaceholder::Configurable => "tftags.TagsAttribute()",
            TagsPlaceholder::ComputedOnly => "tftags.TagsAttributeComputedOnly()",
        }
    }
}

/// Root schema of a resource or data source
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResourceSchema {
    pub root: NestedObject,
    /// Top-level tag maps that are not emitted as literal attributes
    pub tags: BTreeMap<String, TagsPlaceholder>,
    /// Zero means unset
    pub version: u32,
    pub description: String,
    pub deprecation_message: String,
}

/// One field of the companion model struct
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelField {
    pub go_name: String,
    pub go_type: String,
    pub tfsdk_name: String,
}

/// Companion model struct: one field per top-level attribute
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ModelStruct {
    pub fields: Vec<ModelField>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_modifier_call() {
        let modifier = PlanModifier {
            family: ModifierFamily::Int64,
            action: ModifierAction::RequiresReplace,
        };
        assert_eq!(modifier.call(), "int64planmodifier.RequiresReplace()");
    }

    #[test]
    fn test_attribute_model_type_prefers_custom_type() {
        let mut attribute = AttributeDef::new(AttributeKind::String);
        assert_eq!(attribute.model_type(), "types.String");

        attribute.custom_type = Some(CustomType::Arn);
        assert_eq!(attribute.model_type(), "fwtypes.ARN");
    }

    #[test]
    fn test_aggregate_kind_metadata() {
        let kind = AttributeKind::Set {
            element: TypeDescriptor::Int64,
        };
        assert_eq!(kind.constructor(), "schema.SetAttribute");
        assert_eq!(kind.modifier_family().package(), "setplanmodifier");
        assert_eq!(kind.element(), Some(&TypeDescriptor::Int64));
        assert_eq!(AttributeKind::Bool.element(), None);
    }
}
