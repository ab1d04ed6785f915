//! Source model: Plugin SDK resource schemas
//!
//! These types describe a resource's configurable properties as the Plugin SDK
//! registry exposes them. They are read-only input to the migration engine and
//! are (de)serializable so that a registry can be dumped to JSON or YAML and
//! loaded back by the CLI.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Kind of a Plugin SDK schema property
///
/// `Object` and `Invalid` can appear in a registry but have no Plugin
/// Framework counterpart; the engine rejects them with a property path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueType {
    Bool,
    Int,
    Float,
    String,
    List,
    Map,
    Set,
    Object,
    /// Any kind name this tool does not recognize
    #[serde(other)]
    Invalid,
}

impl ValueType {
    /// List, Map or Set
    pub fn is_aggregate(self) -> bool {
        matches!(self, ValueType::List | ValueType::Map | ValueType::Set)
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueType::Bool => "bool",
            ValueType::Int => "int",
            ValueType::Float => "float",
            ValueType::String => "string",
            ValueType::List => "list",
            ValueType::Map => "map",
            ValueType::Set => "set",
            ValueType::Object => "object",
            ValueType::Invalid => "invalid",
        };
        f.write_str(name)
    }
}

/// Element of an aggregate property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Element {
    /// Aggregate of primitives, described by a leaf property
    Schema(Box<PropertySpec>),
    /// Aggregate of nested objects
    Resource(ResourceSpec),
}

/// Explicit attribute-vs-block classification override
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigMode {
    /// Let the classifier decide
    #[default]
    Auto,
    /// Force an attribute
    Attribute,
    /// Force a block
    Block,
}

/// A single schema property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertySpec {
    #[serde(rename = "type")]
    pub value_type: ValueType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elem: Option<Element>,

    #[serde(default)]
    pub required: bool,

    #[serde(default)]
    pub optional: bool,

    #[serde(default)]
    pub computed: bool,

    #[serde(default)]
    pub sensitive: bool,

    #[serde(default)]
    pub force_new: bool,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    /// Deprecation message
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub deprecated: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,

    /// Whether a validation function is attached
    #[serde(default)]
    pub has_validator: bool,

    #[serde(default)]
    pub config_mode: ConfigMode,

    #[serde(default)]
    pub min_items: u32,

    #[serde(default)]
    pub max_items: u32,
}

impl PropertySpec {
    /// Create a property of the given kind with every flag unset
    pub fn new(value_type: ValueType) -> Self {
        Self {
            value_type,
            elem: None,
            required: false,
            optional: false,
            computed: false,
            sensitive: false,
            force_new: false,
            description: String::new(),
            deprecated: String::new(),
            default: None,
            has_validator: false,
            config_mode: ConfigMode::Auto,
            min_items: 0,
            max_items: 0,
        }
    }

    /// Create an aggregate of primitives
    pub fn aggregate_of(value_type: ValueType, element_type: ValueType) -> Self {
        Self::new(value_type).with_elem(Element::Schema(Box::new(Self::new(element_type))))
    }

    /// Create an aggregate of nested objects
    pub fn nested(value_type: ValueType, resource: ResourceSpec) -> Self {
        Self::new(value_type).with_elem(Element::Resource(resource))
    }

    pub fn with_elem(mut self, elem: Element) -> Self {
        self.elem = Some(elem);
        self
    }

    pub fn with_required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn with_computed(mut self) -> Self {
        self.computed = true;
        self
    }

    pub fn with_sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }

    pub fn with_force_new(mut self) -> Self {
        self.force_new = true;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_deprecated(mut self, message: impl Into<String>) -> Self {
        self.deprecated = message.into();
        self
    }

    pub fn with_default(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }

    pub fn with_validator(mut self) -> Self {
        self.has_validator = true;
        self
    }

    pub fn with_config_mode(mut self, mode: ConfigMode) -> Self {
        self.config_mode = mode;
        self
    }

    pub fn with_items(mut self, min_items: u32, max_items: u32) -> Self {
        self.min_items = min_items;
        self.max_items = max_items;
        self
    }

    /// Populated by the provider and never accepted from configuration
    pub fn is_computed_only(&self) -> bool {
        self.computed && !self.optional
    }

    pub fn is_aggregate(&self) -> bool {
        self.value_type.is_aggregate()
    }
}

/// A resource (or nested object) schema
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceSpec {
    /// Properties by name; iteration order is the emission order
    #[serde(default)]
    pub schema: BTreeMap<String, PropertySpec>,

    #[serde(default)]
    pub schema_version: u32,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub deprecation_message: String,

    /// Whether the resource supports import
    #[serde(default)]
    pub importable: bool,

    /// Whether the resource supports in-place update
    #[serde(default)]
    pub updatable: bool,
}

impl ResourceSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_property(mut self, name: impl Into<String>, property: PropertySpec) -> Self {
        self.schema.insert(name.into(), property);
        self
    }

    pub fn with_schema_version(mut self, version: u32) -> Self {
        self.schema_version = version;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_deprecation_message(mut self, message: impl Into<String>) -> Self {
        self.deprecation_message = message.into();
        self
    }

    pub fn with_import(mut self) -> Self {
        self.importable = true;
        self
    }

    pub fn with_update(mut self) -> Self {
        self.updatable = true;
        self
    }
}
