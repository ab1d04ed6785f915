//! Renders a [`ResourceSchema`] as a Plugin Framework `schema.Schema` literal

use super::writer::{quote, GoWriter};
use crate::target::{
    AttributeDef, BlockDef, ResourceSchema, TagsPlaceholder, TypeDescriptor,
};
use std::collections::{BTreeMap, BTreeSet};

/// Render the schema literal; attributes precede blocks, both in name order
pub fn render(schema: &ResourceSchema) -> String {
    let mut w = GoWriter::new();

    w.open("schema.Schema{");
    write_attributes(&mut w, &schema.root.attributes, &schema.tags);
    write_blocks(&mut w, &schema.root.blocks);

    if schema.version > 0 {
        w.line(format!("Version: {},", schema.version));
    }
    if !schema.description.is_empty() {
        w.line(format!("Description: {},", quote(&schema.description)));
    }
    if !schema.deprecation_message.is_empty() {
        w.line(format!("DeprecationMessage: {},", quote(&schema.deprecation_message)));
    }
    w.close("}");

    w.finish()
}

fn write_attributes(
    w: &mut GoWriter,
    attributes: &BTreeMap<String, AttributeDef>,
    tags: &BTreeMap<String, TagsPlaceholder>,
) {
    if attributes.is_empty() && tags.is_empty() {
        return;
    }

    let names: BTreeSet<&str> = attributes
        .keys()
        .chain(tags.keys())
        .map(String::as_str)
        .collect();

    w.open("Attributes: map[string]schema.Attribute{");
    for name in names {
        if let Some(attribute) = attributes.get(name) {
            write_attribute(w, name, attribute);
        } else if let Some(placeholder) = tags.get(name) {
            w.line(format!("// TODO {}: {},", quote(name), placeholder.helper()));
        }
    }
    w.close("},");
}

fn write_attribute(w: &mut GoWriter, name: &str, attribute: &AttributeDef) {
    if attribute.id_helper {
        w.line("// TODO framework.IDAttribute()");
    }
    w.open(format!("{}: {}{{", quote(name), attribute.kind.constructor()));

    if let Some(custom_type) = attribute.custom_type {
        w.line(format!("CustomType: {},", custom_type.schema_type()));
    }
    if let Some(element) = attribute.kind.element() {
        write_type(w, "ElementType: ", element, ",");
    }
    if attribute.required {
        w.line("Required: true,");
    }
    if attribute.optional {
        w.line("Optional: true,");
    }
    if attribute.computed {
        w.line("Computed: true,");
    }
    if attribute.sensitive {
        w.line("Sensitive: true,");
    }
    if !attribute.description.is_empty() {
        w.line(format!("Description: {},", quote(&attribute.description)));
    }
    if !attribute.deprecation_message.is_empty() {
        w.line(format!(
            "DeprecationMessage: {},",
            quote(&attribute.deprecation_message)
        ));
    }
    if !attribute.plan_modifiers.is_empty() {
        w.open(format!(
            "PlanModifiers: []planmodifier.{}{{",
            attribute.kind.modifier_family().interface()
        ));
        for modifier in &attribute.plan_modifiers {
            w.line(format!("{},", modifier.call()));
        }
        w.close("},");
    }

    // Features that cannot be migrated
    if let Some(default) = &attribute.unsupported_default {
        w.line(format!("// TODO Default:{},", default));
    }
    if attribute.has_validator {
        w.line("// TODO Validate,");
    }

    w.close("},");
}

fn write_blocks(w: &mut GoWriter, blocks: &BTreeMap<String, BlockDef>) {
    if blocks.is_empty() {
        return;
    }

    w.open("Blocks: map[string]schema.Block{");
    for (name, block) in blocks {
        write_block(w, name, block);
    }
    w.close("},");
}

fn write_block(w: &mut GoWriter, name: &str, block: &BlockDef) {
    w.open(format!("{}: {}{{", quote(name), block.nesting.constructor()));

    w.open("NestedObject: schema.NestedBlockObject{");
    write_attributes(w, &block.nested.attributes, &BTreeMap::new());
    write_blocks(w, &block.nested.blocks);
    w.close("},");

    if block.max_items > 0 {
        w.line(format!("MaxItems: {},", block.max_items));
    }
    if block.min_items > 0 {
        w.line(format!("MinItems: {},", block.min_items));
    }
    if !block.description.is_empty() {
        w.line(format!("Description: {},", quote(&block.description)));
    }
    if !block.deprecation_message.is_empty() {
        w.line(format!("DeprecationMessage: {},", quote(&block.deprecation_message)));
    }

    w.close("},");
}

/// Write a type expression wrapped in `prefix` and `suffix`.
/// Object types span several lines; everything else stays on one.
fn write_type(w: &mut GoWriter, prefix: &str, ty: &TypeDescriptor, suffix: &str) {
    match ty {
        TypeDescriptor::Bool => w.line(format!("{prefix}types.BoolType{suffix}")),
        TypeDescriptor::Float64 => w.line(format!("{prefix}types.Float64Type{suffix}")),
        TypeDescriptor::Int64 => w.line(format!("{prefix}types.Int64Type{suffix}")),
        TypeDescriptor::String => w.line(format!("{prefix}types.StringType{suffix}")),
        TypeDescriptor::List(element) => write_type(
            w,
            &format!("{prefix}types.ListType{{ElemType: "),
            element,
            &format!("}}{suffix}"),
        ),
        TypeDescriptor::Map(element) => write_type(
            w,
            &format!("{prefix}types.MapType{{ElemType: "),
            element,
            &format!("}}{suffix}"),
        ),
        TypeDescriptor::Set(element) => write_type(
            w,
            &format!("{prefix}types.SetType{{ElemType: "),
            element,
            &format!("}}{suffix}"),
        ),
        TypeDescriptor::Object(object) if object.attr_types.is_empty() => {
            w.line(format!("{prefix}types.ObjectType{{}}{suffix}"))
        }
        TypeDescriptor::Object(object) => {
            w.open(format!("{prefix}types.ObjectType{{"));
            w.open("AttrTypes: map[string]attr.Type{");
            for (name, attr_type) in &object.attr_types {
                write_type(w, &format!("{}: ", quote(name)), attr_type, ",");
            }
            w.close("},");
            w.close(format!("}}{suffix}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::target::{
        AttributeKind, BlockNesting, CustomType, ModifierAction, ModifierFamily, NestedObject,
        ObjectType, PlanModifier,
    };
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_minimal_schema() {
        let mut schema = ResourceSchema::default();
        let mut id = AttributeDef::new(AttributeKind::String);
        id.computed = true;
        id.id_helper = true;
        id.plan_modifiers.push(PlanModifier {
            family: ModifierFamily::String,
            action: ModifierAction::UseStateForUnknown,
        });
        schema.root.attributes.insert("id".to_string(), id);
        schema.version = 1;
        schema.description = "A \"queue\"".to_string();

        let expected = r#"schema.Schema{
	Attributes: map[string]schema.Attribute{
		// TODO framework.IDAttribute()
		"id": schema.StringAttribute{
			Computed: true,
			PlanModifiers: []planmodifier.String{
				stringplanmodifier.UseStateForUnknown(),
			},
		},
	},
	Version: 1,
	Description: "A \"queue\"",
}"#;
        assert_eq!(render(&schema), expected);
    }

    #[test]
    fn test_attribute_markers_and_custom_type() {
        let mut schema = ResourceSchema::default();
        let mut arn = AttributeDef::new(AttributeKind::String);
        arn.custom_type = Some(CustomType::Arn);
        arn.optional = true;
        arn.unsupported_default = Some(json!("arn:aws:iam::aws:policy/x"));
        arn.has_validator = true;
        schema.root.attributes.insert("policy_arn".to_string(), arn);
        schema
            .tags
            .insert("tags".to_string(), TagsPlaceholder::Configurable);

        let expected = r#"schema.Schema{
	Attributes: map[string]schema.Attribute{
		"policy_arn": schema.StringAttribute{
			CustomType: fwtypes.ARNType,
			Optional: true,
			// TODO Default:"arn:aws:iam::aws:policy/x",
			// TODO Validate,
		},
		// TODO "tags": tftags.TagsAttribute(),
	},
}"#;
        assert_eq!(render(&schema), expected);
    }

    #[test]
    fn test_object_typed_element() {
        let mut inner = ObjectType::default();
        inner.attr_types.insert("port".to_string(), TypeDescriptor::Int64);
        let mut object = ObjectType::default();
        object.attr_types.insert(
            "labels".to_string(),
            TypeDescriptor::Map(Box::new(TypeDescriptor::String)),
        );
        object.attr_types.insert(
            "listeners".to_string(),
            TypeDescriptor::List(Box::new(TypeDescriptor::Object(inner))),
        );
        object.attr_types.insert(
            "empty".to_string(),
            TypeDescriptor::Set(Box::new(TypeDescriptor::Object(ObjectType::default()))),
        );

        let mut status = AttributeDef::new(AttributeKind::List {
            element: TypeDescriptor::Object(object),
        });
        status.computed = true;

        let mut schema = ResourceSchema::default();
        schema.root.attributes.insert("status".to_string(), status);

        let expected = r#"schema.Schema{
	Attributes: map[string]schema.Attribute{
		"status": schema.ListAttribute{
			ElementType: types.ObjectType{
				AttrTypes: map[string]attr.Type{
					"empty": types.SetType{ElemType: types.ObjectType{}},
					"labels": types.MapType{ElemType: types.StringType},
					"listeners": types.ListType{ElemType: types.ObjectType{
						AttrTypes: map[string]attr.Type{
							"port": types.Int64Type,
						},
					}},
				},
			},
			Computed: true,
		},
	},
}"#;
        assert_eq!(render(&schema), expected);
    }

    #[test]
    fn test_blocks_after_attributes() {
        let mut nested = NestedObject::default();
        let mut priority = AttributeDef::new(AttributeKind::Int64);
        priority.required = true;
        nested.attributes.insert("priority".to_string(), priority);

        let mut schema = ResourceSchema::default();
        schema.root.blocks.insert(
            "rule".to_string(),
            BlockDef {
                nesting: BlockNesting::Set,
                nested,
                min_items: 1,
                max_items: 3,
                description: "Rules".to_string(),
                deprecation_message: String::new(),
            },
        );
        schema.root.blocks.insert(
            "empty".to_string(),
            BlockDef {
                nesting: BlockNesting::List,
                nested: NestedObject::default(),
                min_items: 0,
                max_items: 0,
                description: String::new(),
                deprecation_message: "gone".to_string(),
            },
        );

        let expected = r#"schema.Schema{
	Blocks: map[string]schema.Block{
		"empty": schema.ListNestedBlock{
			NestedObject: schema.NestedBlockObject{
			},
			DeprecationMessage: "gone",
		},
		"rule": schema.SetNestedBlock{
			NestedObject: schema.NestedBlockObject{
				Attributes: map[string]schema.Attribute{
					"priority": schema.Int64Attribute{
						Required: true,
					},
				},
			},
			MaxItems: 3,
			MinItems: 1,
			Description: "Rules",
		},
	},
}"#;
        assert_eq!(render(&schema), expected);
    }
}
