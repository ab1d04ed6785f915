//! Object types for computed-only nested data
//!
//! A computed-only aggregate of nested resources never appears in
//! configuration, so it is emitted as an attribute whose element is a pure
//! structural object type: no flags, descriptions or plan modifiers, only the
//! value shape.
//!
//! Copyright (c) 2025 Tfsdk2fw Team
//! Licensed under the Apache-2.0 license

use super::findings::Findings;
use super::type_mapper::primitive_type;
use crate::error::{Error, Result};
use crate::target::{ObjectType, TypeDescriptor};
use crate::types::{Element, PropertySpec, ResourceSpec, ValueType};

/// Build the object type of a nested resource, properties in name order
pub fn object_type(path: &[&str], resource: &ResourceSpec) -> Result<(ObjectType, Findings)> {
    let mut findings = Findings::default();
    let mut object = ObjectType::default();

    for (name, property) in &resource.schema {
        let mut child = path.to_vec();
        child.push(name);

        let (attr_type, nested) = property_type(&child, property)?;
        findings.merge(nested);
        object.attr_types.insert(name.clone(), attr_type);
    }

    if !object.attr_types.is_empty() {
        findings.import_framework_attr = true;
    }

    Ok((object, findings))
}

fn property_type(path: &[&str], property: &PropertySpec) -> Result<(TypeDescriptor, Findings)> {
    match property.value_type {
        ValueType::Bool => Ok((TypeDescriptor::Bool, Findings::default())),
        ValueType::Float => Ok((TypeDescriptor::Float64, Findings::default())),
        ValueType::Int => Ok((TypeDescriptor::Int64, Findings::default())),
        ValueType::String => Ok((TypeDescriptor::String, Findings::default())),
        ValueType::List => {
            let (element, findings) = element_type(path, property)?;
            Ok((TypeDescriptor::List(Box::new(element)), findings))
        }
        ValueType::Map => {
            let (element, findings) = element_type(path, property)?;
            Ok((TypeDescriptor::Map(Box::new(element)), findings))
        }
        ValueType::Set => {
            let (element, findings) = element_type(path, property)?;
            Ok((TypeDescriptor::Set(Box::new(element)), findings))
        }
        ValueType::Object | ValueType::Invalid => {
            Err(Error::unsupported_type(path, property.value_type.to_string()))
        }
    }
}

fn element_type(path: &[&str], property: &PropertySpec) -> Result<(TypeDescriptor, Findings)> {
    match &property.elem {
        Some(Element::Schema(leaf)) => primitive_type(leaf.value_type)
            .map(|element| (element, Findings::default()))
            .ok_or_else(|| {
                Error::unsupported_type(
                    path,
                    format!("(computed-only object) {} of {}", property.value_type, leaf.value_type),
                )
            }),
        Some(Element::Resource(resource)) => {
            let (object, findings) = object_type(path, resource)?;
            Ok((TypeDescriptor::Object(object), findings))
        }
        None => Err(Error::unsupported_type(
            path,
            format!("(computed-only object) {} without element", property.value_type),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_object_type() {
        let resource = ResourceSpec::new()
            .with_property("name", PropertySpec::new(ValueType::String).with_required())
            .with_property("count", PropertySpec::new(ValueType::Int).with_force_new())
            .with_property("ratio", PropertySpec::new(ValueType::Float))
            .with_property("enabled", PropertySpec::new(ValueType::Bool));

        let (object, findings) = object_type(&["status"], &resource).unwrap();
        let names: Vec<_> = object.attr_types.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["count", "enabled", "name", "ratio"]);
        assert_eq!(object.attr_types["ratio"], TypeDescriptor::Float64);
        assert!(findings.import_framework_attr);
        // Flags such as force_new carry no configuration semantics here
        assert!(findings.plan_modifier_packages.is_empty());
    }

    #[test]
    fn test_nested_aggregates() {
        let inner = ResourceSpec::new().with_property("port", PropertySpec::new(ValueType::Int));
        let resource = ResourceSpec::new()
            .with_property("labels", PropertySpec::aggregate_of(ValueType::Map, ValueType::String))
            .with_property("listeners", PropertySpec::nested(ValueType::Set, inner));

        let (object, _) = object_type(&["status"], &resource).unwrap();
        assert_eq!(
            object.attr_types["labels"],
            TypeDescriptor::Map(Box::new(TypeDescriptor::String))
        );
        match &object.attr_types["listeners"] {
            TypeDescriptor::Set(element) => match element.as_ref() {
                TypeDescriptor::Object(inner) => {
                    assert_eq!(inner.attr_types["port"], TypeDescriptor::Int64)
                }
                other => panic!("expected object element, got {:?}", other),
            },
            other => panic!("expected set, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_object_does_not_need_attr_import() {
        let (object, findings) = object_type(&["status"], &ResourceSpec::new()).unwrap();
        assert!(object.attr_types.is_empty());
        assert!(!findings.import_framework_attr);
    }

    #[test]
    fn test_unsupported_kind_reports_path() {
        let resource = ResourceSpec::new().with_property("blob", PropertySpec::new(ValueType::Object));
        let err = object_type(&["status"], &resource).unwrap_err();
        assert_eq!(err.property_path(), Some("status.blob"));
    }

    #[test]
    fn test_aggregate_of_aggregate_is_unsupported() {
        let resource = ResourceSpec::new().with_property(
            "matrix",
            PropertySpec::aggregate_of(ValueType::List, ValueType::List),
        );
        let err = object_type(&["status"], &resource).unwrap_err();
        assert!(err.to_string().starts_with("status.matrix is of unsupported type"));
    }
}
