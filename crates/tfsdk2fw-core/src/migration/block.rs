//! Block emission
//!
//! Copyright (c) 2025 Tfsdk2fw Team
//! Licensed under the Apache-2.0 license

use super::findings::{AdvisoryCode, Findings};
use super::orchestrator::Emitter;
use crate::error::{Error, Result};
use crate::target::{BlockDef, BlockNesting};
use crate::types::{Element, PropertySpec, ValueType};

impl Emitter {
    /// Emit a nested block for the property at `path`.
    ///
    /// Only lists and sets of nested resources have a block representation.
    pub fn emit_block(&self, path: &[&str], property: &PropertySpec) -> Result<(BlockDef, Findings)> {
        let nesting = match property.value_type {
            ValueType::List => BlockNesting::List,
            ValueType::Set => BlockNesting::Set,
            ValueType::Bool
            | ValueType::Int
            | ValueType::Float
            | ValueType::String
            | ValueType::Map
            | ValueType::Object
            | ValueType::Invalid => {
                return Err(Error::unsupported_type(
                    path,
                    format!("(block) {}", property.value_type),
                ));
            }
        };

        let resource = match &property.elem {
            Some(Element::Resource(resource)) => resource,
            Some(Element::Schema(leaf)) => {
                return Err(Error::unsupported_type(
                    path,
                    format!("(block) {} of {}", property.value_type, leaf.value_type),
                ));
            }
            None => {
                return Err(Error::unsupported_type(
                    path,
                    format!("(block) {} without element", property.value_type),
                ));
            }
        };

        let (nested, mut findings) = self.emit_attributes_and_blocks(path, resource)?;
        let (min_items, max_items) = block_cardinality(property);

        if let Some(default) = &property.default {
            findings.advise(
                AdvisoryCode::BlockDefault,
                path,
                format!("Block {} has non-nil Default: {}", path.join("."), default),
                false,
            );
        }

        Ok((
            BlockDef {
                nesting,
                nested,
                min_items,
                max_items,
                description: property.description.clone(),
                deprecation_message: property.deprecated.clone(),
            },
            findings,
        ))
    }
}

/// Corrected `(min_items, max_items)` of a block; zero means unset.
///
/// Applied in order, later rules override earlier ones:
/// required blocks appear at least once, optional blocks have no lower
/// bound, computed-only blocks have no bounds at all.
pub fn block_cardinality(property: &PropertySpec) -> (u32, u32) {
    let mut min_items = property.min_items;
    let mut max_items = property.max_items;

    if property.required && min_items == 0 {
        min_items = 1;
    }
    if property.optional && min_items > 0 {
        min_items = 0;
    }
    if property.is_computed_only() {
        min_items = 0;
        max_items = 0;
    }

    (min_items, max_items)
}
