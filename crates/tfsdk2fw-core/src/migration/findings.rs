//! Advisory findings accumulated during a migration walk
//!
//! Every emission step returns its own [`Findings`] value alongside the
//! descriptor it built; callers merge child findings into their own. Nothing
//! is shared or mutated across recursive calls.
//!
//! Copyright (c) 2025 Tfsdk2fw Team
//! Licensed under the Apache-2.0 license

use crate::Severity;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Recognized construct that cannot be faithfully represented
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AdvisoryCode {
    /// The source schema declares its own `id` property
    ExplicitId,
    /// Attribute default value has no framework equivalent
    DefaultValue,
    /// Attribute validation function has no framework equivalent
    Validator,
    /// A block declares a default, which blocks cannot carry
    BlockDefault,
    /// Top-level tags map left to the tags helpers
    TagsHelper,
}

impl AdvisoryCode {
    pub fn severity(self) -> Severity {
        match self {
            AdvisoryCode::TagsHelper => Severity::Info,
            AdvisoryCode::ExplicitId
            | AdvisoryCode::DefaultValue
            | AdvisoryCode::Validator
            | AdvisoryCode::BlockDefault => Severity::Warning,
        }
    }
}

impl fmt::Display for AdvisoryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdvisoryCode::ExplicitId => write!(f, "ExplicitId"),
            AdvisoryCode::DefaultValue => write!(f, "DefaultValue"),
            AdvisoryCode::Validator => write!(f, "Validator"),
            AdvisoryCode::BlockDefault => write!(f, "BlockDefault"),
            AdvisoryCode::TagsHelper => write!(f, "TagsHelper"),
        }
    }
}

/// A single advisory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub code: AdvisoryCode,
    /// Dotted property path
    pub path: String,
    pub message: String,
    pub severity: Severity,
    /// Whether a marker for this advisory is embedded in the schema text
    pub inline: bool,
}

/// Totals over a list of diagnostics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticSummary {
    pub total: usize,
    pub by_code: BTreeMap<String, usize>,
    pub by_severity: BTreeMap<String, usize>,
}

impl DiagnosticSummary {
    pub fn from_diagnostics(diagnostics: &[Diagnostic]) -> Self {
        let mut summary = Self {
            total: diagnostics.len(),
            ..Self::default()
        };
        for diagnostic in diagnostics {
            *summary.by_code.entry(diagnostic.code.to_string()).or_insert(0) += 1;
            *summary
                .by_severity
                .entry(diagnostic.severity.to_string())
                .or_insert(0) += 1;
        }
        summary
    }
}

/// Accumulated side results of an emission step
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Findings {
    /// Go packages of every plan modifier emitted
    pub plan_modifier_packages: BTreeSet<String>,
    /// Advisories in walk order
    pub diagnostics: Vec<Diagnostic>,
    pub has_top_level_tags_map: bool,
    pub has_top_level_tags_all_map: bool,
    /// An `attr.Type` map was emitted
    pub import_framework_attr: bool,
    /// A provider custom type was emitted
    pub import_provider_framework_types: bool,
}

impl Findings {
    /// Fold a child step's findings into this one
    pub fn merge(&mut self, other: Findings) {
        self.plan_modifier_packages.extend(other.plan_modifier_packages);
        self.diagnostics.extend(other.diagnostics);
        self.has_top_level_tags_map |= other.has_top_level_tags_map;
        self.has_top_level_tags_all_map |= other.has_top_level_tags_all_map;
        self.import_framework_attr |= other.import_framework_attr;
        self.import_provider_framework_types |= other.import_provider_framework_types;
    }

    /// Record an advisory and log it
    pub fn advise(&mut self, code: AdvisoryCode, path: &[&str], message: impl Into<String>, inline: bool) {
        let diagnostic = Diagnostic {
            code,
            path: path.join("."),
            message: message.into(),
            severity: code.severity(),
            inline,
        };

        match diagnostic.severity {
            Severity::Info => tracing::info!(
                code = %diagnostic.code,
                path = %diagnostic.path,
                "{}", diagnostic.message
            ),
            Severity::Warning => tracing::warn!(
                code = %diagnostic.code,
                path = %diagnostic.path,
                "{}", diagnostic.message
            ),
        }

        self.diagnostics.push(diagnostic);
    }

    pub fn summary(&self) -> DiagnosticSummary {
        DiagnosticSummary::from_diagnostics(&self.diagnostics)
    }
}
