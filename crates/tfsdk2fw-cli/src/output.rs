//! Output formatting and writing utilities
//!
//! This module provides utilities for formatting and writing output
//! in various formats (JSON, YAML, human-readable) for migration
//! summaries and classification reports.

use crate::cli::OutputFormat;
use crate::error::Result;
use colored::Colorize;
use serde::Serialize;
use std::collections::BTreeSet;
use std::io::{self, Write};
use std::path::PathBuf;
use tfsdk2fw_core::{
    Capabilities, ClassifiedProperty, Diagnostic, DiagnosticSummary, MigrationMetadata,
    MigrationResult, SchemaKind,
};
use tracing::trace;

/// Machine-readable account of one migration
#[derive(Debug, Clone, Serialize)]
pub struct MigrationSummary {
    pub type_name: String,
    pub kind: SchemaKind,
    pub name: String,
    pub package_name: String,
    pub capabilities: Capabilities,
    pub plan_modifier_packages: BTreeSet<String>,
    pub diagnostics: Vec<Diagnostic>,
    pub diagnostic_summary: DiagnosticSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema_file: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_file: Option<PathBuf>,
    /// Present when the schema was not written to a file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema_text: Option<String>,
    /// Present when the model was not written to a file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_text: Option<String>,
    pub metadata: MigrationMetadata,
}

impl MigrationSummary {
    pub fn new(
        result: &MigrationResult,
        schema_file: Option<PathBuf>,
        model_file: Option<PathBuf>,
    ) -> Self {
        Self {
            type_name: result.metadata.type_name.clone(),
            kind: result.metadata.kind,
            name: result.metadata.name.clone(),
            package_name: result.metadata.package_name.clone(),
            capabilities: result.capabilities,
            plan_modifier_packages: result.plan_modifier_packages.clone(),
            diagnostics: result.diagnostics.clone(),
            diagnostic_summary: result.summary(),
            schema_text: schema_file.is_none().then(|| result.schema_text.clone()),
            model_text: model_file.is_none().then(|| result.model_text.clone()),
            schema_file,
            model_file,
            metadata: result.metadata.clone(),
        }
    }
}

/// Trait for formatting output with specialized support for common types
pub trait OutputFormatter {
    /// Format a serializable value
    fn format<T: Serialize>(&self, value: &T) -> Result<String>;

    /// Format a migration summary with its diagnostics
    fn format_migration_summary(&self, summary: &MigrationSummary) -> Result<String>;

    /// Format a classification report
    fn format_classification(&self, classified: &[ClassifiedProperty]) -> Result<String>;
}

impl OutputFormatter for OutputFormat {
    fn format<T: Serialize>(&self, value: &T) -> Result<String> {
        match self {
            OutputFormat::Json => Ok(serde_json::to_string(value)?),
            OutputFormat::JsonPretty => Ok(serde_json::to_string_pretty(value)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
            // Human output falls back to pretty JSON
            OutputFormat::Human => Ok(serde_json::to_string_pretty(value)?),
        }
    }

    fn format_migration_summary(&self, summary: &MigrationSummary) -> Result<String> {
        match self {
            OutputFormat::Human => Ok(format_migration_summary_human(summary)),
            _ => self.format(summary),
        }
    }

    fn format_classification(&self, classified: &[ClassifiedProperty]) -> Result<String> {
        match self {
            OutputFormat::Human => Ok(format_classification_human(classified)),
            _ => self.format(&classified),
        }
    }
}

/// Output writer that handles different output formats and colors
pub struct OutputWriter {
    format: OutputFormat,
    use_color: bool,
    quiet: bool,
    writer: Box<dyn Write>,
}

impl OutputWriter {
    /// Create a new output writer on stdout
    pub fn new(format: OutputFormat, use_color: bool, quiet: bool) -> Self {
        Self::with_writer(format, use_color, quiet, Box::new(io::stdout()))
    }

    /// Create an output writer with a custom writer
    pub fn with_writer(
        format: OutputFormat,
        use_color: bool,
        quiet: bool,
        writer: Box<dyn Write>,
    ) -> Self {
        Self {
            format,
            use_color,
            quiet,
            writer,
        }
    }

    /// Get the output format
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Write raw output
    pub fn write(&mut self, content: &str) -> Result<()> {
        write!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write a line of output
    pub fn writeln(&mut self, content: &str) -> Result<()> {
        writeln!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write a success message
    pub fn success(&mut self, message: &str) -> Result<()> {
        if self.quiet || self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&message.green().to_string())
        } else {
            self.writeln(message)
        }
    }

    /// Write a section header
    pub fn section(&mut self, title: &str) -> Result<()> {
        if self.quiet || self.format != OutputFormat::Human {
            return Ok(());
        }

        self.writeln("")?;
        if self.use_color {
            self.writeln(&format!("═══ {} ═══", title).bright_blue().to_string())
        } else {
            self.writeln(&format!("=== {} ===", title))
        }
    }

    /// Write a migration summary with specialized formatting
    pub fn migration_summary(&mut self, summary: &MigrationSummary) -> Result<()> {
        if self.quiet && self.format == OutputFormat::Human {
            return Ok(());
        }
        let formatted = self.format.format_migration_summary(summary)?;
        self.write_formatted(&formatted)
    }

    /// Write a classification report
    pub fn classification(&mut self, classified: &[ClassifiedProperty]) -> Result<()> {
        let formatted = self.format.format_classification(classified)?;
        self.write_formatted(&formatted)
    }

    fn write_formatted(&mut self, formatted: &str) -> Result<()> {
        trace!(bytes = formatted.len(), "Writing formatted output");
        if formatted.ends_with('\n') {
            self.write(formatted)
        } else {
            self.writeln(formatted)
        }
    }
}

/// Format a migration summary for human reading
fn format_migration_summary_human(summary: &MigrationSummary) -> String {
    let mut output = String::new();

    output.push_str("\n=== Migration Summary ===\n\n");
    output.push_str(&format!("  Type:     {} ({})\n", summary.type_name, summary.kind));
    if !summary.name.is_empty() {
        output.push_str(&format!("  Name:     {}\n", summary.name));
    }
    if !summary.package_name.is_empty() {
        output.push_str(&format!("  Package:  {}\n", summary.package_name));
    }
    if let Some(path) = &summary.schema_file {
        output.push_str(&format!("  Schema:   {}\n", path.display()));
    }
    if let Some(path) = &summary.model_file {
        output.push_str(&format!("  Model:    {}\n", path.display()));
    }

    if !summary.plan_modifier_packages.is_empty() {
        let packages: Vec<_> = summary.plan_modifier_packages.iter().map(String::as_str).collect();
        output.push_str(&format!("\nPlan modifier packages: {}\n", packages.join(", ")));
    }

    let follow_ups = follow_ups(&summary.capabilities);
    if !follow_ups.is_empty() {
        output.push_str("\nFollow-up code:\n");
        for item in follow_ups {
            output.push_str(&format!("  • {}\n", item));
        }
    }

    if summary.diagnostics.is_empty() {
        output.push_str("\nNo diagnostics\n");
    } else {
        output.push_str(&format!("\nDiagnostics ({}):\n", summary.diagnostic_summary.total));
        for diagnostic in &summary.diagnostics {
            output.push_str(&format!(
                "  [{}] {} {}: {}\n",
                diagnostic.severity, diagnostic.code, diagnostic.path, diagnostic.message
            ));
        }
    }

    output
}

fn follow_ups(capabilities: &Capabilities) -> Vec<&'static str> {
    let mut items = Vec::new();
    if capabilities.emit_import_state {
        items.push("import state");
    }
    if capabilities.emit_update_skeleton {
        items.push("update");
    }
    if capabilities.emit_modify_plan {
        items.push("modify plan (tags)");
    }
    if capabilities.import_framework_attr {
        items.push("import github.com/hashicorp/terraform-plugin-framework/attr");
    }
    if capabilities.import_provider_framework_types {
        items.push("import provider framework types (fwtypes)");
    }
    items
}

/// Format a classification report as a table
fn format_classification_human(classified: &[ClassifiedProperty]) -> String {
    let rows: Vec<Vec<String>> = classified
        .iter()
        .map(|property| {
            let mut notes = Vec::new();
            if property.computed_only {
                notes.push("computed-only");
            }
            if property.object_typed {
                notes.push("object-typed");
            }
            vec![
                property.path.clone(),
                property.value_type.to_string(),
                property.classification.to_string(),
                notes.join(", "),
            ]
        })
        .collect();

    render_table(&["PATH", "TYPE", "KIND", "NOTES"], &rows)
}

fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths = headers.iter().map(|h| h.len()).collect::<Vec<_>>();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }
    }

    let format_row = |cells: Vec<&str>| {
        cells
            .iter()
            .enumerate()
            .map(|(i, cell)| format!("{:width$}", cell, width = widths[i]))
            .collect::<Vec<_>>()
            .join(" │ ")
            .trim_end()
            .to_string()
    };

    let mut output = format_row(headers.to_vec());
    output.push('\n');
    output.push_str(
        &widths
            .iter()
            .map(|w| "─".repeat(*w))
            .collect::<Vec<_>>()
            .join("─┼─"),
    );
    output.push('\n');
    for row in rows {
        output.push_str(&format_row(row.iter().map(String::as_str).collect()));
        output.push('\n');
    }
    output
}
