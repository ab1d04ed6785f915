//! Migrate command handler

use super::utils::{
    default_go_name, load_source, resolve_output_path, resolve_package_name, write_file,
};
use crate::cli::{MigrateArgs, OutputFormat};
use crate::config::Config;
use crate::error::Result;
use crate::logging::timing::Timer;
use crate::output::{MigrationSummary, OutputWriter};
use tfsdk2fw_core::{migrate, MigrationOptions};

/// Handle the migrate command
///
/// Nothing is written when the schema cannot be migrated; file outputs only
/// happen after the whole tree has been emitted.
pub fn handle_migrate(args: MigrateArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let loaded = load_source(&args.source, config)?;
    let type_name = loaded.target.type_name().to_string();
    let _timer = Timer::with_details("migrate", &type_name);

    let package_name = resolve_package_name(args.package_name.as_deref(), config)?;
    let name = args.name.unwrap_or_else(|| default_go_name(&type_name));

    tracing::info!(
        type_name = %type_name,
        kind = %loaded.target.kind(),
        source = %loaded.origin.display(),
        package_name = %package_name,
        name = %name,
        "Migrating schema"
    );

    let options = MigrationOptions::new(loaded.target.kind(), type_name)
        .with_name(name)
        .with_package_name(package_name);
    let result = migrate(&loaded.spec, &options)?;

    tracing::info!(
        diagnostics = result.diagnostics.len(),
        plan_modifier_packages = result.plan_modifier_packages.len(),
        "Migration finished"
    );

    let schema_file = args
        .schema_out
        .as_deref()
        .map(|path| resolve_output_path(path, config));
    if let Some(path) = &schema_file {
        write_file(path, &result.schema_text)?;
    }

    let model_file = args
        .model_out
        .as_deref()
        .map(|path| resolve_output_path(path, config));
    if let Some(path) = &model_file {
        write_file(path, &result.model_text)?;
    }

    let summary = MigrationSummary::new(&result, schema_file, model_file);

    if let Some(path) = &args.summary_out {
        let path = resolve_output_path(path, config);
        write_file(&path, &serde_json::to_string_pretty(&summary)?)?;
    }

    if output.format() == OutputFormat::Human {
        if let Some(text) = &summary.schema_text {
            output.section("Schema")?;
            output.writeln(text)?;
        }
        if let Some(text) = &summary.model_text {
            output.section("Model")?;
            output.writeln(text)?;
        }
    }

    output.migration_summary(&summary)
}
