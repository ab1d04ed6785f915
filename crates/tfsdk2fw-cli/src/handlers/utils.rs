//! Shared utilities for command handlers

use crate::cli::SourceArgs;
use crate::config::Config;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tfsdk2fw_core::migration::go_field_name;
use tfsdk2fw_core::{ProviderRegistry, ResourceSpec, SchemaTarget};

/// A source schema together with the registry entry it was loaded for
#[derive(Debug)]
pub struct LoadedSource {
    pub spec: ResourceSpec,
    pub target: SchemaTarget,
    pub origin: PathBuf,
}

/// Load the schema addressed by the source arguments.
///
/// `--spec` reads a single schema document; otherwise the registry comes from
/// `--registry` or the configured `registry.path`.
pub fn load_source(args: &SourceArgs, config: &Config) -> Result<LoadedSource> {
    let target = args
        .target()
        .ok_or_else(|| Error::invalid_args("one of --resource or --data-source is required"))?;

    if let Some(path) = &args.spec {
        ensure_exists(path)?;
        tracing::debug!(path = %path.display(), "Loading single schema document");
        return Ok(LoadedSource {
            spec: ResourceSpec::from_path(path)?,
            target,
            origin: path.clone(),
        });
    }

    let path = args
        .registry
        .as_ref()
        .or(config.registry.path.as_ref())
        .ok_or_else(|| {
            Error::invalid_args(
                "no source schema: pass --spec or --registry, or set registry.path in the configuration",
            )
        })?;
    ensure_exists(path)?;

    tracing::debug!(path = %path.display(), target = ?target, "Loading provider registry");
    let registry = ProviderRegistry::from_path(path)?;
    let spec = registry.lookup(&target)?.clone();

    Ok(LoadedSource {
        spec,
        target,
        origin: path.clone(),
    })
}

fn ensure_exists(path: &Path) -> Result<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(Error::FileNotFound {
            path: path.to_path_buf(),
        })
    }
}

/// Go package for generated code: the argument, then the configured package
pub fn resolve_package_name(arg: Option<&str>, config: &Config) -> Result<String> {
    let package_name = arg
        .or(config.generation.package_name.as_deref())
        .ok_or_else(|| {
            Error::invalid_args(
                "no Go package given: pass PACKAGE or set generation.package_name in the configuration",
            )
        })?;

    if !is_go_package_name(package_name) {
        return Err(Error::invalid_args(format!(
            "'{}' is not a valid Go package name",
            package_name
        )));
    }

    Ok(package_name.to_string())
}

fn is_go_package_name(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_lowercase())
        && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

/// `aws_sqs_queue` -> `SqsQueue`
pub fn default_go_name(type_name: &str) -> String {
    let unprefixed = type_name
        .split_once('_')
        .map(|(_, rest)| rest)
        .filter(|rest| !rest.is_empty())
        .unwrap_or(type_name);
    go_field_name(unprefixed)
}

/// Relative output paths resolve against `generation.output_dir` when set
pub fn resolve_output_path(path: &Path, config: &Config) -> PathBuf {
    match &config.generation.output_dir {
        Some(dir) if path.is_relative() => dir.join(path),
        _ => path.to_path_buf(),
    }
}

/// Write generated text, creating parent directories and ending with a newline
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut text = content.to_string();
    if !text.ends_with('\n') {
        text.push('\n');
    }
    fs::write(path, text)?;

    tracing::debug!(path = %path.display(), bytes = content.len(), "Wrote file");
    Ok(())
}
