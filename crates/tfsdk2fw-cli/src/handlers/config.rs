//! Configuration command handlers

use crate::cli::{ConfigAction, ConfigArgs, ConfigFormat};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::output::OutputWriter;
use std::path::Path;

/// Handle the config command
pub fn handle_config(args: ConfigArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    match args.action {
        ConfigAction::Show { format } => handle_config_show(format, config, output),
        ConfigAction::Init { path, force } => handle_config_init(&path, force, output),
    }
}

/// Handle config show subcommand
fn handle_config_show(format: ConfigFormat, config: &Config, output: &mut OutputWriter) -> Result<()> {
    output.writeln(render_config(config, format)?.trim_end())
}

fn render_config(config: &Config, format: ConfigFormat) -> Result<String> {
    match format {
        ConfigFormat::Toml => config.to_toml(),
        ConfigFormat::Json => serde_json::to_string_pretty(config)
            .map_err(|e| Error::config(format!("Failed to serialize as JSON: {}", e))),
        ConfigFormat::Yaml => serde_yaml::to_string(config)
            .map_err(|e| Error::config(format!("Failed to serialize as YAML: {}", e))),
    }
}

/// Handle config init subcommand
fn handle_config_init(path: &Path, force: bool, output: &mut OutputWriter) -> Result<()> {
    if path.exists() && !force {
        return Err(Error::config(format!(
            "{} already exists; pass --force to overwrite it",
            path.display()
        )));
    }

    Config::default().save(path)?;
    tracing::info!(path = %path.display(), "Wrote default configuration");
    output.success(&format!("✓ Created config at {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use tempfile::TempDir;

    fn sink() -> OutputWriter {
        OutputWriter::with_writer(OutputFormat::Human, false, true, Box::new(std::io::sink()))
    }

    #[test]
    fn test_init_writes_loadable_default() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".tfsdk2fw.toml");

        handle_config_init(&path, false, &mut sink()).unwrap();
        assert_eq!(Config::from_file(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_init_refuses_to_overwrite_without_force() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "output:\n  color: false\n").unwrap();

        let err = handle_config_init(&path, false, &mut sink()).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(!Config::from_file(&path).unwrap().output.color);

        handle_config_init(&path, true, &mut sink()).unwrap();
        assert!(Config::from_file(&path).unwrap().output.color);
    }

    #[test]
    fn test_render_config_formats() {
        let mut config = Config::default();
        config.generation.package_name = Some("sqs".to_string());

        assert!(render_config(&config, ConfigFormat::Toml)
            .unwrap()
            .contains("package_name = \"sqs\""));
        assert!(render_config(&config, ConfigFormat::Json)
            .unwrap()
            .contains("\"package_name\": \"sqs\""));
        assert!(render_config(&config, ConfigFormat::Yaml)
            .unwrap()
            .contains("package_name: sqs"));
    }
}
