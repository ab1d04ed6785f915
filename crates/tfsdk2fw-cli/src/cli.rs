//! Command-line interface argument parsing and definitions
//!
//! This module defines the CLI structure using clap's derive API,
//! providing a type-safe and well-documented command interface.

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::io::IsTerminal;
use std::path::PathBuf;
use tfsdk2fw_core::SchemaTarget;

/// Tfsdk2fw - Terraform Plugin SDK to Plugin Framework schema migration
///
/// Reads a Plugin SDK resource or data source schema and emits the
/// equivalent Plugin Framework schema literal and model struct as Go source.
#[derive(Parser, Debug)]
#[command(
    name = "tfsdk2fw",
    version,
    author,
    about,
    long_about = None,
    propagate_version = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Enable verbose output (can be used multiple times for increased verbosity)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "TFSDK2FW_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format for results (defaults to the configured format)
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Migrate a resource or data source schema to Plugin Framework code
    Migrate(MigrateArgs),

    /// Show how each property would be classified, without emitting code
    Classify(ClassifyArgs),

    /// Manage configuration files and settings
    Config(ConfigArgs),

    /// Generate shell completions for the specified shell
    Completions(CompletionsArgs),
}

/// Where the source schema comes from
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Provider registry document (JSON or YAML); falls back to the configured registry
    #[arg(long, value_name = "FILE", conflicts_with = "spec")]
    pub registry: Option<PathBuf>,

    /// Single resource schema document (JSON or YAML)
    #[arg(long, value_name = "FILE")]
    pub spec: Option<PathBuf>,

    /// Resource type name, e.g. aws_sqs_queue
    #[arg(
        long,
        value_name = "TYPE",
        required_unless_present = "data_source",
        conflicts_with = "data_source"
    )]
    pub resource: Option<String>,

    /// Data source type name
    #[arg(long, value_name = "TYPE")]
    pub data_source: Option<String>,
}

impl SourceArgs {
    /// The registry entry this invocation addresses
    pub fn target(&self) -> Option<SchemaTarget> {
        match (&self.resource, &self.data_source) {
            (Some(type_name), _) => Some(SchemaTarget::Resource(type_name.clone())),
            (None, Some(type_name)) => Some(SchemaTarget::DataSource(type_name.clone())),
            (None, None) => None,
        }
    }
}

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Go package the generated code belongs to (defaults to the configured package)
    #[arg(value_name = "PACKAGE")]
    pub package_name: Option<String>,

    /// Go name of the generated resource (derived from the type name if omitted)
    #[arg(value_name = "NAME")]
    pub name: Option<String>,

    /// Write the schema literal to this file
    #[arg(long, value_name = "FILE")]
    pub schema_out: Option<PathBuf>,

    /// Write the model struct fields to this file
    #[arg(long, value_name = "FILE")]
    pub model_out: Option<PathBuf>,

    /// Write the machine-readable migration summary (JSON) to this file
    #[arg(long, value_name = "FILE")]
    pub summary_out: Option<PathBuf>,
}

/// Arguments for the classify command
#[derive(Parser, Debug)]
pub struct ClassifyArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration management actions
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the effective configuration
    Show {
        /// Show configuration in specified format
        #[arg(short, long, value_enum, default_value = "toml")]
        format: ConfigFormat,
    },

    /// Write a default configuration file
    Init {
        /// Where to write the file (format follows the extension)
        #[arg(long, default_value = ".tfsdk2fw.toml")]
        path: PathBuf,

        /// Force overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Configuration file formats
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ConfigFormat {
    /// TOML format
    Toml,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

/// Arguments for generating shell completions
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Output format options
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Human-readable formatted output
    #[default]
    Human,
    /// JSON output
    Json,
    /// YAML output
    Yaml,
    /// Pretty-printed JSON output
    JsonPretty,
}

/// Supported shells for completion generation
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    PowerShell,
    /// Elvish shell
    Elvish,
}

impl Cli {
    /// Get the effective verbosity level (considering quiet flag)
    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }

    /// Check if colored output should be used
    pub fn use_color(&self) -> bool {
        !self.no_color && std::io::stdout().is_terminal()
    }
}

impl Shell {
    /// Convert to clap_complete shell type
    pub fn to_clap_shell(self) -> clap_complete::Shell {
        match self {
            Shell::Bash => clap_complete::Shell::Bash,
            Shell::Zsh => clap_complete::Shell::Zsh,
            Shell::Fish => clap_complete::Shell::Fish,
            Shell::PowerShell => clap_complete::Shell::PowerShell,
            Shell::Elvish => clap_complete::Shell::Elvish,
        }
    }
}
